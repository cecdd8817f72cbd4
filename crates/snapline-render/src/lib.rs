//! Snapline Render Library
//!
//! The guide overlay contract and a backend-agnostic display-list
//! implementation. Hosts paint the resulting primitives with whatever
//! drawing API they use, underneath their scene objects.

mod display_list;
mod renderer;

pub use display_list::{DisplayListRenderer, OverlayPrimitive};
pub use renderer::{GuideRenderer, GuideStyle, OverlayContext};
