//! Guide renderer trait abstraction.

use kurbo::Rect;
use peniko::Color;
use snapline_core::distance::DistanceMeasurement;
use snapline_core::guides::AlignmentGuide;

/// Colors and sizes for the guide overlay, in screen pixels.
#[derive(Debug, Clone, Copy)]
pub struct GuideStyle {
    /// Alignment guide line color.
    pub guide_color: Color,
    /// Dimension line, marker and label color.
    pub distance_color: Color,
    pub stroke_width: f64,
    /// Dash and gap length for guide lines.
    pub dash: [f64; 2],
    /// Length of the end markers on dimension lines.
    pub marker_size: f64,
    /// Distance between a dimension line and its label.
    pub label_offset: f64,
    pub font_size: f64,
}

impl Default for GuideStyle {
    fn default() -> Self {
        Self {
            guide_color: Color::from_rgba8(236, 72, 153, 200), // Pink-500
            distance_color: Color::from_rgba8(59, 130, 246, 230), // Blue-500
            stroke_width: 1.0,
            dash: [4.0, 4.0],
            marker_size: 8.0,
            label_offset: 10.0,
            font_size: 11.0,
        }
    }
}

/// Input for a single overlay draw.
pub struct OverlayContext<'a> {
    /// Active guides from the engine.
    pub guides: &'a [AlignmentGuide],
    /// Distance measurements from the engine.
    pub distances: &'a [DistanceMeasurement],
    /// Visible area in canvas coordinates. Guide lines span all of it.
    pub viewport: Rect,
    /// Camera zoom; overlay sizes are divided by it to stay constant on screen.
    pub zoom: f64,
    pub style: GuideStyle,
}

impl<'a> OverlayContext<'a> {
    /// Create an empty context for the given visible area.
    pub fn new(viewport: Rect) -> Self {
        Self {
            guides: &[],
            distances: &[],
            viewport,
            zoom: 1.0,
            style: GuideStyle::default(),
        }
    }

    /// Set the guides to draw.
    pub fn with_guides(mut self, guides: &'a [AlignmentGuide]) -> Self {
        self.guides = guides;
        self
    }

    /// Set the distance measurements to draw.
    pub fn with_distances(mut self, distances: &'a [DistanceMeasurement]) -> Self {
        self.distances = distances;
        self
    }

    /// Set the camera zoom.
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    /// Set the overlay style.
    pub fn with_style(mut self, style: GuideStyle) -> Self {
        self.style = style;
        self
    }

    /// Convert a screen-pixel size to canvas units.
    pub(crate) fn screen_size(&self, pixels: f64) -> f64 {
        if self.zoom > 0.0 { pixels / self.zoom } else { pixels }
    }
}

/// Trait for guide overlay backends.
///
/// `draw` replaces everything drawn by the previous call. `clear` is called
/// by the host when a drag ends or the selection changes.
pub trait GuideRenderer {
    fn draw(&mut self, ctx: &OverlayContext);

    fn clear(&mut self);
}
