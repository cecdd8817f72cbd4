//! Display-list guide renderer.

use crate::renderer::{GuideRenderer, OverlayContext};
use kurbo::{Line, Point, Stroke, Vec2};
use peniko::Color;
use snapline_core::distance::{Direction, DistanceMeasurement};
use snapline_core::guides::{AlignmentGuide, Orientation};

/// One drawing command for the guide overlay, in canvas coordinates.
#[derive(Debug, Clone)]
pub enum OverlayPrimitive {
    /// Dashed line across the whole viewport.
    GuideLine { line: Line, stroke: Stroke, color: Color },
    /// Solid line spanning a measured gap.
    DimensionLine { line: Line, stroke: Stroke, color: Color },
    /// Short tick perpendicular to a dimension line.
    EndMarker { line: Line, stroke: Stroke, color: Color },
    /// Distance text, centered on `position`.
    Label {
        position: Point,
        text: String,
        font_size: f64,
        color: Color,
    },
}

/// Renderer that records overlay primitives instead of painting them.
///
/// Hosts paint [`primitives`](Self::primitives) before their scene objects so
/// the overlay stays underneath.
#[derive(Debug, Default)]
pub struct DisplayListRenderer {
    primitives: Vec<OverlayPrimitive>,
}

impl DisplayListRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Primitives from the last draw, in paint order.
    pub fn primitives(&self) -> &[OverlayPrimitive] {
        &self.primitives
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    fn push_guide(&mut self, guide: &AlignmentGuide, ctx: &OverlayContext) {
        let viewport = ctx.viewport;
        let line = match guide.orientation {
            Orientation::Vertical => Line::new(
                Point::new(guide.position, viewport.y0),
                Point::new(guide.position, viewport.y1),
            ),
            Orientation::Horizontal => Line::new(
                Point::new(viewport.x0, guide.position),
                Point::new(viewport.x1, guide.position),
            ),
        };
        let dash = ctx.style.dash.map(|len| ctx.screen_size(len));
        let stroke = Stroke::new(ctx.screen_size(ctx.style.stroke_width)).with_dashes(0.0, dash);

        self.primitives.push(OverlayPrimitive::GuideLine {
            line,
            stroke,
            color: ctx.style.guide_color,
        });
    }

    fn push_measurement(&mut self, measurement: &DistanceMeasurement, ctx: &OverlayContext) {
        let color = ctx.style.distance_color;
        let stroke = Stroke::new(ctx.screen_size(ctx.style.stroke_width));
        let half_marker = ctx.screen_size(ctx.style.marker_size) / 2.0;

        // Unit vector perpendicular to the dimension line
        let normal = match measurement.direction {
            Direction::Horizontal => Vec2::new(0.0, 1.0),
            Direction::Vertical => Vec2::new(1.0, 0.0),
        };

        self.primitives.push(OverlayPrimitive::DimensionLine {
            line: Line::new(measurement.from_point, measurement.to_point),
            stroke: stroke.clone(),
            color,
        });
        for end in [measurement.from_point, measurement.to_point] {
            self.primitives.push(OverlayPrimitive::EndMarker {
                line: Line::new(end - normal * half_marker, end + normal * half_marker),
                stroke: stroke.clone(),
                color,
            });
        }

        // Above horizontal lines, right of vertical ones
        let label_shift = match measurement.direction {
            Direction::Horizontal => Vec2::new(0.0, -ctx.screen_size(ctx.style.label_offset)),
            Direction::Vertical => Vec2::new(ctx.screen_size(ctx.style.label_offset), 0.0),
        };
        self.primitives.push(OverlayPrimitive::Label {
            position: measurement.midpoint() + label_shift,
            text: distance_label(measurement.distance),
            font_size: ctx.screen_size(ctx.style.font_size),
            color,
        });
    }
}

/// Label text for a measured gap, e.g. `"48px"`.
pub(crate) fn distance_label(distance: f64) -> String {
    format!("{}px", distance.round() as i64)
}

impl GuideRenderer for DisplayListRenderer {
    fn draw(&mut self, ctx: &OverlayContext) {
        self.clear();
        for guide in ctx.guides {
            self.push_guide(guide, ctx);
        }
        for measurement in ctx.distances {
            self.push_measurement(measurement, ctx);
        }
        log::trace!("overlay: {} primitives", self.primitives.len());
    }

    fn clear(&mut self) {
        self.primitives.clear();
    }
}
