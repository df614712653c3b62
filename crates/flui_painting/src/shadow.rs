//! Shadow painting implementation

use flui_engine::{Paint, Painter, RRect};
use flui_types::{Rect, styling::BoxShadow};

/// Painter for box shadows
pub struct ShadowPainter;

impl ShadowPainter {
    /// Paint a list of box shadows
    ///
    /// # Arguments
    ///
    /// * `painter` - The backend-agnostic painter to draw with
    /// * `rect` - The rectangle to paint shadows around
    /// * `shadows` - The list of box shadows to paint
    /// * `border_radius` - Optional border radius for rounded shadows
    pub fn paint(
        painter: &mut dyn Painter,
        rect: Rect,
        shadows: &[BoxShadow],
        border_radius: Option<f32>,
    ) {
        for shadow in shadows {
            Self::paint_single(painter, rect, shadow, border_radius);
        }
    }

    /// Paint a single box shadow
    fn paint_single(
        painter: &mut dyn Painter,
        rect: Rect,
        shadow: &BoxShadow,
        border_radius: Option<f32>,
    ) {
        // Calculate shadow rect with offset
        let shadow_rect = Rect::from_xywh(
            rect.left() + shadow.offset.dx,
            rect.top() + shadow.offset.dy,
            rect.width(),
            rect.height(),
        );

        // Adjust for spread radius
        let shadow_rect = if shadow.spread_radius > 0.0 {
            Rect::from_xywh(
                shadow_rect.left() - shadow.spread_radius,
                shadow_rect.top() - shadow.spread_radius,
                shadow_rect.width() + shadow.spread_radius * 2.0,
                shadow_rect.height() + shadow.spread_radius * 2.0,
            )
        } else if shadow.spread_radius < 0.0 {
            Rect::from_xywh(
                shadow_rect.left() + shadow.spread_radius.abs(),
                shadow_rect.top() + shadow.spread_radius.abs(),
                shadow_rect.width() - shadow.spread_radius.abs() * 2.0,
                shadow_rect.height() - shadow.spread_radius.abs() * 2.0,
            )
        } else {
            shadow_rect
        };

        let base_color = [
            shadow.color.red() as f32 / 255.0,
            shadow.color.green() as f32 / 255.0,
            shadow.color.blue() as f32 / 255.0,
            shadow.color.alpha() as f32 / 255.0,
        ];

        // Paint using the built-in shadow methods from Painter trait
        if let Some(radius) = border_radius {
            // Rounded rectangle shadow
            let rrect = RRect {
                rect: shadow_rect,
                corner_radius: radius,
            };

            let paint = Paint {
                color: base_color,
                stroke_width: 0.0,
                anti_alias: true,
            };

            let offset = flui_types::Offset::new(0.0, 0.0);
            painter.rrect_with_shadow(rrect, &paint, offset, shadow.blur_radius, base_color);
        } else {
            // Sharp rectangle shadow
            let paint = Paint {
                color: base_color,
                stroke_width: 0.0,
                anti_alias: true,
            };

            let offset = flui_types::Offset::new(0.0, 0.0);
            painter.rect_with_shadow(shadow_rect, &paint, offset, shadow.blur_radius, base_color);
        }
    }
}
