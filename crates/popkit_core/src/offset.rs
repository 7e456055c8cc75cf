//! Offset resolution: where popup content sits when displayed and hidden
//!
//! Pure functions over a flattened layout view of the parameters plus the
//! measured geometry. Non-opaque mode positions against the host
//! container; opaque mode substitutes the full screen and compensates for
//! container-relative insets. The hidden offset places content fully past
//! the edge it appears from, keeping the cross-axis coordinate at its
//! displayed value so the slide is single-axis.

use crate::geometry::{MeasuredGeometry, Point};
use crate::params::PopupParameters;
use crate::types::{AppearFrom, Position};

/// Flattened, resolved view of the layout-relevant parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PopupLayout {
    pub position: Position,
    pub appear_from: AppearFrom,
    pub vertical_padding: f32,
    pub horizontal_padding: f32,
    pub use_safe_area_inset: bool,
    pub use_keyboard_safe_area: bool,
    pub is_opaque: bool,
}

impl PopupLayout {
    pub fn from_params(params: &PopupParameters) -> Self {
        Self {
            position: params.resolved_position(),
            appear_from: params.resolved_appear_from(),
            vertical_padding: params.kind.vertical_padding(),
            horizontal_padding: params.kind.horizontal_padding(),
            use_safe_area_inset: params.kind.use_safe_area_inset(),
            use_keyboard_safe_area: params.use_keyboard_safe_area,
            is_opaque: params.is_opaque,
        }
    }
}

/// Offset of the content's top-leading corner when fully displayed
///
/// Tolerates unmeasured (zero) rects without error; callers gate on
/// [`MeasuredGeometry::is_ready`] before trusting the result.
pub fn displayed_offset(layout: &PopupLayout, geo: &MeasuredGeometry) -> Point {
    if !geo.is_ready() {
        tracing::trace!("displayed offset requested before layout is ready");
    }
    Point::new(displayed_x(layout, geo), displayed_y(layout, geo))
}

fn displayed_y(layout: &PopupLayout, geo: &MeasuredGeometry) -> f32 {
    let safe = geo.safe_area;
    let content_h = geo.content.height();
    let keyboard = if layout.use_keyboard_safe_area {
        geo.keyboard_height
    } else {
        0.0
    };

    if layout.is_opaque {
        let screen_h = geo.screen_size().height;
        if layout.position.is_top() {
            return layout.vertical_padding + if layout.use_safe_area_inset { 0.0 } else { -safe.top };
        }
        if layout.position.is_vertical_center() {
            return (screen_h - content_h) / 2.0 - safe.top;
        }
        if layout.position.is_bottom() {
            return screen_h
                - content_h
                - keyboard
                - layout.vertical_padding
                - if layout.use_safe_area_inset { safe.bottom } else { 0.0 }
                - safe.top;
        }
    }

    if layout.position.is_top() {
        return layout.vertical_padding + if layout.use_safe_area_inset { 0.0 } else { -safe.top };
    }
    if layout.position.is_vertical_center() {
        return (geo.container.height() - content_h) / 2.0;
    }
    if layout.position.is_bottom() {
        return geo.container.height()
            - content_h
            - keyboard
            - layout.vertical_padding
            + safe.bottom
            - if layout.use_safe_area_inset { safe.bottom } else { 0.0 };
    }
    0.0
}

fn displayed_x(layout: &PopupLayout, geo: &MeasuredGeometry) -> f32 {
    let safe = geo.safe_area;
    let content_w = geo.content.width();

    if layout.is_opaque {
        let screen_w = geo.screen_size().width;
        if layout.position.is_leading() {
            return layout.horizontal_padding
                + if layout.use_safe_area_inset { safe.leading } else { 0.0 };
        }
        if layout.position.is_horizontal_center() {
            return (screen_w - content_w) / 2.0 - safe.leading;
        }
        if layout.position.is_trailing() {
            return screen_w
                - content_w
                - layout.horizontal_padding
                - if layout.use_safe_area_inset { safe.trailing } else { 0.0 };
        }
    }

    if layout.position.is_leading() {
        return layout.horizontal_padding
            + if layout.use_safe_area_inset { safe.leading } else { 0.0 };
    }
    if layout.position.is_horizontal_center() {
        return (geo.container.width() - content_w) / 2.0;
    }
    if layout.position.is_trailing() {
        return geo.container.width()
            - content_w
            - layout.horizontal_padding
            - if layout.use_safe_area_inset { safe.trailing } else { 0.0 };
    }
    0.0
}

/// Offset of the content when fully hidden past its appear edge
///
/// Unmeasured content yields [`Point::FAR_OFFSCREEN`], which keeps the
/// not-yet-laid-out popup invisible without animating it.
pub fn hidden_offset(layout: &PopupLayout, geo: &MeasuredGeometry) -> Point {
    if geo.content.is_empty() {
        tracing::trace!("content unmeasured, hiding at the far-offscreen sentinel");
        return Point::FAR_OFFSCREEN;
    }

    let screen = geo.screen_size();
    match layout.appear_from {
        AppearFrom::Top => Point::new(
            displayed_x(layout, geo),
            -geo.container.min_y() - geo.safe_area.top - geo.content.height(),
        ),
        AppearFrom::Bottom => Point::new(displayed_x(layout, geo), screen.height),
        AppearFrom::Left => Point::new(-screen.width, displayed_y(layout, geo)),
        AppearFrom::Right => Point::new(screen.width, displayed_y(layout, geo)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{EdgeInsets, Rect, Size};
    use crate::types::PopupType;

    fn geometry(container: Rect, content: Rect) -> MeasuredGeometry {
        MeasuredGeometry {
            container,
            content,
            safe_area: EdgeInsets::ZERO,
            keyboard_height: 0.0,
            screen: container.size,
        }
    }

    fn layout_for(params: &PopupParameters) -> PopupLayout {
        PopupLayout::from_params(params)
    }

    #[test]
    fn bottom_floater_with_safe_area_inset() {
        // container 400x800, content 400x100, bottom, safe bottom 20,
        // padding 10, use_safe_area_inset: 800-100-0-10+20-20 = 690
        let params = PopupParameters::new()
            .kind(PopupType::Floater {
                vertical_padding: 10.0,
                horizontal_padding: 10.0,
                use_safe_area_inset: true,
            })
            .position(Position::Bottom);
        let mut geo = geometry(
            Rect::new(0.0, 0.0, 400.0, 800.0),
            Rect::new(0.0, 0.0, 400.0, 100.0),
        );
        geo.safe_area.bottom = 20.0;

        let offset = displayed_offset(&layout_for(&params), &geo);
        assert_eq!(offset.y, 690.0);
    }

    #[test]
    fn top_leading_floater_ignoring_safe_area() {
        // padding (10,10), safe top 44, inset disabled: (10, 10-44)
        let params = PopupParameters::new()
            .kind(PopupType::Floater {
                vertical_padding: 10.0,
                horizontal_padding: 10.0,
                use_safe_area_inset: false,
            })
            .position(Position::TopLeading);
        let mut geo = geometry(
            Rect::new(0.0, 0.0, 400.0, 800.0),
            Rect::new(0.0, 0.0, 200.0, 100.0),
        );
        geo.safe_area.top = 44.0;

        let offset = displayed_offset(&layout_for(&params), &geo);
        assert_eq!(offset, Point::new(10.0, -34.0));
    }

    #[test]
    fn center_is_midpoint_of_container() {
        let params = PopupParameters::new().position(Position::Center);
        let geo = geometry(
            Rect::new(0.0, 0.0, 400.0, 800.0),
            Rect::new(0.0, 0.0, 200.0, 100.0),
        );
        let offset = displayed_offset(&layout_for(&params), &geo);
        assert_eq!(offset, Point::new(100.0, 350.0));
    }

    #[test]
    fn opaque_center_subtracts_top_inset() {
        let params = PopupParameters::new()
            .position(Position::Center)
            .is_opaque(true);
        let mut geo = geometry(
            Rect::new(0.0, 0.0, 400.0, 800.0),
            Rect::new(0.0, 0.0, 200.0, 100.0),
        );
        geo.safe_area = EdgeInsets::new(44.0, 8.0, 20.0, 8.0);
        geo.screen = Size::new(400.0, 900.0);

        let offset = displayed_offset(&layout_for(&params), &geo);
        assert_eq!(offset.y, (900.0 - 100.0) / 2.0 - 44.0);
        assert_eq!(offset.x, (400.0 - 200.0) / 2.0 - 8.0);
    }

    #[test]
    fn keyboard_lifts_bottom_popup() {
        let params = PopupParameters::new()
            .position(Position::Bottom)
            .use_keyboard_safe_area(true);
        let mut geo = geometry(
            Rect::new(0.0, 0.0, 400.0, 800.0),
            Rect::new(0.0, 0.0, 400.0, 100.0),
        );
        geo.keyboard_height = 250.0;

        let lifted = displayed_offset(&layout_for(&params), &geo);
        assert_eq!(lifted.y, 800.0 - 100.0 - 250.0);

        // keyboard ignored when the flag is off
        let ignoring = PopupParameters::new().position(Position::Bottom);
        let still = displayed_offset(&layout_for(&ignoring), &geo);
        assert_eq!(still.y, 700.0);
    }

    #[test]
    fn hidden_offset_is_sentinel_before_measurement() {
        let params = PopupParameters::new().position(Position::Bottom);
        let geo = geometry(Rect::new(0.0, 0.0, 400.0, 800.0), Rect::ZERO);
        assert_eq!(hidden_offset(&layout_for(&params), &geo), Point::FAR_OFFSCREEN);
    }

    #[test]
    fn hidden_offset_keeps_cross_axis_coordinate() {
        let params = PopupParameters::new()
            .position(Position::Trailing)
            .appear_from(AppearFrom::Right);
        let geo = geometry(
            Rect::new(0.0, 0.0, 400.0, 800.0),
            Rect::new(0.0, 0.0, 200.0, 100.0),
        );
        let layout = layout_for(&params);
        let displayed = displayed_offset(&layout, &geo);
        let hidden = hidden_offset(&layout, &geo);
        assert_eq!(hidden.x, 400.0);
        assert_eq!(hidden.y, displayed.y);
    }

    /// For every anchor and both opaque modes, hiding along the derived
    /// appear edge must place the content fully outside the bounds on
    /// that axis.
    #[test]
    fn hidden_never_overlaps_visible_area() {
        let container = Rect::new(0.0, 0.0, 400.0, 800.0);
        let content = Rect::new(0.0, 0.0, 120.0, 90.0);

        for position in Position::ALL {
            for opaque in [false, true] {
                let params = PopupParameters::new()
                    .position(position)
                    .is_opaque(opaque);
                let layout = layout_for(&params);
                let geo = geometry(container, content);
                let hidden = hidden_offset(&layout, &geo);
                let screen = geo.screen_size();

                match layout.appear_from {
                    AppearFrom::Top => assert!(
                        hidden.y + content.height() <= 0.0,
                        "{position:?} opaque={opaque} y={}",
                        hidden.y
                    ),
                    AppearFrom::Bottom => assert!(
                        hidden.y >= screen.height,
                        "{position:?} opaque={opaque} y={}",
                        hidden.y
                    ),
                    AppearFrom::Left => assert!(
                        hidden.x + content.width() <= 0.0,
                        "{position:?} opaque={opaque} x={}",
                        hidden.x
                    ),
                    AppearFrom::Right => assert!(
                        hidden.x >= screen.width,
                        "{position:?} opaque={opaque} x={}",
                        hidden.x
                    ),
                }
            }
        }
    }

    /// Same geometry in, same displayed offset out: hiding and re-showing
    /// cannot drift.
    #[test]
    fn displayed_offset_is_pure() {
        let params = PopupParameters::new()
            .kind(PopupType::floater())
            .position(Position::BottomTrailing);
        let mut geo = geometry(
            Rect::new(0.0, 0.0, 400.0, 800.0),
            Rect::new(0.0, 0.0, 150.0, 60.0),
        );
        geo.safe_area = EdgeInsets::new(44.0, 0.0, 34.0, 0.0);

        let layout = layout_for(&params);
        let first = displayed_offset(&layout, &geo);
        let again = displayed_offset(&layout, &geo);
        assert_eq!(first, again);
    }
}
