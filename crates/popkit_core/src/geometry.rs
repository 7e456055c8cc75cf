//! Geometry value types and the measured-geometry cache
//!
//! The engine never measures anything itself. Container and content
//! rectangles, safe-area insets, the keyboard height, and the screen size
//! are fed in by the host's layout passes and cached in
//! [`MeasuredGeometry`] for the offset resolver to read.

/// A 2D point in logical pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Sentinel placement used while the content is still unmeasured.
    ///
    /// Far enough outside any plausible screen that the initial placement
    /// is never visible, which suppresses a pop-in on first layout.
    pub const FAR_OFFSCREEN: Point = Point {
        x: 10_000.0,
        y: 10_000.0,
    };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A 2D size in logical pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True if either dimension is zero or negative
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// An axis-aligned rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn min_y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// True if the rect has no area (not yet laid out)
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }
}

/// Platform-reserved insets (notches, home indicators, title bars)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub top: f32,
    pub leading: f32,
    pub bottom: f32,
    pub trailing: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        top: 0.0,
        leading: 0.0,
        bottom: 0.0,
        trailing: 0.0,
    };

    pub const fn new(top: f32, leading: f32, bottom: f32, trailing: f32) -> Self {
        Self {
            top,
            leading,
            bottom,
            trailing,
        }
    }
}

/// Externally measured rectangles the offset resolver reads
///
/// Written by host layout callbacks, read by the resolver. All fields may
/// legitimately be zero before the first layout pass; callers check
/// [`is_ready`](Self::is_ready) before trusting a displayed offset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeasuredGeometry {
    /// Frame of the hosting container
    pub container: Rect,
    /// Frame of the popup content
    pub content: Rect,
    /// Safe-area insets of the hosting container
    pub safe_area: EdgeInsets,
    /// Current keyboard height (0 when hidden)
    pub keyboard_height: f32,
    /// Full screen size, used in opaque mode
    pub screen: Size,
}

impl MeasuredGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Both container and content have been measured
    pub fn is_ready(&self) -> bool {
        !self.container.is_empty() && !self.content.is_empty()
    }

    /// Screen size, falling back to the container when the host never
    /// reported one (windowed platforms without a meaningful screen rect)
    pub fn screen_size(&self) -> Size {
        if self.screen.is_empty() {
            self.container.size
        } else {
            self.screen
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rects_are_not_ready() {
        let mut geo = MeasuredGeometry::new();
        assert!(!geo.is_ready());

        geo.container = Rect::new(0.0, 0.0, 400.0, 800.0);
        assert!(!geo.is_ready());

        geo.content = Rect::new(0.0, 0.0, 400.0, 100.0);
        assert!(geo.is_ready());
    }

    #[test]
    fn screen_falls_back_to_container() {
        let mut geo = MeasuredGeometry::new();
        geo.container = Rect::new(0.0, 0.0, 400.0, 800.0);
        assert_eq!(geo.screen_size(), Size::new(400.0, 800.0));

        geo.screen = Size::new(390.0, 844.0);
        assert_eq!(geo.screen_size(), Size::new(390.0, 844.0));
    }
}
