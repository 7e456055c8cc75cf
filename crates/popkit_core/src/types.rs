//! Core popup enums: kind, anchor position, appear edge, dismiss source

use std::hash::{Hash, Hasher};

use crate::geometry::Point;

/// Categorizes popup behavior and default placement
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PopupType {
    /// Centered popup, no padding, no safe-area handling
    Default,
    /// Bottom-anchored notification strip
    Toast,
    /// Bottom-anchored card floating over the content with padding
    Floater {
        vertical_padding: f32,
        horizontal_padding: f32,
        use_safe_area_inset: bool,
    },
}

impl Default for PopupType {
    fn default() -> Self {
        Self::Default
    }
}

impl PopupType {
    /// A floater with the standard 10pt paddings and safe-area respect
    pub fn floater() -> Self {
        Self::Floater {
            vertical_padding: 10.0,
            horizontal_padding: 10.0,
            use_safe_area_inset: true,
        }
    }

    /// Anchor used when the parameters carry no explicit position
    pub fn default_position(&self) -> Position {
        match self {
            PopupType::Default => Position::Center,
            PopupType::Toast | PopupType::Floater { .. } => Position::Bottom,
        }
    }

    pub fn vertical_padding(&self) -> f32 {
        match self {
            PopupType::Floater {
                vertical_padding, ..
            } => *vertical_padding,
            _ => 0.0,
        }
    }

    pub fn horizontal_padding(&self) -> f32 {
        match self {
            PopupType::Floater {
                horizontal_padding, ..
            } => *horizontal_padding,
            _ => 0.0,
        }
    }

    pub fn use_safe_area_inset(&self) -> bool {
        match self {
            PopupType::Floater {
                use_safe_area_inset,
                ..
            } => *use_safe_area_inset,
            _ => false,
        }
    }
}

impl Hash for PopupType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        if let PopupType::Floater {
            vertical_padding,
            horizontal_padding,
            use_safe_area_inset,
        } = self
        {
            state.write_u32(vertical_padding.to_bits());
            state.write_u32(horizontal_padding.to_bits());
            use_safe_area_inset.hash(state);
        }
    }
}

/// Screen-relative anchor: the 3x3 grid of vertical x horizontal placement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    TopLeading,
    Top,
    TopTrailing,
    Leading,
    Center,
    Trailing,
    BottomLeading,
    Bottom,
    BottomTrailing,
}

impl Position {
    /// All nine anchors, top-left to bottom-right
    pub const ALL: [Position; 9] = [
        Position::TopLeading,
        Position::Top,
        Position::TopTrailing,
        Position::Leading,
        Position::Center,
        Position::Trailing,
        Position::BottomLeading,
        Position::Bottom,
        Position::BottomTrailing,
    ];

    pub fn is_top(&self) -> bool {
        matches!(
            self,
            Position::TopLeading | Position::Top | Position::TopTrailing
        )
    }

    pub fn is_vertical_center(&self) -> bool {
        matches!(
            self,
            Position::Leading | Position::Center | Position::Trailing
        )
    }

    pub fn is_bottom(&self) -> bool {
        matches!(
            self,
            Position::BottomLeading | Position::Bottom | Position::BottomTrailing
        )
    }

    pub fn is_leading(&self) -> bool {
        matches!(
            self,
            Position::TopLeading | Position::Leading | Position::BottomLeading
        )
    }

    pub fn is_horizontal_center(&self) -> bool {
        matches!(self, Position::Top | Position::Center | Position::Bottom)
    }

    pub fn is_trailing(&self) -> bool {
        matches!(
            self,
            Position::TopTrailing | Position::Trailing | Position::BottomTrailing
        )
    }
}

/// Screen edge the content slides in from and out to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppearFrom {
    Top,
    Bottom,
    Left,
    Right,
}

impl AppearFrom {
    /// The direction sign of a dismissing drag along this edge's axis
    /// (positive moves the content further off its resting edge)
    pub fn dismiss_sign(&self) -> f32 {
        match self {
            AppearFrom::Top | AppearFrom::Left => -1.0,
            AppearFrom::Bottom | AppearFrom::Right => 1.0,
        }
    }

    /// Extract the component of a translation along this edge's axis
    pub fn axis_component(&self, delta: Point) -> f32 {
        match self {
            AppearFrom::Top | AppearFrom::Bottom => delta.y,
            AppearFrom::Left | AppearFrom::Right => delta.x,
        }
    }
}

/// What caused a dismissal, forwarded to host callbacks
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DismissSource {
    /// Host set the presentation intent to false / the bound item to none
    ExplicitStateChange,
    /// Tap on the popup content (close_on_tap)
    TapInside,
    /// Tap on the background area (close_on_tap_outside)
    TapOutside,
    /// Drag past the dismiss threshold
    Drag,
    /// Autohide timer fired
    Autohide,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_positions_per_kind() {
        assert_eq!(PopupType::Default.default_position(), Position::Center);
        assert_eq!(PopupType::Toast.default_position(), Position::Bottom);
        assert_eq!(PopupType::floater().default_position(), Position::Bottom);
    }

    #[test]
    fn floater_carries_paddings() {
        let floater = PopupType::floater();
        assert_eq!(floater.vertical_padding(), 10.0);
        assert_eq!(floater.horizontal_padding(), 10.0);
        assert!(floater.use_safe_area_inset());

        assert_eq!(PopupType::Toast.vertical_padding(), 0.0);
        assert!(!PopupType::Default.use_safe_area_inset());
    }

    #[test]
    fn each_axis_predicate_matches_exactly_three() {
        let count = |f: fn(&Position) -> bool| Position::ALL.iter().filter(|p| f(p)).count();
        assert_eq!(count(Position::is_top), 3);
        assert_eq!(count(Position::is_vertical_center), 3);
        assert_eq!(count(Position::is_bottom), 3);
        assert_eq!(count(Position::is_leading), 3);
        assert_eq!(count(Position::is_horizontal_center), 3);
        assert_eq!(count(Position::is_trailing), 3);
    }

    #[test]
    fn every_position_is_on_exactly_one_row_and_column() {
        for p in Position::ALL {
            let rows =
                [p.is_top(), p.is_vertical_center(), p.is_bottom()]
                    .iter()
                    .filter(|b| **b)
                    .count();
            let cols = [p.is_leading(), p.is_horizontal_center(), p.is_trailing()]
                .iter()
                .filter(|b| **b)
                .count();
            assert_eq!(rows, 1, "{p:?}");
            assert_eq!(cols, 1, "{p:?}");
        }
    }
}
