//! CLI surface: argument types and the batch run loop.

pub mod run;

use clap::ValueEnum;
use datemark_core::Anchor;

/// Watermark position choices exposed on the command line.
///
/// Invalid values are rejected by clap before any file is touched, unlike
/// the library's lenient `Anchor::from_name`, which quietly falls back to
/// bottom-right for programmatic callers.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    TopLeft,
    TopCenter,
    TopRight,
    Center,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl From<Position> for Anchor {
    fn from(position: Position) -> Anchor {
        match position {
            Position::TopLeft => Anchor::TopLeft,
            Position::TopCenter => Anchor::TopCenter,
            Position::TopRight => Anchor::TopRight,
            Position::Center => Anchor::Center,
            Position::BottomLeft => Anchor::BottomLeft,
            Position::BottomCenter => Anchor::BottomCenter,
            Position::BottomRight => Anchor::BottomRight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_maps_to_anchor() {
        assert_eq!(Anchor::from(Position::TopLeft), Anchor::TopLeft);
        assert_eq!(Anchor::from(Position::Center), Anchor::Center);
        assert_eq!(Anchor::from(Position::BottomRight), Anchor::BottomRight);
    }

    #[test]
    fn test_position_value_names_are_kebab_case() {
        let value = Position::BottomRight.to_possible_value().unwrap();
        assert_eq!(value.get_name(), "bottom-right");
        let value = Position::TopCenter.to_possible_value().unwrap();
        assert_eq!(value.get_name(), "top-center");
    }
}
