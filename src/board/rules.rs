//! Rule configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Scope of the mandatory capture rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ForcedCapture {
    /// Only the selected piece is checked: if it can capture, it must.
    /// Other pieces may still make quiet moves while it has a capture.
    #[default]
    PerPiece,
    /// Standard checkers: while any piece of the mover can capture, only
    /// captures are legal.
    SideWide,
}

/// Rule switches consulted by move validation and generation.
///
/// Captures are always single jumps; a turn ends after one jump even if the
/// landing square offers another.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Rules {
    pub forced_capture: ForcedCapture,
}

impl Rules {
    /// Rules with the side-wide forced capture policy
    #[must_use]
    pub const fn side_wide() -> Self {
        Rules {
            forced_capture: ForcedCapture::SideWide,
        }
    }
}
