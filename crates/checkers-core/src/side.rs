//! Player side representation.

use serde::{Deserialize, Serialize};

/// The two sides in checkers. Dark moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Side {
    Dark = 0,
    Light = 1,
}

impl Side {
    /// Both sides in turn order.
    pub const ALL: [Side; 2] = [Side::Dark, Side::Light];

    /// Returns the opposite side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Dark => Side::Light,
            Side::Light => Side::Dark,
        }
    }

    /// Returns the index (0 for Dark, 1 for Light).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the row direction men of this side travel (+1 for Dark, -1 for Light).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::Dark => 1,
            Side::Light => -1,
        }
    }

    /// Returns the row on which men of this side are crowned (7 for Dark, 0 for Light).
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Side::Dark => 7,
            Side::Light => 0,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Dark => write!(f, "Dark"),
            Side::Light => write!(f, "Light"),
        }
    }
}
