//! Card ranks: numeric pips and face cards.

use core::fmt;
use core::ops::RangeInclusive;

use crate::error::RankError;

/// A numeric rank, two through ten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum NumericRank {
    /// 2.
    Two = 2,
    /// 3.
    Three = 3,
    /// 4.
    Four = 4,
    /// 5.
    Five = 5,
    /// 6.
    Six = 6,
    /// 7.
    Seven = 7,
    /// 8.
    Eight = 8,
    /// 9.
    Nine = 9,
    /// 10.
    Ten = 10,
}

impl NumericRank {
    /// Returns the numeric rank for `value`, or `None` outside `2..=10`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        Some(match value {
            2 => Self::Two,
            3 => Self::Three,
            4 => Self::Four,
            5 => Self::Five,
            6 => Self::Six,
            7 => Self::Seven,
            8 => Self::Eight,
            9 => Self::Nine,
            10 => Self::Ten,
            _ => return None,
        })
    }

    /// Returns the pip value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

/// A face rank. The ace counts as a face card with value 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FaceRank {
    /// Jack (11).
    Jack = 11,
    /// Queen (12).
    Queen = 12,
    /// King (13).
    King = 13,
    /// Ace (1).
    Ace = 1,
}

impl FaceRank {
    /// Returns the face rank for `value`, or `None` unless it is 1, 11, 12 or 13.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        match value {
            11 => Some(Self::Jack),
            12 => Some(Self::Queen),
            13 => Some(Self::King),
            1 => Some(Self::Ace),
            _ => None,
        }
    }

    /// Returns the underlying value (Jack = 11, Queen = 12, King = 13, Ace = 1).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the name of the face, e.g. `"Jack"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        }
    }
}

impl fmt::Display for FaceRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The rank of a playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Two through ten.
    Numeric(NumericRank),
    /// Jack, Queen, King or Ace.
    Face(FaceRank),
}

impl Rank {
    /// Raw values accepted by [`Rank::new`], in deck order.
    pub const ALL_RAW: RangeInclusive<u8> = 1..=13;

    /// Builds a rank from its raw value.
    ///
    /// Face ranks are tried first, so 1 resolves to [`FaceRank::Ace`] rather
    /// than a numeric rank.
    ///
    /// # Errors
    ///
    /// Returns [`RankError::InvalidRank`] if `raw` is outside `1..=13`.
    pub const fn new(raw: u8) -> Result<Self, RankError> {
        if let Some(face) = FaceRank::new(raw) {
            Ok(Self::Face(face))
        } else if let Some(numeric) = NumericRank::new(raw) {
            Ok(Self::Numeric(numeric))
        } else {
            Err(RankError::InvalidRank(raw))
        }
    }

    /// Returns the canonical value: the pip count for numeric ranks, the
    /// underlying value for faces (Ace = 1).
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Numeric(numeric) => numeric.value(),
            Self::Face(face) => face.value(),
        }
    }

    /// Returns whether this is a face rank (including the ace).
    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Self::Face(_))
    }

    /// Returns whether this is a numeric rank.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Numeric(_))
    }
}

impl TryFrom<u8> for Rank {
    type Error = RankError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<NumericRank> for Rank {
    fn from(numeric: NumericRank) -> Self {
        Self::Numeric(numeric)
    }
}

impl From<FaceRank> for Rank {
    fn from(face: FaceRank) -> Self {
        Self::Face(face)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(numeric) => write!(f, "{}", numeric.value()),
            Self::Face(face) => fmt::Display::fmt(face, f),
        }
    }
}
