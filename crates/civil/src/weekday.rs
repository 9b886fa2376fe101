//! Day-of-week enum.

/// Day of the week, numbered the civil-calendar way: Sunday = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    /// Creates a `Weekday` from a 0-based index (0 = Sunday, 6 = Saturday).
    ///
    /// Callers pass an already-reduced value; anything above 6 maps to
    /// its residue mod 7.
    pub(crate) fn from_index(index: u8) -> Self {
        match index % 7 {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            _ => Self::Saturday,
        }
    }

    /// Returns the 0-based index (0 = Sunday, 6 = Saturday).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Returns `true` for Sunday.
    pub fn is_sunday(self) -> bool {
        self == Self::Sunday
    }

    /// Returns `true` for Saturday.
    pub fn is_saturday(self) -> bool {
        self == Self::Saturday
    }

    /// Returns the single-kanji Japanese label (日, 月, ..., 土).
    pub fn kanji(self) -> &'static str {
        match self {
            Self::Sunday => "日",
            Self::Monday => "月",
            Self::Tuesday => "火",
            Self::Wednesday => "水",
            Self::Thursday => "木",
            Self::Friday => "金",
            Self::Saturday => "土",
        }
    }
}
