use core::fmt;

const MODE_NAME_ONE: &str = "mode_one";
const MODE_NAME_TWO: &str = "mode_two";

const MODE_ID_ONE: u8 = 1;
const MODE_ID_TWO: u8 = 2;

/// Display preset selected with the secondary button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mode {
    #[default]
    One = MODE_ID_ONE,
    Two = MODE_ID_TWO,
}

impl Mode {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_ONE => Self::One,
            MODE_ID_TWO => Self::Two,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::One => MODE_NAME_ONE,
            Self::Two => MODE_NAME_TWO,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_ONE => Some(Self::One),
            MODE_NAME_TWO => Some(Self::Two),
            _ => None,
        }
    }

    /// The other mode
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Number of confirmation blinks played after switching to this mode
    pub const fn confirm_blinks(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
