use std::fmt;
use std::str::FromStr;

pub struct Config {
    /// Skips the banner printed before every command.
    pub no_banner: bool,
    /// Each level removes a layer of terminal output.
    pub quiet: u8,
    /// Never prompt; missing values fall back to their defaults.
    pub disable_input: bool,
    pub cursor_mask: CursorMask,
}

/// How the allocation cursor picks its working mask after a block is placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CursorMask {
    /// Reuse the size of the request that was just allocated.
    #[default]
    Consumed,
    /// Derive the mask from the parent prefix and the next request's size.
    Upcoming,
}

impl FromStr for CursorMask {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "consumed" => Ok(CursorMask::Consumed),
            "upcoming" => Ok(CursorMask::Upcoming),
            _ => Err(format!("invalid cursor mask '{s}', expected 'consumed' or 'upcoming'")),
        }
    }
}

impl fmt::Display for CursorMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CursorMask::Consumed => f.write_str("consumed"),
            CursorMask::Upcoming => f.write_str("upcoming"),
        }
    }
}
