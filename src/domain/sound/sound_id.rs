//! Sound identifier value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidSoundError;

/// All sounds that ship a media asset
pub const ALL_SOUNDS: &[SoundId] = &[SoundId::BreakpointHit];

/// Extension of every media asset
pub const ASSET_EXTENSION: &str = "webm";

/// Identifiers of notification sounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundId {
    /// Played when a debugger breakpoint is hit
    BreakpointHit,
}

impl SoundId {
    /// Get the string identifier for this sound
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BreakpointHit => "breakpointHit",
        }
    }

    /// File name of the media asset, e.g. `breakpointHit.webm`
    pub fn asset_file_name(&self) -> String {
        format!("{}.{}", self.as_str(), ASSET_EXTENSION)
    }
}

impl FromStr for SoundId {
    type Err = InvalidSoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakpointhit" | "breakpoint-hit" | "breakpoint_hit" => Ok(Self::BreakpointHit),
            _ => Err(InvalidSoundError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
