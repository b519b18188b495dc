//! Per-position verdicts for a scored guess
//!
//! Each position of a guess is classified as one of three verdicts. The numeric
//! codes are part of the stored session format:
//! - 0 = Exact (letter in the correct position)
//! - 1 = Present (letter in the answer, wrong position)
//! - 2 = Absent (letter not matchable given the remaining quota)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Verdict {
    Exact,
    Present,
    Absent,
}

/// One verdict per answer position, in position order
pub type VerdictVector = Vec<Verdict>;

impl Verdict {
    /// Numeric code used in the stored session record
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Exact => 0,
            Self::Present => 1,
            Self::Absent => 2,
        }
    }

    /// Inverse of [`Verdict::code`]
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Exact),
            1 => Some(Self::Present),
            2 => Some(Self::Absent),
            _ => None,
        }
    }

    /// Square glyph shown in the result grid
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Exact => "🟩",
            Self::Present => "🟨",
            Self::Absent => "⬛",
        }
    }
}

impl From<Verdict> for u8 {
    fn from(verdict: Verdict) -> Self {
        verdict.code()
    }
}

impl TryFrom<u8> for Verdict {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| format!("Invalid verdict code: {code}"))
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_stored_convention() {
        assert_eq!(Verdict::Exact.code(), 0);
        assert_eq!(Verdict::Present.code(), 1);
        assert_eq!(Verdict::Absent.code(), 2);
    }

    #[test]
    fn from_code_rejects_unknown() {
        assert_eq!(Verdict::from_code(1), Some(Verdict::Present));
        assert_eq!(Verdict::from_code(3), None);
        assert!(Verdict::try_from(255).is_err());
    }

    #[test]
    fn glyphs() {
        assert_eq!(Verdict::Exact.glyph(), "🟩");
        assert_eq!(Verdict::Present.glyph(), "🟨");
        assert_eq!(Verdict::Absent.glyph(), "⬛");
        assert_eq!(Verdict::Absent.to_string(), "⬛");
    }

    #[test]
    fn serializes_as_integer() {
        let json = serde_json::to_string(&vec![Verdict::Absent, Verdict::Exact]).unwrap();
        assert_eq!(json, "[2,0]");

        let back: Vec<Verdict> = serde_json::from_str("[1,1,0]").unwrap();
        assert_eq!(back, vec![Verdict::Present, Verdict::Present, Verdict::Exact]);

        assert!(serde_json::from_str::<Verdict>("7").is_err());
    }
}
