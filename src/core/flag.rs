//! Per-letter verdicts

use std::fmt;

/// Verdict for one letter of a guess
///
/// Ordered by display priority: `Correct > Present > Absent`. The ordering is
/// only used for presentation and for the best-ever key policy; evaluation
/// never relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterFlag {
    /// Letter does not occur in the target (or all occurrences are claimed)
    Absent,
    /// Letter occurs in the target at a different position
    Present,
    /// Letter is at the right position
    Correct,
}

impl LetterFlag {
    /// Single-character code used by the line-based modes (`G`, `Y`, `-`)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a flag from its code or emoji
    #[must_use]
    pub const fn from_code(c: char) -> Option<Self> {
        match c {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

impl fmt::Display for LetterFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        };
        f.write_str(name)
    }
}
