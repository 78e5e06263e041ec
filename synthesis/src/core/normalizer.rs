//! Material code normalization
//!
//! Upstream agents and locality programs spell resin codes in many ways
//! (`"1"`, `"#1"`, `"PET 1"`, `"pet#1"`). Everything is collapsed into the
//! single canonical form `<ABBREV> #<DIGITS>` before any comparison.
//!
//! Normalization is total: input that cannot be parsed is returned in its
//! cleaned form, which never matches a canonical resin code.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The seven canonical plastic resin identification codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResinCode {
    Pet,
    Hdpe,
    Pvc,
    Ldpe,
    Pp,
    Ps,
    Other,
}

impl ResinCode {
    /// Every canonical code, ordered by resin number
    pub const ALL: [ResinCode; 7] = [
        ResinCode::Pet,
        ResinCode::Hdpe,
        ResinCode::Pvc,
        ResinCode::Ldpe,
        ResinCode::Pp,
        ResinCode::Ps,
        ResinCode::Other,
    ];

    pub fn number(self) -> u8 {
        match self {
            ResinCode::Pet => 1,
            ResinCode::Hdpe => 2,
            ResinCode::Pvc => 3,
            ResinCode::Ldpe => 4,
            ResinCode::Pp => 5,
            ResinCode::Ps => 6,
            ResinCode::Other => 7,
        }
    }

    /// Bare-digit spelling used by the lookup table
    fn digit(self) -> &'static str {
        match self {
            ResinCode::Pet => "1",
            ResinCode::Hdpe => "2",
            ResinCode::Pvc => "3",
            ResinCode::Ldpe => "4",
            ResinCode::Pp => "5",
            ResinCode::Ps => "6",
            ResinCode::Other => "7",
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            ResinCode::Pet => "PET",
            ResinCode::Hdpe => "HDPE",
            ResinCode::Pvc => "PVC",
            ResinCode::Ldpe => "LDPE",
            ResinCode::Pp => "PP",
            ResinCode::Ps => "PS",
            ResinCode::Other => "OTHER",
        }
    }

    /// Canonical spelling, e.g. `"PET #1"`
    pub fn canonical(self) -> &'static str {
        match self {
            ResinCode::Pet => "PET #1",
            ResinCode::Hdpe => "HDPE #2",
            ResinCode::Pvc => "PVC #3",
            ResinCode::Ldpe => "LDPE #4",
            ResinCode::Pp => "PP #5",
            ResinCode::Ps => "PS #6",
            ResinCode::Other => "OTHER #7",
        }
    }

    pub fn from_canonical(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|resin| resin.canonical() == code)
    }

    /// Resins commonly flattened or crushed in curbside streams
    pub fn is_compactable(self) -> bool {
        matches!(self, ResinCode::Pet | ResinCode::Hdpe | ResinCode::Pp)
    }

    /// Exact match against `"N"` or `"#N"`
    fn from_bare(code: &str) -> Option<Self> {
        let digits = code.strip_prefix('#').unwrap_or(code);
        Self::ALL.into_iter().find(|resin| resin.digit() == digits)
    }
}

impl fmt::Display for ResinCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}

/// A normalized material identifier
///
/// Either one of the canonical resin codes or the cleaned passthrough of
/// input that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialCode(String);

impl MaterialCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The canonical resin this code names, if any
    pub fn resin(&self) -> Option<ResinCode> {
        ResinCode::from_canonical(&self.0)
    }

    pub fn is_canonical(&self) -> bool {
        self.resin().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<ResinCode> for MaterialCode {
    fn from(resin: ResinCode) -> Self {
        MaterialCode(resin.canonical().to_string())
    }
}

impl fmt::Display for MaterialCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonicalize a free-form material identifier
///
/// 1. Trim and uppercase.
/// 2. `"N"` / `"#N"` for N in 1..=7 map straight to the canonical code.
/// 3. Otherwise drop whitespace and `#`, then collect all letters followed by
///    all ASCII digits, regardless of how they were interleaved.
/// 4. Both runs present gives `"<LETTERS> #<DIGITS>"`; anything else returns
///    the cleaned string unchanged.
///
/// The cleaned string is checked against the bare-digit table too, so `"# 1"`
/// lands on `PET #1` and `normalize(normalize(x)) == normalize(x)` holds for
/// every input.
pub fn normalize(raw: &str) -> MaterialCode {
    let upper = raw.trim().to_uppercase();
    if let Some(resin) = ResinCode::from_bare(&upper) {
        return resin.into();
    }

    let cleaned: String = upper
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '#')
        .collect();
    if let Some(resin) = ResinCode::from_bare(&cleaned) {
        return resin.into();
    }

    let letters: String = cleaned.chars().filter(|c| c.is_alphabetic()).collect();
    let digits: String = cleaned.chars().filter(|c| c.is_ascii_digit()).collect();

    if !letters.is_empty() && !digits.is_empty() {
        MaterialCode(format!("{letters} #{digits}"))
    } else {
        MaterialCode(cleaned)
    }
}
