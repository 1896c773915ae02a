use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AminoAcidError {
    #[error("Invalid amino acid symbol '{0}': expected a letter or '*'")]
    InvalidSymbol(char),
}

const STOP_SLOT: u8 = 26;

/// A one-letter amino acid symbol, or the stop marker `*`.
///
/// Any letter is a well-formed symbol; whether a genetic-code table can
/// actually produce it is a separate question answered by the
/// [`DegeneracyIndex`](crate::core::tables::degeneracy::DegeneracyIndex).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AminoAcid(u8);

impl AminoAcid {
    pub const STOP: AminoAcid = AminoAcid(STOP_SLOT);

    /// Lowercase letters are normalized to uppercase.
    pub fn from_char(c: char) -> Result<Self, AminoAcidError> {
        match c {
            '*' => Ok(Self::STOP),
            'A'..='Z' | 'a'..='z' => Ok(Self(c.to_ascii_uppercase() as u8 - b'A')),
            _ => Err(AminoAcidError::InvalidSymbol(c)),
        }
    }

    /// Parses every non-whitespace character of `symbols`, e.g. `"KT"` or `"K T"`.
    pub fn parse_list(symbols: &str) -> Result<Vec<Self>, AminoAcidError> {
        symbols
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Self::from_char)
            .collect()
    }

    pub fn to_char(self) -> char {
        if self.is_stop() {
            '*'
        } else {
            (b'A' + self.0) as char
        }
    }

    pub fn is_stop(self) -> bool {
        self.0 == STOP_SLOT
    }

    #[inline]
    fn bit(self) -> u32 {
        1 << self.0
    }
}

impl TryFrom<char> for AminoAcid {
    type Error = AminoAcidError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c)
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A set of amino acid symbols.
///
/// Iteration order is alphabetical with the stop marker last, so printed sets
/// are reproducible regardless of insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AminoAcidSet(u32);

impl AminoAcidSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, amino_acid: AminoAcid) -> bool {
        let was_present = self.contains(amino_acid);
        self.0 |= amino_acid.bit();
        !was_present
    }

    pub fn contains(&self, amino_acid: AminoAcid) -> bool {
        self.0 & amino_acid.bit() != 0
    }

    pub fn union(&self, other: &Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn difference(&self, other: &Self) -> Self {
        Self(self.0 & !other.0)
    }

    pub fn is_subset(&self, other: &Self) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = AminoAcid> + '_ {
        (0..=STOP_SLOT)
            .map(AminoAcid)
            .filter(move |aa| self.contains(*aa))
    }
}

impl FromIterator<AminoAcid> for AminoAcidSet {
    fn from_iter<I: IntoIterator<Item = AminoAcid>>(iter: I) -> Self {
        let mut set = Self::new();
        for amino_acid in iter {
            set.insert(amino_acid);
        }
        set
    }
}

impl<'a> FromIterator<&'a AminoAcid> for AminoAcidSet {
    fn from_iter<I: IntoIterator<Item = &'a AminoAcid>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl fmt::Display for AminoAcidSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, amino_acid) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", amino_acid)?;
        }
        write!(f, "}}")
    }
}
