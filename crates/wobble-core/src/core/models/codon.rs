use super::nucleotide::Nucleotide;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodonError {
    #[error("Unknown codon '{0}': expected three of T, C, A, G")]
    UnknownCodon(String),
}

/// A concrete nucleotide triplet.
///
/// Codons are plain values: three bases, `Copy`, ordered by their position in
/// the `TCAG` table layout (first base outermost, third base innermost).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Codon([Nucleotide; 3]);

impl Codon {
    pub const COUNT: usize = 64;

    pub fn new(first: Nucleotide, second: Nucleotide, third: Nucleotide) -> Self {
        Self([first, second, third])
    }

    pub fn nucleotides(&self) -> [Nucleotide; 3] {
        self.0
    }

    #[inline]
    pub fn position(&self, position: usize) -> Nucleotide {
        self.0[position]
    }

    /// Dense index in `0..64` following the `TCAG` table layout.
    #[inline]
    pub fn index(&self) -> usize {
        self.0[0].index() * 16 + self.0[1].index() * 4 + self.0[2].index()
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= Self::COUNT {
            return None;
        }
        Some(Self([
            Nucleotide::from_index(index / 16)?,
            Nucleotide::from_index((index / 4) % 4)?,
            Nucleotide::from_index(index % 4)?,
        ]))
    }

    /// All 64 codons in table order.
    pub fn all() -> impl Iterator<Item = Codon> {
        (0..Self::COUNT).filter_map(Self::from_index)
    }
}

impl FromStr for Codon {
    type Err = CodonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || CodonError::UnknownCodon(s.to_string());
        let mut chars = s.chars();
        let mut bases = [Nucleotide::T; 3];
        for base in bases.iter_mut() {
            *base = chars
                .next()
                .and_then(Nucleotide::from_char)
                .ok_or_else(unknown)?;
        }
        if chars.next().is_some() {
            return Err(unknown());
        }
        Ok(Self(bases))
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for nucleotide in self.0 {
            write!(f, "{}", nucleotide)?;
        }
        Ok(())
    }
}
