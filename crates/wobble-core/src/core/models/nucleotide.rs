use std::fmt;

/// A single DNA base.
///
/// Variants are declared in `T, C, A, G` order, which is the order genetic-code
/// tables are conventionally laid out in. The discriminant doubles as the base's
/// index within that order and as its bit position inside a [`NucleotideSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Nucleotide {
    T = 0,
    C = 1,
    A = 2,
    G = 3,
}

impl Nucleotide {
    /// All bases in table order.
    pub const ALL: [Nucleotide; 4] = [Nucleotide::T, Nucleotide::C, Nucleotide::A, Nucleotide::G];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Strict conversion: only the uppercase letters `T`, `C`, `A` and `G` are accepted.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'T' => Some(Nucleotide::T),
            'C' => Some(Nucleotide::C),
            'A' => Some(Nucleotide::A),
            'G' => Some(Nucleotide::G),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Nucleotide::T => 'T',
            Nucleotide::C => 'C',
            Nucleotide::A => 'A',
            Nucleotide::G => 'G',
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A set of bases observed at one codon position.
///
/// Stored as a 4-bit mask so that union is a single `|` and the whole
/// [`DegenerateCodonPattern`](super::pattern::DegenerateCodonPattern) stays `Copy` and cheap to hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NucleotideSet(u8);

impl NucleotideSet {
    pub const EMPTY: NucleotideSet = NucleotideSet(0);
    pub const ANY: NucleotideSet = NucleotideSet(0b1111);

    pub fn new() -> Self {
        Self::EMPTY
    }

    pub fn singleton(nucleotide: Nucleotide) -> Self {
        Self(nucleotide.bit())
    }

    pub fn insert(&mut self, nucleotide: Nucleotide) {
        self.0 |= nucleotide.bit();
    }

    pub fn contains(&self, nucleotide: Nucleotide) -> bool {
        self.0 & nucleotide.bit() != 0
    }

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
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

    /// Members in table order (`T`, `C`, `A`, `G`).
    pub fn iter(&self) -> impl Iterator<Item = Nucleotide> + Clone + '_ {
        Nucleotide::ALL.into_iter().filter(move |n| self.contains(*n))
    }

    /// The IUPAC ambiguity letter for this set, or `None` for the empty set.
    pub fn iupac_code(&self) -> Option<char> {
        use Nucleotide::*;
        let has = |n| self.contains(n);
        let code = match (has(A), has(C), has(G), has(T)) {
            (false, false, false, false) => return None,
            (true, false, false, false) => 'A',
            (false, true, false, false) => 'C',
            (false, false, true, false) => 'G',
            (false, false, false, true) => 'T',
            (true, false, true, false) => 'R',
            (false, true, false, true) => 'Y',
            (false, true, true, false) => 'S',
            (true, false, false, true) => 'W',
            (false, false, true, true) => 'K',
            (true, true, false, false) => 'M',
            (false, true, true, true) => 'B',
            (true, false, true, true) => 'D',
            (true, true, false, true) => 'H',
            (true, true, true, false) => 'V',
            (true, true, true, true) => 'N',
        };
        Some(code)
    }
}

impl FromIterator<Nucleotide> for NucleotideSet {
    fn from_iter<I: IntoIterator<Item = Nucleotide>>(iter: I) -> Self {
        let mut set = Self::new();
        for nucleotide in iter {
            set.insert(nucleotide);
        }
        set
    }
}

impl fmt::Display for NucleotideSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iupac_code().unwrap_or('-'))
    }
}
