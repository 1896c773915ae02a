use super::codon::Codon;
use super::nucleotide::NucleotideSet;
use itertools::iproduct;
use std::fmt;

/// Three per-position nucleotide sets describing every codon reachable by
/// choosing one base at each position independently.
///
/// Displays as an IUPAC degenerate codon such as `AMW`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DegenerateCodonPattern([NucleotideSet; 3]);

impl DegenerateCodonPattern {
    pub fn new(first: NucleotideSet, second: NucleotideSet, third: NucleotideSet) -> Self {
        Self([first, second, third])
    }

    pub fn positions(&self) -> &[NucleotideSet; 3] {
        &self.0
    }

    pub fn position(&self, position: usize) -> NucleotideSet {
        self.0[position]
    }

    /// Widens each position so that `codon` becomes reachable.
    pub fn include(&mut self, codon: Codon) {
        for (set, nucleotide) in self.0.iter_mut().zip(codon.nucleotides()) {
            set.insert(nucleotide);
        }
    }

    /// Number of concrete codons the pattern stands for.
    pub fn degeneracy(&self) -> usize {
        self.0.iter().map(NucleotideSet::len).product()
    }

    /// Concrete codons in table order.
    pub fn codons(&self) -> impl Iterator<Item = Codon> + '_ {
        let [first, second, third] = &self.0;
        iproduct!(first.iter(), second.iter(), third.iter()).map(|(a, b, c)| Codon::new(a, b, c))
    }
}

impl fmt::Display for DegenerateCodonPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for set in &self.0 {
            write!(f, "{}", set)?;
        }
        Ok(())
    }
}
