use super::cache::{CacheStats, ExpansionCache};
use crate::core::models::amino_acid::AminoAcidSet;
use crate::core::models::codon::Codon;
use crate::core::models::pattern::DegenerateCodonPattern;
use crate::core::tables::degeneracy::DegeneracyIndex;
use tracing::trace;

/// Per-position union of the bases used by `codons`.
///
/// A single codon yields three singleton sets; an empty slice yields three empty sets.
pub fn union_positions(codons: &[Codon]) -> DegenerateCodonPattern {
    let mut pattern = DegenerateCodonPattern::default();
    for codon in codons {
        pattern.include(*codon);
    }
    pattern
}

/// Expands degenerate patterns back into the amino acids they encode.
///
/// Results are memoized for the lifetime of the expander. `expand` takes
/// `&self`, so one expander can be shared by the workers of a parallel search.
#[derive(Debug)]
pub struct AminoAcidExpander<'a> {
    index: &'a DegeneracyIndex,
    cache: ExpansionCache,
}

impl<'a> AminoAcidExpander<'a> {
    pub fn new(index: &'a DegeneracyIndex) -> Self {
        Self {
            index,
            cache: ExpansionCache::new(),
        }
    }

    pub fn index(&self) -> &'a DegeneracyIndex {
        self.index
    }

    pub fn expand(&self, pattern: &DegenerateCodonPattern) -> AminoAcidSet {
        if let Some(amino_acids) = self.cache.get(pattern) {
            return amino_acids;
        }

        let amino_acids: AminoAcidSet = pattern
            .codons()
            .map(|codon| self.index.translate_codon(codon))
            .collect();
        trace!(
            "Expanded {} ({} codons) -> {}",
            pattern,
            pattern.degeneracy(),
            amino_acids
        );

        self.cache.insert(*pattern, amino_acids);
        amino_acids
    }

    /// Every amino acid reachable once `codons` are merged into one degenerate codon.
    pub fn aa_possibilities(&self, codons: &[Codon]) -> AminoAcidSet {
        self.expand(&union_positions(codons))
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
