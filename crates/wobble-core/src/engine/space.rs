use super::error::EngineError;
use crate::core::models::amino_acid::AminoAcid;
use crate::core::models::codon::Codon;
use crate::core::models::pattern::DegenerateCodonPattern;
use crate::core::tables::degeneracy::DegeneracyIndex;

/// The Cartesian product of per-target codon lists, addressed by ordinal.
///
/// Ordinals count in mixed radix with the last target varying fastest, which
/// matches nested-loop (and `itertools::multi_cartesian_product`) order. Any
/// ordinal can be decoded independently, so the space can be split across threads.
#[derive(Debug, Clone)]
pub(crate) struct SearchSpace<'a> {
    choices: Vec<&'a [Codon]>,
    size: u64,
}

impl<'a> SearchSpace<'a> {
    /// Fails on the first target the table cannot encode, before anything is enumerated.
    pub fn new(index: &'a DegeneracyIndex, targets: &[AminoAcid]) -> Result<Self, EngineError> {
        let choices = targets
            .iter()
            .map(|&amino_acid| {
                let codons = index.codons_for(amino_acid);
                if codons.is_empty() {
                    Err(EngineError::UnrepresentableAminoAcid {
                        amino_acid,
                        table_id: index.table_id(),
                    })
                } else {
                    Ok(codons)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let size = choices
            .iter()
            .try_fold(1u64, |acc, codons| acc.checked_mul(codons.len() as u64))
            .ok_or(EngineError::SearchSpaceTooLarge {
                targets: targets.len(),
            })?;

        Ok(Self { choices, size })
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn targets(&self) -> usize {
        self.choices.len()
    }

    /// Calls `visit` with the chosen codon for each target, last target first.
    fn for_each_choice(&self, ordinal: u64, mut visit: impl FnMut(Codon)) {
        let mut remainder = ordinal;
        for codons in self.choices.iter().rev() {
            let radix = codons.len() as u64;
            visit(codons[(remainder % radix) as usize]);
            remainder /= radix;
        }
    }

    pub fn codons(&self, ordinal: u64) -> Vec<Codon> {
        let mut codons = Vec::with_capacity(self.choices.len());
        self.for_each_choice(ordinal, |codon| codons.push(codon));
        codons.reverse();
        codons
    }

    /// Merged pattern of the combination, without allocating its codon list.
    pub fn pattern(&self, ordinal: u64) -> DegenerateCodonPattern {
        let mut pattern = DegenerateCodonPattern::default();
        self.for_each_choice(ordinal, |codon| pattern.include(codon));
        pattern
    }
}
