use super::registry::{GeneticCodeTable, STANDARD_TABLE_ID, TableError};
use crate::core::models::amino_acid::{AminoAcid, AminoAcidSet};
use crate::core::models::codon::{Codon, CodonError};
use std::collections::HashMap;
use tracing::debug;

/// Forward and reverse codon/amino acid lookups for one genetic-code table.
///
/// Built once and read-only afterward; a `DegeneracyIndex` can be shared
/// across threads without locking. Several indexes for different tables can
/// coexist.
#[derive(Debug, Clone)]
pub struct DegeneracyIndex {
    table_id: u8,
    table_name: &'static str,
    codon_to_amino_acid: [AminoAcid; Codon::COUNT],
    amino_acid_to_codons: HashMap<AminoAcid, Vec<Codon>>,
}

impl DegeneracyIndex {
    pub fn new(table_id: u8) -> Result<Self, TableError> {
        Self::from_table(&GeneticCodeTable::by_id(table_id)?)
    }

    pub fn standard() -> Result<Self, TableError> {
        Self::new(STANDARD_TABLE_ID)
    }

    /// Single pass over the sense codons, then the stop codons.
    ///
    /// Fails if the table leaves a codon unassigned or assigns one twice.
    pub fn from_table(table: &GeneticCodeTable) -> Result<Self, TableError> {
        let mut forward: [Option<AminoAcid>; Codon::COUNT] = [None; Codon::COUNT];
        let mut amino_acid_to_codons: HashMap<AminoAcid, Vec<Codon>> = HashMap::new();

        let entries = table
            .forward_table()
            .iter()
            .copied()
            .chain(table.stop_codons().iter().map(|&c| (c, AminoAcid::STOP)));

        for (codon, amino_acid) in entries {
            let slot = &mut forward[codon.index()];
            if slot.is_some() {
                return Err(TableError::Malformed {
                    id: table.id(),
                    reason: format!("codon {} is assigned more than once", codon),
                });
            }
            *slot = Some(amino_acid);
            amino_acid_to_codons
                .entry(amino_acid)
                .or_default()
                .push(codon);
        }

        let mut codon_to_amino_acid = [AminoAcid::STOP; Codon::COUNT];
        for (index, entry) in forward.iter().enumerate() {
            codon_to_amino_acid[index] = entry.ok_or_else(|| TableError::Malformed {
                id: table.id(),
                reason: format!(
                    "codon {} is unassigned",
                    Codon::from_index(index).map(|c| c.to_string()).unwrap_or_default()
                ),
            })?;
        }

        debug!(
            "Built degeneracy index for table {} ({}): {} amino acid symbols.",
            table.id(),
            table.name(),
            amino_acid_to_codons.len()
        );

        Ok(Self {
            table_id: table.id(),
            table_name: table.name(),
            codon_to_amino_acid,
            amino_acid_to_codons,
        })
    }

    /// Translates a codon given as text, e.g. `"ATG"`.
    pub fn translate(&self, codon: &str) -> Result<AminoAcid, CodonError> {
        Ok(self.translate_codon(codon.parse()?))
    }

    #[inline]
    pub fn translate_codon(&self, codon: Codon) -> AminoAcid {
        self.codon_to_amino_acid[codon.index()]
    }

    /// Codons encoding `amino_acid`, in table order. Empty when the table never produces it.
    pub fn codons_for(&self, amino_acid: AminoAcid) -> &[Codon] {
        self.amino_acid_to_codons
            .get(&amino_acid)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every symbol this table can produce, including stop if present.
    pub fn amino_acids(&self) -> AminoAcidSet {
        self.amino_acid_to_codons.keys().collect()
    }

    pub fn table_id(&self) -> u8 {
        self.table_id
    }

    pub fn table_name(&self) -> &'static str {
        self.table_name
    }
}
