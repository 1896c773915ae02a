use crate::core::models::amino_acid::{AminoAcid, AminoAcidError};
use crate::core::models::codon::CodonError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Amino acid '{amino_acid}' is not encoded by any codon in genetic code table {table_id}")]
    UnrepresentableAminoAcid { amino_acid: AminoAcid, table_id: u8 },

    #[error(transparent)]
    UnknownCodon(#[from] CodonError),

    #[error(transparent)]
    InvalidSymbol(#[from] AminoAcidError),

    #[error("Search space for {targets} target amino acids exceeds 2^64 codon combinations")]
    SearchSpaceTooLarge { targets: usize },
}
