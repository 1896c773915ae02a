use thiserror::Error;
use wobble::core::models::amino_acid::{AminoAcid, AminoAcidError};
use wobble::core::models::codon::{Codon, CodonError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidAssignment(String),

    #[error("Component '{component}' cannot be empty in '{input}'.")]
    EmptyComponent {
        component: &'static str,
        input: String,
    },
}

/// Splits `KEY=VALUE` at the first `=`, trimming both sides.
pub fn parse_assignment(input: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| ParseError::InvalidAssignment(input.to_string()))?;
    let (key, value) = (key.trim(), value.trim());
    if key.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "KEY",
            input: input.to_string(),
        });
    }
    if value.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "VALUE",
            input: input.to_string(),
        });
    }
    Ok((key, value))
}

/// Target amino acids from one or more positional arguments (`KT`, `K T`, `k,t`).
pub fn parse_amino_acids(args: &[String]) -> Result<Vec<AminoAcid>, AminoAcidError> {
    let joined: String = args
        .iter()
        .flat_map(|arg| arg.chars())
        .filter(|c| *c != ',')
        .collect();
    AminoAcid::parse_list(&joined)
}

/// Codons from positional arguments; accepts lowercase and comma-separated lists.
pub fn parse_codons(args: &[String]) -> Result<Vec<Codon>, CodonError> {
    args.iter()
        .flat_map(|arg| arg.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_ascii_uppercase().parse())
        .collect()
}
