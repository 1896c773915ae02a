//! # Core Module
//!
//! The stateless foundation of the library: value types for bases, codons and
//! amino acids, plus the genetic-code knowledge the search is built on.
//!
//! ## Architecture
//!
//! - **Value Types** ([`models`]) - `Nucleotide`, `NucleotideSet`, `Codon`, `AminoAcid`,
//!   `AminoAcidSet` and `DegenerateCodonPattern`
//! - **Genetic Code** ([`tables`]) - Compiled-in NCBI translation tables and the
//!   `DegeneracyIndex` built from one of them
//!
//! Nothing in this layer holds mutable state. A `DegeneracyIndex` is built once
//! per table and only ever read afterward.

pub mod models;
pub mod tables;
