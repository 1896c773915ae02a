//! # Core Models Module
//!
//! Value types shared by every layer of the library: bases, codons, amino acid
//! symbols and the degenerate codon patterns produced by merging codons.
//!
//! ## Key Components
//!
//! - [`nucleotide`] - A single base and the per-position [`NucleotideSet`](nucleotide::NucleotideSet)
//! - [`codon`] - Concrete nucleotide triplets and their `TCAG` table index
//! - [`amino_acid`] - One-letter amino acid symbols (plus the stop marker) and sets of them
//! - [`pattern`] - [`DegenerateCodonPattern`](pattern::DegenerateCodonPattern), three nucleotide sets with IUPAC display
//!
//! All types are small `Copy` values so they can be hashed, cached and shared
//! across threads freely.

pub mod amino_acid;
pub mod codon;
pub mod nucleotide;
pub mod pattern;
