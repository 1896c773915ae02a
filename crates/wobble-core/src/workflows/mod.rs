//! # Workflows Module
//!
//! High-level entry points that tie the table layer and the engine together.
//!
//! - **Off-Target Search** ([`off_targets`]) - Choose one codon per target amino acid so
//!   that the merged degenerate codon encodes as few unwanted amino acids as possible.

pub mod off_targets;
