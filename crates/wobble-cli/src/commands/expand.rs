use crate::cli::ExpandArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use tracing::info;
use wobble::core::models::amino_acid::AminoAcidSet;
use wobble::core::models::pattern::DegenerateCodonPattern;
use wobble::core::tables::degeneracy::DegeneracyIndex;
use wobble::engine::expander::{AminoAcidExpander, union_positions};

pub fn run(args: ExpandArgs) -> Result<()> {
    let codons = parser::parse_codons(&args.codons)?;
    if codons.is_empty() {
        return Err(CliError::Argument("at least one codon is required".to_string()));
    }

    let index = DegeneracyIndex::new(args.table)?;
    info!(
        "Expanding {} codon(s) under table {} ({}).",
        codons.len(),
        index.table_id(),
        index.table_name()
    );

    let expander = AminoAcidExpander::new(&index);
    let pattern = union_positions(&codons);
    let amino_acids = expander.expand(&pattern);

    println!("{}", render_expansion(&pattern, &amino_acids));
    Ok(())
}

fn render_expansion(pattern: &DegenerateCodonPattern, amino_acids: &AminoAcidSet) -> String {
    let codons: Vec<String> = pattern.codons().map(|c| c.to_string()).collect();
    format!(
        "{} ({} codon(s): {}) -> {}",
        pattern,
        pattern.degeneracy(),
        codons.join(" "),
        amino_acids
    )
}
