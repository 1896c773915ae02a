use crate::error::Result;
use std::fmt::Write;
use tracing::info;
use wobble::core::tables::registry::GeneticCodeTable;

pub fn run() -> Result<()> {
    info!("Listing supported genetic-code tables.");
    print!("{}", render_tables()?);
    Ok(())
}

fn render_tables() -> Result<String> {
    let mut out = String::new();
    for (id, _) in GeneticCodeTable::available() {
        let table = GeneticCodeTable::by_id(id)?;
        let stops: Vec<String> = table.stop_codons().iter().map(|c| c.to_string()).collect();
        let stops = if stops.is_empty() {
            "none".to_string()
        } else {
            stops.join(" ")
        };
        let _ = writeln!(out, "{:>3}  {:<45} stops: {}", id, table.name(), stops);
    }
    Ok(out)
}
