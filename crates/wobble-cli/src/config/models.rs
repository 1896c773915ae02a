use wobble::core::models::amino_acid::AminoAcid;
use wobble::engine::config::SearchConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub targets: Vec<AminoAcid>,
    pub table_id: u8,
    pub search: SearchConfig,
}
