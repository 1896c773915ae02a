use wobble::core::tables::registry::STANDARD_TABLE_ID;
use wobble::engine::config::TiePolicy;

pub struct DefaultsConfig {
    pub table: u8,
    pub ties: TiePolicy,
    pub parallel: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            table: STANDARD_TABLE_ID,
            ties: TiePolicy::First,
            parallel: true,
        }
    }
}
