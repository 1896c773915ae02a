use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Which of the equally good codon combinations a search reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TiePolicy {
    /// Only the first minimal combination in enumeration order.
    #[default]
    First,
    /// Every combination tied at the minimal off-target count, in enumeration order.
    All,
}

impl FromStr for TiePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(TiePolicy::First),
            "all" => Ok(TiePolicy::All),
            _ => Err(ConfigError::InvalidValue {
                key: "tie_policy",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for TiePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TiePolicy::First => write!(f, "first"),
            TiePolicy::All => write!(f, "all"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchConfig {
    pub tie_policy: TiePolicy,
    /// Evaluate combinations on the rayon pool. Ignored without the `parallel` feature.
    pub parallel: bool,
}

#[derive(Default)]
pub struct SearchConfigBuilder {
    tie_policy: Option<TiePolicy>,
    parallel: Option<bool>,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tie_policy(mut self, policy: TiePolicy) -> Self {
        self.tie_policy = Some(policy);
        self
    }
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    pub fn build(self) -> Result<SearchConfig, ConfigError> {
        Ok(SearchConfig {
            tie_policy: self
                .tie_policy
                .ok_or(ConfigError::MissingParameter("tie_policy"))?,
            parallel: self.parallel.unwrap_or(false),
        })
    }
}
