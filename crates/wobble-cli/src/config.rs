//! Layered configuration for the `off-targets` command.
//!
//! Values resolve as CLI flag, then `--set` overrides, then the TOML file,
//! then [`defaults::DefaultsConfig`].

pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;

pub use builder::build_config;
pub use models::AppConfig;
