use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::OffTargetsArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use wobble::engine::config::{SearchConfigBuilder, TiePolicy};

pub fn build_config(args: &OffTargetsArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;
    let search_file = file_config.search.take().unwrap_or_default();

    let table_id = args
        .table
        .or(search_file.table)
        .unwrap_or(defaults.table);

    let file_ties = search_file
        .ties
        .as_deref()
        .map(str::parse::<TiePolicy>)
        .transpose()
        .map_err(|e| CliError::Config(e.to_string()))?;
    let tie_policy = args.ties.or(file_ties).unwrap_or(defaults.ties);

    let parallel = args
        .execution
        .requested()
        .or(search_file.parallel)
        .unwrap_or(defaults.parallel);

    let search = SearchConfigBuilder::new()
        .tie_policy(tie_policy)
        .parallel(parallel)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let targets = parser::parse_amino_acids(&args.amino_acids)?;

    Ok(AppConfig {
        targets,
        table_id,
        search,
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value_str) =
            parser::parse_assignment(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;
        let search = config.search.get_or_insert_with(Default::default);

        match key {
            "search.table" => {
                search.table = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid table id for {}: {}", key, value_str))
                })?);
            }
            "search.ties" => {
                value_str
                    .parse::<TiePolicy>()
                    .map_err(|e| CliError::Config(e.to_string()))?;
                search.ties = Some(value_str.to_string());
            }
            "search.parallel" => {
                search.parallel = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid boolean value for {}: {}", key, value_str))
                })?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
