use crate::cli::OffTargetsArgs;
use crate::config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use std::fmt::Write;
use tracing::{info, warn};
use wobble::core::tables::degeneracy::DegeneracyIndex;
use wobble::engine::progress::ProgressReporter;
use wobble::workflows::off_targets::{OffTargetSearch, SearchReport};

pub fn run(args: OffTargetsArgs, quiet: bool) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let app = config::build_config(&args)?;

    let index = DegeneracyIndex::new(app.table_id)?;
    if app.search.parallel && !cfg!(feature = "parallel") {
        warn!("Parallel search requested but not compiled in; running sequentially.");
    }

    let progress_handler = if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    let search = OffTargetSearch::new(&index, app.search).with_reporter(reporter);

    info!("Invoking the off-target search...");
    let report = search.search(&app.targets);
    progress_handler.finish();
    let report = report?;

    print!("{}", render_report(&report, index.table_name()));
    Ok(())
}

fn render_report(report: &SearchReport, table_name: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Table {} ({})", report.table_id, table_name);

    if report.on_target.is_empty() {
        let _ = writeln!(out, "No target amino acids given.");
        return out;
    }

    let _ = writeln!(out, "Targets: {}", report.on_target);
    let _ = writeln!(out, "Combinations evaluated: {}", report.search_space);
    if report.off_targets.is_empty() {
        let _ = writeln!(out, "Off-target amino acids: none");
    } else {
        let _ = writeln!(
            out,
            "Off-target amino acids: {} ({})",
            report.off_targets,
            report.off_targets.len()
        );
    }

    let _ = writeln!(out, "Best combination(s):");
    for candidate in &report.candidates {
        let codons: Vec<String> = candidate.codons.iter().map(|c| c.to_string()).collect();
        let _ = writeln!(
            out,
            "  {} -> {}  encodes {}",
            codons.join(" "),
            candidate.pattern,
            candidate.reachable
        );
    }
    out
}
