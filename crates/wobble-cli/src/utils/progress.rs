use indicatif::{ProgressBar, ProgressState, ProgressStyle};
use wobble::engine::progress::{Progress, ProgressCallback};

/// Drives one indicatif bar from search events.
///
/// `ProgressBar` is a shared handle with atomic position updates, so the
/// callback can be invoked from every rayon worker without extra locking.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: ProgressBar,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let pb = ProgressBar::new(0).with_style(Self::bar_style());
        pb.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        pb.finish_and_clear();

        Self { pb }
    }

    /// A handler that never draws, for `-q`.
    pub fn hidden() -> Self {
        let pb = ProgressBar::hidden();
        pb.finish_and_clear();
        Self { pb }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb = self.pb.clone();

        Box::new(move |progress: Progress| {
            match progress {
                Progress::SearchStart {
                    targets,
                    combinations,
                } => {
                    pb.reset();
                    pb.set_length(combinations);
                    pb.set_position(0);
                    pb.set_message(format!("{} target(s)", targets));
                }
                Progress::CombinationEvaluated => {
                    pb.inc(1);
                }
                Progress::SearchFinish {
                    off_targets,
                    candidates,
                } => {
                    if pb.position() < pb.length().unwrap_or(0) {
                        pb.set_position(pb.length().unwrap_or(0));
                    }
                    pb.finish_with_message(format!(
                        "{} off-target(s), {} candidate(s)",
                        off_targets, candidates
                    ));
                }
                Progress::Message(msg) => {
                    if !pb.is_finished() {
                        pb.println(format!("  {}", msg));
                    } else {
                        pb.set_message(msg);
                    }
                }
            }
        })
    }

    /// Clears the bar from the terminal before results are printed.
    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<20} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .with_key(
                "eta",
                |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                    let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
                },
            )
            .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}
