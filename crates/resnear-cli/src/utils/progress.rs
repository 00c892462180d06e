use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use resnear::engine::progress::{Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Renders batch progress as an indicatif bar on stderr, one tick per searched structure.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new(hidden: bool) -> Self {
        let pb = ProgressBar::new(0).with_style(Self::bar_style());
        pb.set_draw_target(if hidden {
            ProgressDrawTarget::hidden()
        } else {
            ProgressDrawTarget::stderr()
        });

        Self {
            pb: Arc::new(Mutex::new(pb)),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb_clone = self.pb.clone();

        Box::new(move |progress: Progress| {
            let Ok(pb_guard) = pb_clone.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::BatchStart { total_structures } => {
                    pb_guard.reset();
                    pb_guard.set_length(total_structures);
                    pb_guard.set_message("Searching");
                }
                Progress::StructureFinish { .. } => pb_guard.inc(1),
                Progress::BatchFinish => pb_guard.finish_and_clear(),
                Progress::TargetsFound { .. } | Progress::TargetSearched => {}
            }
        })
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.pb.lock().map(|pb| pb.position()).unwrap_or(0)
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<12} [{bar:40.cyan/blue}] {pos}/{len} structures ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-")
    }
}
