//! Terminal progress rendering for conversion attempts.
//!
//! One [`ProgressSink`] follows a single attempt: spinner while the link
//! is being resolved, then a byte-accurate bar once the host declares a
//! payload size. Clones share the same underlying bar so the pipeline's
//! progress callback and the attempt itself render to one line.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use relink_core::{ConvertEvent, ConvertEventSink};

/// Progress sink backed by an indicatif bar on stderr.
pub struct ProgressSink {
    bar: ProgressBar,
}

impl ProgressSink {
    /// Create a sink drawing to stderr.
    #[must_use]
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(None, target);
        bar.set_style(Self::spinner_style());
        bar.set_message("parsing share link");
        bar.enable_steady_tick(Duration::from_millis(120));
        Self { bar }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner} {msg}").unwrap()
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template(
            "{msg} {bar:28.cyan/blue} {bytes:>9} / {total_bytes:>9} ({percent:>3}%) @ {bytes_per_sec}",
        )
        .unwrap()
    }
}

impl Default for ProgressSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ConvertEventSink for ProgressSink {
    fn emit(&self, event: ConvertEvent) {
        match event {
            ConvertEvent::Parsed { file_id } => {
                self.bar.set_message(format!("resolving {file_id}"));
            }
            ConvertEvent::KeyDerived { .. } => {
                self.bar.set_message("key material derived");
            }
            ConvertEvent::Resolved { declared_size } => {
                if declared_size > 0 {
                    self.bar.set_style(Self::bar_style());
                    self.bar.set_length(declared_size);
                }
                self.bar.set_message("downloading");
            }
            ConvertEvent::Downloading { bytes_written, .. } => {
                self.bar.set_position(bytes_written);
            }
            ConvertEvent::Completed { .. } => {
                self.bar.finish_and_clear();
            }
            ConvertEvent::Failed { .. } => {
                // The handler prints the operator-facing message.
                self.bar.finish_and_clear();
            }
        }
    }

    fn clone_box(&self) -> Box<dyn ConvertEventSink> {
        Box::new(Self {
            bar: self.bar.clone(),
        })
    }
}
