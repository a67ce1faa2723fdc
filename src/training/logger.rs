//! Structured training output with verbosity levels.

use serde::{Deserialize, Serialize};

use super::builder::LeafReason;

/// Output level for training.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum Verbosity {
    /// No output. The default, keeping the engine free of I/O.
    #[default]
    Silent,
    /// Start/finish summary lines.
    Info,
    /// Every split and leaf decision.
    Debug,
}

/// Prints training progress to stderr.
#[derive(Debug)]
pub struct TrainingLogger {
    verbosity: Verbosity,
    n_splits: usize,
}

impl TrainingLogger {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            n_splits: 0,
        }
    }

    pub fn start(&self, n_rows: usize, n_features: usize) {
        if self.verbosity >= Verbosity::Info {
            eprintln!("[train] {} rows, {} usable features", n_rows, n_features);
        }
    }

    pub fn log_split(&mut self, depth: usize, feature: usize, gain: f64) {
        self.n_splits += 1;
        if self.verbosity >= Verbosity::Debug {
            eprintln!(
                "[train] depth {}: split on feature {} (gain {:.4})",
                depth, feature, gain
            );
        }
    }

    pub fn log_leaf(&self, depth: usize, class: usize, reason: &LeafReason) {
        if self.verbosity >= Verbosity::Debug {
            let reason = match reason {
                LeafReason::NoFeatures => "no features left".to_string(),
                LeafReason::MinLeaf(n) => format!("filter size {} at min_leaf", n),
                LeafReason::NoPositiveGain => "no positive-gain split".to_string(),
            };
            eprintln!("[train] depth {}: leaf class {} ({})", depth, class, reason);
        }
    }

    pub fn finish(&self, n_leaves: usize, depth: usize) {
        if self.verbosity >= Verbosity::Info {
            eprintln!(
                "[train] done: {} splits, {} leaves, depth {}",
                self.n_splits, n_leaves, depth
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels_are_ordered() {
        assert!(Verbosity::Silent < Verbosity::Info);
        assert!(Verbosity::Info < Verbosity::Debug);
        assert_eq!(Verbosity::default(), Verbosity::Silent);
    }
}
