use serde::Serialize;
use tracing::debug;

use crate::config::EngineConfig;
use crate::dump::format_dump;
use crate::estimator::{HeuristicEstimator, LengthEstimator};
use crate::memory::{BlockMap, MemoryPatchSimulator};
use crate::tracker::{AddressTracker, Annotations};

/// Read-only result of one full rescan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub annotations: Annotations,
    pub blocks: BlockMap,
}

/// Splits a text buffer into lines the way an editor counts them: a trailing
/// newline yields a final empty line, and `\r\n` endings are accepted.
pub fn split_listing(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect()
}

/// Stateless between calls: every rescan starts from nothing.
pub struct Engine<E = HeuristicEstimator> {
    config: EngineConfig,
    tracker: AddressTracker<E>,
    simulator: MemoryPatchSimulator,
}

impl Engine<HeuristicEstimator> {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_estimator(config, HeuristicEstimator)
    }
}

impl Default for Engine<HeuristicEstimator> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<E: LengthEstimator> Engine<E> {
    pub fn with_estimator(config: EngineConfig, estimator: E) -> Self {
        Self {
            tracker: AddressTracker::with_estimator(config.segment_tag.clone(), estimator),
            simulator: MemoryPatchSimulator::new(),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn rescan<S: AsRef<str>>(&self, lines: &[S]) -> Snapshot {
        let annotations = self.tracker.track(lines);
        let blocks = self.simulator.simulate(lines);
        debug!(
            lines = lines.len(),
            labelled = annotations.labelled().count(),
            blocks = blocks.len(),
            "rescan complete"
        );
        Snapshot {
            annotations,
            blocks,
        }
    }

    pub fn rescan_text(&self, text: &str) -> Snapshot {
        self.rescan(&split_listing(text))
    }

    /// Dump rows from `offset` using the configured segment and row count.
    pub fn dump(&self, snapshot: &Snapshot, offset: u32) -> Vec<String> {
        format_dump(
            &snapshot.blocks,
            self.config.dump_segment,
            offset,
            self.config.dump_rows,
        )
    }
}
