use serde::Serialize;
use tracing::{debug, trace};

use crate::directive::parse_origin;
use crate::estimator::{HeuristicEstimator, LengthEstimator};

/// Position of the address counter between two lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackState {
    /// No origin seen yet, or tracking ended by a blank line after `A`.
    #[default]
    Idle,
    /// Just past an origin directive.
    AwaitingFirstInstruction { next: u16 },
    Tracking { next: u16 },
}

impl TrackState {
    /// Consumes one line; returns the following state and the line's offset label.
    pub fn advance<E: LengthEstimator + ?Sized>(self, line: &str, est: &E) -> (TrackState, Option<u16>) {
        match parse_origin(line) {
            Ok(Some(next)) => return (TrackState::AwaitingFirstInstruction { next }, None),
            Ok(None) => {}
            Err(err) => debug!(%err, "origin directive ignored"),
        }

        let blank = line.trim().is_empty();
        match (self, blank) {
            (TrackState::Idle, _) => (TrackState::Idle, None),
            (TrackState::AwaitingFirstInstruction { next }, true) => (TrackState::Idle, Some(next)),
            (TrackState::Tracking { next }, true) => (TrackState::Tracking { next }, None),
            (TrackState::AwaitingFirstInstruction { next } | TrackState::Tracking { next }, false) => {
                // Offsets wrap like a real-mode IP.
                let len = est.estimate_line(line);
                (
                    TrackState::Tracking {
                        next: next.wrapping_add(u16::from(len)),
                    },
                    Some(next),
                )
            }
        }
    }
}

pub fn format_label(segment: &str, offset: u16) -> String {
    format!("{segment}:{offset:04X}")
}

/// Per-line address labels of one rescan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotations {
    segment: String,
    offsets: Vec<Option<u16>>,
}

impl Annotations {
    pub fn segment(&self) -> &str {
        &self.segment
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn offsets(&self) -> &[Option<u16>] {
        &self.offsets
    }

    pub fn offset(&self, line: usize) -> Option<u16> {
        self.offsets.get(line).copied().flatten()
    }

    pub fn label(&self, line: usize) -> Option<String> {
        self.offset(line).map(|off| format_label(&self.segment, off))
    }

    pub fn labels(&self) -> Vec<Option<String>> {
        (0..self.len()).map(|i| self.label(i)).collect()
    }

    /// Only the lines that carry a label.
    pub fn labelled(&self) -> impl Iterator<Item = (usize, String)> + '_ {
        self.offsets
            .iter()
            .enumerate()
            .filter_map(|(i, off)| off.map(|off| (i, format_label(&self.segment, off))))
    }
}

pub struct AddressTracker<E = HeuristicEstimator> {
    estimator: E,
    segment: String,
}

impl AddressTracker<HeuristicEstimator> {
    pub fn new(segment: impl Into<String>) -> Self {
        Self::with_estimator(segment, HeuristicEstimator)
    }
}

impl<E: LengthEstimator> AddressTracker<E> {
    pub fn with_estimator(segment: impl Into<String>, estimator: E) -> Self {
        Self {
            estimator,
            segment: segment.into(),
        }
    }

    /// Walks the whole listing from the idle state.
    pub fn track<S: AsRef<str>>(&self, lines: &[S]) -> Annotations {
        let offsets = lines
            .iter()
            .enumerate()
            .scan(TrackState::Idle, |state, (i, line)| {
                let (next, offset) = state.advance(line.as_ref(), &self.estimator);
                if let Some(offset) = offset {
                    trace!(line = i, offset, "address assigned");
                }
                *state = next;
                Some(offset)
            })
            .collect();
        Annotations {
            segment: self.segment.clone(),
            offsets,
        }
    }
}
