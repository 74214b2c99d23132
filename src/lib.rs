pub mod config;
pub mod directive;
pub mod dump;
pub mod engine;
pub mod error;
pub mod estimator;
pub mod gutter;
pub mod instructions;
pub mod memory;
pub mod tokenizer;
pub mod tracker;

pub use config::{EngineConfig, GutterConfig};
pub use engine::{split_listing, Engine, Snapshot};
pub use error::ScanError;
pub use estimator::{estimate, HeuristicEstimator, LengthEstimator};
pub use memory::{simulate, BlockMap, MemoryBlock, MemoryPatchSimulator};
pub use tokenizer::{classify, tokenize, Operand, Register};
pub use tracker::{AddressTracker, Annotations, TrackState};
