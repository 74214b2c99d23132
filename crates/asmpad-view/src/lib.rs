pub mod model;
pub mod report;

pub use model::{load_config, load_listing, parse_hex_arg, Listing, ViewConfig};
pub use report::{build_report, BlockOut, LineOut, Report};
