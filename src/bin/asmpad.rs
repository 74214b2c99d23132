use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use asmpad::gutter::render_listing;
use asmpad::{split_listing, Engine, EngineConfig, GutterConfig};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Print a DEBUG-style listing with estimated addresses"
)]
struct Opts {
    /// Segment tag used in address labels
    #[arg(short, long, default_value = "CS")]
    segment: String,
    /// Also print a memory dump from this hex offset
    #[arg(short, long, value_name = "HEX")]
    dump: Option<String>,
    /// Print the whole snapshot as JSON instead
    #[arg(long)]
    json: bool,
    #[arg(value_name = "LISTING")]
    input: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let text = std::fs::read_to_string(&opts.input)
        .with_context(|| format!("reading {}", opts.input))?;
    let lines = split_listing(&text);

    let engine = Engine::new(EngineConfig {
        segment_tag: opts.segment,
        ..EngineConfig::default()
    });
    let snapshot = engine.rescan(&lines);

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    for row in render_listing(&lines, &snapshot.annotations, 0..lines.len(), &GutterConfig::default()) {
        println!("{row}");
    }

    if let Some(offset) = opts.dump {
        let offset = u32::from_str_radix(offset.trim_start_matches("0x"), 16)
            .with_context(|| format!("bad dump offset `{offset}`"))?;
        println!();
        for row in engine.dump(&snapshot, offset) {
            println!("{row}");
        }
    }

    Ok(())
}
