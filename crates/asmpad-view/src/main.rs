use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use asmpad::gutter::{render, render_listing};
use asmpad::Engine;
use asmpad_view::{build_report, load_config, load_listing, parse_hex_arg};

#[derive(Parser, Debug)]
#[command(author, version, about = "Address annotation and memory dump viewer", long_about = None)]
struct Cli {
    /// JSON settings file ({ "engine": {..}, "gutter": {..} })
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Input listing path
    #[arg(value_name = "LISTING")]
    input: PathBuf,
    /// Override the segment tag of address labels
    #[arg(long)]
    segment_tag: Option<String>,
    /// Write output to file instead of stdout
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Listing with line numbers and estimated addresses
    Annotate {
        /// First line shown (1-based)
        #[arg(long, default_value_t = 1usize)]
        first: usize,
        /// Number of lines shown (default: to the end)
        #[arg(long)]
        count: Option<usize>,
        #[arg(long)]
        no_line_numbers: bool,
        #[arg(long)]
        no_addresses: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Hex+ASCII dump of the simulated memory
    Dump {
        /// Start offset (hex)
        #[arg(long, default_value = "100")]
        offset: String,
        /// Rows of 16 bytes
        #[arg(long)]
        rows: Option<usize>,
        /// Segment printed on each row (hex)
        #[arg(long)]
        segment: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Full snapshot as JSON
    Report,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut cfg = load_config(cli.config.as_deref())?;
    if let Some(tag) = cli.segment_tag {
        cfg.engine.segment_tag = tag;
    }
    let listing = load_listing(&cli.input)?;
    let lines = listing.lines();

    let buf = match cli.cmd {
        Command::Annotate { first, count, no_line_numbers, no_addresses, format } => {
            anyhow::ensure!(first >= 1, "--first is 1-based");
            cfg.gutter.line_numbers &= !no_line_numbers;
            cfg.gutter.addresses &= !no_addresses;
            let snapshot = Engine::new(cfg.engine).rescan(&lines);
            let start = first - 1;
            let end = count.map_or(lines.len(), |c| start.saturating_add(c));
            match format {
                OutputFormat::Text => render_listing(&lines, &snapshot.annotations, start..end, &cfg.gutter).join("\n") + "\n",
                OutputFormat::Json => serde_json::to_string_pretty(&render(&snapshot.annotations, start..end, &cfg.gutter))? + "\n",
            }
        }
        Command::Dump { offset, rows, segment, format } => {
            let offset = parse_hex_arg(&offset)?;
            if let Some(rows) = rows {
                cfg.engine.dump_rows = rows;
            }
            if let Some(seg) = segment {
                let seg = parse_hex_arg(&seg)?;
                cfg.engine.dump_segment = u16::try_from(seg)
                    .map_err(|_| anyhow::anyhow!("--segment {seg:#x} exceeds FFFF"))?;
            }
            let engine = Engine::new(cfg.engine);
            let rows = engine.dump(&engine.rescan(&lines), offset);
            match format {
                OutputFormat::Text => rows.join("\n") + "\n",
                OutputFormat::Json => serde_json::to_string_pretty(&rows)? + "\n",
            }
        }
        Command::Report => {
            let snapshot = Engine::new(cfg.engine).rescan(&lines);
            serde_json::to_string_pretty(&build_report(&lines, &snapshot))? + "\n"
        }
    };

    if let Some(path) = cli.out { std::fs::write(path, buf)?; } else { print!("{}", buf); }
    Ok(())
}
