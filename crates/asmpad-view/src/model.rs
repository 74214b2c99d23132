use anyhow::{Context, Result};
use std::path::Path;

use asmpad::{split_listing, EngineConfig, GutterConfig};
use serde::{Deserialize, Serialize};

/// A listing file held in memory; lines borrow from `text`.
#[derive(Debug, Clone)]
pub struct Listing {
    pub text: String,
}

impl Listing {
    pub fn lines(&self) -> Vec<&str> {
        split_listing(&self.text)
    }
}

pub fn load_listing(path: &Path) -> Result<Listing> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading listing {}", path.display()))?;
    Ok(Listing { text })
}

/// Settings file contents; every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub engine: EngineConfig,
    pub gutter: GutterConfig,
}

pub fn load_config(path: Option<&Path>) -> Result<ViewConfig> {
    let Some(path) = path else {
        return Ok(ViewConfig::default());
    };
    let txt = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&txt).with_context(|| format!("parsing config {}", path.display()))
}

/// Hex with or without `0x`.
pub fn parse_hex_arg(s: &str) -> Result<u32> {
    let s = s.trim();
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u32::from_str_radix(digits, 16).with_context(|| format!("`{s}` is not a hex number"))
}
