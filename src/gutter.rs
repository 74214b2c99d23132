use std::ops::Range;

use serde::Serialize;

use crate::config::GutterConfig;
use crate::tracker::Annotations;

/// Gutter cells of one visible line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GutterLine {
    pub line: usize,
    /// 1-based.
    pub number: Option<usize>,
    pub address: Option<String>,
}

/// Cells for the lines inside `viewport`, clamped to the listing.
pub fn render(annotations: &Annotations, viewport: Range<usize>, cfg: &GutterConfig) -> Vec<GutterLine> {
    let end = viewport.end.min(annotations.len());
    let start = viewport.start.min(end);
    (start..end)
        .map(|line| GutterLine {
            line,
            number: cfg.line_numbers.then_some(line + 1),
            address: if cfg.addresses { annotations.label(line) } else { None },
        })
        .collect()
}

/// Gutter cells followed by the source text, one string per visible line.
pub fn render_listing<S: AsRef<str>>(
    lines: &[S],
    annotations: &Annotations,
    viewport: Range<usize>,
    cfg: &GutterConfig,
) -> Vec<String> {
    let cells = render(annotations, viewport, cfg);
    let number_width = lines.len().max(1).to_string().len();
    let address_width = annotations.segment().len() + 5;
    cells
        .iter()
        .map(|g| {
            let mut out = String::new();
            if cfg.line_numbers {
                let n = g.number.map(|n| n.to_string()).unwrap_or_default();
                out.push_str(&format!("{n:>number_width$}  "));
            }
            if cfg.addresses {
                let a = g.address.as_deref().unwrap_or("");
                out.push_str(&format!("{a:<address_width$}  "));
            }
            out.push_str(lines.get(g.line).map_or("", |l| l.as_ref()));
            out.trim_end().to_string()
        })
        .collect()
}
