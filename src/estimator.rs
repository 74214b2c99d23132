use tracing::{debug, trace};

use crate::directive::is_directive_line;
use crate::error::ScanError;
use crate::instructions::lookup;
use crate::tokenizer::{tokenize, Operand};

/// Byte length of one source line, without assembling it.
pub trait LengthEstimator {
    /// 0 for anything unrecognized.
    fn estimate(&self, mnemonic: &str, op1: Option<&Operand>, op2: Option<&Operand>) -> u8;

    fn estimate_line(&self, line: &str) -> u8 {
        if line.trim().is_empty() || is_directive_line(line) {
            return 0;
        }
        let tokens = tokenize(line);
        let Some(mnemonic) = tokens.mnemonic.as_deref() else {
            return 0;
        };
        let (op1, op2) = tokens.operands();
        self.estimate(mnemonic, op1.as_ref(), op2.as_ref())
    }
}

/// Table-driven estimate of real-mode x86 encodings.
///
/// This is a fixed policy rather than an encoder: the destination register
/// name alone picks imm8 vs imm16 for MOV, arithmetic immediates pick the
/// short form when `<= 0xFF`, jumps and calls are assumed short, and memory
/// displacements are never counted.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicEstimator;

impl HeuristicEstimator {
    pub fn new() -> Self {
        Self
    }

    pub fn try_estimate(
        &self,
        mnemonic: &str,
        op1: Option<&Operand>,
        op2: Option<&Operand>,
    ) -> Result<u8, ScanError> {
        let desc = lookup(mnemonic)
            .ok_or_else(|| ScanError::UnrecognizedMnemonic(mnemonic.to_string()))?;
        let len = desc.rule.length(op1, op2).ok_or_else(|| {
            let shown = [op1, op2]
                .into_iter()
                .flatten()
                .map(describe)
                .collect::<Vec<_>>()
                .join(", ");
            ScanError::UnparsableOperand(format!("{} {shown}", desc.name))
        })?;
        trace!(mnemonic = ?desc.mnemonic, len, "length estimated");
        Ok(len)
    }
}

fn describe(op: &Operand) -> String {
    match op {
        Operand::Register(r) => r.name().to_string(),
        Operand::Immediate { token, .. } => token.clone(),
        Operand::Indirect(r) => format!("[{}]", r.name()),
        Operand::Unparsed(t) => t.clone(),
    }
}

impl LengthEstimator for HeuristicEstimator {
    fn estimate(&self, mnemonic: &str, op1: Option<&Operand>, op2: Option<&Operand>) -> u8 {
        self.try_estimate(mnemonic, op1, op2).unwrap_or_else(|err| {
            debug!(%err, "length estimate falls back to 0");
            0
        })
    }
}

/// [`HeuristicEstimator::estimate`] without constructing an estimator.
pub fn estimate(mnemonic: &str, op1: Option<&Operand>, op2: Option<&Operand>) -> u8 {
    HeuristicEstimator.estimate(mnemonic, op1, op2)
}
