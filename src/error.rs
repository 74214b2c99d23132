/// Reasons a line was degraded during a rescan.
///
/// None of these ever reach callers of the engine operations: each one maps
/// to a safe default (zero length, dropped byte, ignored line) and is only
/// logged. The directive parsers return them so tools can explain a line.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("unrecognized mnemonic `{0}`")]
    UnrecognizedMnemonic(String),
    #[error("operand `{0}` does not fit any pattern")]
    UnparsableOperand(String),
    #[error("malformed directive: {reason}")]
    MalformedDirective { reason: String },
    #[error("byte token `{0}` is not a hex value in 00..=FF")]
    OutOfRangeByte(String),
}

impl ScanError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedDirective {
            reason: reason.into(),
        }
    }
}
