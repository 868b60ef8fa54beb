//! Error types for the matching pipeline.

use thiserror::Error;

/// Errors produced by segment joining and match estimation.
///
/// `MatchRejected` is not exceptional in normal operation: the diagonal
/// scanner probes many candidate alignments and silently drops the ones
/// that fail the validity gate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum MatchError {
    /// Join attempted between segments that share no endpoint within
    /// tolerance. Both operands are left unmodified.
    #[error("segments share no endpoint within tolerance")]
    LinesUnconnected,

    /// Offset estimation invoked on ranges of unequal length, or on
    /// ranges shorter than two lines.
    #[error("matched ranges differ in length or hold fewer than two lines")]
    SizeMismatch,

    /// Offset estimation ran but the residual deviations exceed the
    /// configured validity thresholds.
    #[error("offset deviations exceed validity thresholds")]
    MatchRejected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MatchError::LinesUnconnected.to_string(),
            "segments share no endpoint within tolerance"
        );
        assert_eq!(
            MatchError::MatchRejected.to_string(),
            "offset deviations exceed validity thresholds"
        );
    }
}
