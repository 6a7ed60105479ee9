//! Errors raised while translating a single script.

/// Error that aborts the translation of one script.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    #[error("malformed script: {reason}")]
    MalformedScript { reason: String },

    #[error("malformed step at row {ordinal}: {reason}")]
    MalformedStep { ordinal: usize, reason: String },

    #[error("unknown command `{command}` at row {ordinal} (target \"{target}\")")]
    UnknownCommand {
        command: String,
        target: String,
        ordinal: usize,
    },
}

impl TranslateError {
    pub(crate) fn malformed_script(reason: impl Into<String>) -> Self {
        Self::MalformedScript {
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed_step(ordinal: usize, reason: impl Into<String>) -> Self {
        Self::MalformedStep {
            ordinal,
            reason: reason.into(),
        }
    }

    /// Row ordinal the error points at, if it concerns a single row.
    pub fn ordinal(&self) -> Option<usize> {
        match self {
            Self::MalformedScript { .. } => None,
            Self::MalformedStep { ordinal, .. } | Self::UnknownCommand { ordinal, .. } => {
                Some(*ordinal)
            }
        }
    }
}
