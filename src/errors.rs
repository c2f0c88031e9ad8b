use thiserror::Error;

/// Hard failures of an interactive session. Validation rejections and
/// user cancellation are not errors and never surface here.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
