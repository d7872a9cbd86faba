//! Error severity classification shared by PromptCraft error types.

/// Severity levels for error classification
///
/// These levels categorize errors by their impact, enabling appropriate
/// handling, logging, and user notification strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Potential issue but operation can proceed
    Warning,
    /// Operation failed but the system can continue
    Error,
    /// System cannot continue, requires immediate attention
    Critical,
}

/// Trait for error types that have severity levels
///
/// All PromptCraft error types implement this trait to provide consistent
/// severity reporting across the codebase, so callers can choose logging
/// levels and user-facing presentation uniformly.
pub trait Severity {
    /// The severity of this error
    fn severity(&self) -> ErrorSeverity;

    /// Whether this error requires immediate attention
    fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }
}
