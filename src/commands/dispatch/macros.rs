//! Macros for command timing and logging

/// Trace command execution with elapsed time since startup
///
/// Usage:
/// ```ignore
/// trace_command_always!(ctx.start, "load_document");
/// ```
macro_rules! trace_command_always {
    ($start:expr, $label:expr) => {
        ::tracing::debug!(elapsed = ?$start.elapsed(), $label);
    };
}

pub(crate) use trace_command_always;
