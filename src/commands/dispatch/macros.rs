//! Macros for command timing and logging

/// Trace a command phase at debug level
///
/// Usage:
/// ```ignore
/// trace_command!(ctx, "compute");
/// ```
macro_rules! trace_command {
    ($ctx:expr, $label:expr) => {
        ::tracing::debug!(elapsed = ?$ctx.start.elapsed(), $label);
    };
}

pub(crate) use trace_command;
