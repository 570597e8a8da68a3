//! Error macros for routewise

/// Macro for returning a usage error
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::RouteError::UsageError($msg.to_string()))
    };
}

/// Macro for returning an out-of-range router id error
#[macro_export]
macro_rules! bail_out_of_range {
    ($context:expr, $node:expr, $node_count:expr) => {
        return Err($crate::error::RouteError::out_of_range(
            $context,
            $node,
            $node_count,
        ))
    };
}

/// Macro for returning a parse error
#[macro_export]
macro_rules! bail_parse {
    ($line:expr, $reason:expr) => {
        return Err($crate::error::RouteError::parse($line, $reason))
    };
}
