//! Error macros for anansi

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::AnansiError::invalid_value($context, $value))
    };
}

/// Macro for creating illegal-state errors from a cursor operation
#[macro_export]
macro_rules! bail_illegal_state {
    ($operation:expr, $reason:expr) => {
        return Err($crate::error::AnansiError::illegal_state(
            $operation, $reason,
        ))
    };
}
