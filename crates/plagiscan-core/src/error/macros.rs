//! Error macros for plagiscan

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::PlagiscanError::invalid_value($context, $value))
    };
}

/// Macro for creating caller contract violation errors
#[macro_export]
macro_rules! bail_input {
    ($context:expr, $reason:expr) => {
        return Err($crate::error::PlagiscanError::invalid_input(
            $context, $reason,
        ))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::PlagiscanError::UsageError($msg.to_string()))
    };
}
