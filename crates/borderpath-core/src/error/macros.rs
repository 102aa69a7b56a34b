//! Error macros for borderpath

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::BorderpathError::invalid_value($context, $value))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::BorderpathError::UsageError($msg.to_string()))
    };
}

/// Macro for creating invalid dataset errors
#[macro_export]
macro_rules! bail_dataset {
    ($($arg:tt)*) => {
        return Err($crate::error::BorderpathError::invalid_dataset(format!($($arg)*)))
    };
}
