//! Format output dispatch helpers

/// Dispatch output by format, where every branch returns `Result<()>`.
///
/// ```rust,ignore
/// output_by_format!(cli.format,
///     json => output_json(&result),
///     human => output_human(&result),
///     records => output_records(&result)
/// )
/// ```
#[macro_export]
macro_rules! output_by_format {
    ($format:expr, json => $json:expr, human => $human:expr, records => $records:expr) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => $human,
            $crate::cli::OutputFormat::Records => $records,
        }
    };
}
