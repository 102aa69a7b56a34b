use borderpath_core::dataset::Language;
use borderpath_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse name language from string (`NAME_DE` or `de`)
pub fn parse_language(s: &str) -> std::result::Result<Language, String> {
    s.parse::<Language>().map_err(|e| e.to_string())
}
