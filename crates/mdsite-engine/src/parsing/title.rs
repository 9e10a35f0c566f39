use crate::error::ParseError;

const TITLE_PREFIX: &str = "# ";

/// Text of the h1 heading that must open the document.
///
/// # Errors
/// [`ParseError::MissingTitle`] if the document does not start with `# `.
pub fn extract_title(markdown: &str) -> Result<String, ParseError> {
    let rest = markdown
        .strip_prefix(TITLE_PREFIX)
        .ok_or(ParseError::MissingTitle)?;
    let first_line = rest.split('\n').next().unwrap_or_default();
    Ok(first_line.trim().to_string())
}
