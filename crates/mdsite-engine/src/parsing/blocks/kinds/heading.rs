use crate::error::ParseError;

/// ATX heading, `# Title` through `###### Title`.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Any block starting with `#` is a heading candidate; the level is only
    /// validated by [`Heading::split`].
    pub fn is_heading(block: &str) -> bool {
        block.starts_with(Self::MARKER)
    }

    /// Splits a heading block into its level and trimmed text.
    ///
    /// # Errors
    /// [`ParseError::InvalidHeadingLevel`] if there are no `#` or more than six.
    pub fn split(block: &str) -> Result<(usize, &str), ParseError> {
        let level = block.chars().take_while(|c| *c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return Err(ParseError::InvalidHeadingLevel {
                level,
                block: block.to_string(),
            });
        }
        Ok((level, block[level..].trim()))
    }

    pub fn tag(level: usize) -> String {
        format!("h{level}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_heading_levels() {
        assert_eq!(Heading::split("# Title").unwrap(), (1, "Title"));
        assert_eq!(Heading::split("###   Spaced  ").unwrap(), (3, "Spaced"));
        assert_eq!(Heading::split("######six").unwrap(), (6, "six"));
    }

    #[test]
    fn seven_hashes_is_too_deep() {
        assert_eq!(
            Heading::split("####### Seven").unwrap_err(),
            ParseError::InvalidHeadingLevel {
                level: 7,
                block: "####### Seven".to_string()
            }
        );
    }

    #[test]
    fn no_hash_is_level_zero() {
        assert!(matches!(
            Heading::split("Title"),
            Err(ParseError::InvalidHeadingLevel { level: 0, .. })
        ));
    }
}
