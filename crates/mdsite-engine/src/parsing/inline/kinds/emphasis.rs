/// Bold text, `**like this**`.
pub struct Bold;

impl Bold {
    pub const DELIMITER: &'static str = "**";
}

/// Italic text, `*like this*`.
///
/// Shares its character with [`Bold`], so bold has to be split out first.
pub struct Italic;

impl Italic {
    pub const DELIMITER: &'static str = "*";
}
