//! Colors given as six hex digits (e.g. label colors returned by the API).
//!
//! With the `native-color` feature the hex text is parsed into RGB channels in
//! the unit range. Without it the color keeps only the original text, and two
//! colors are equal when their hex strings are.

use std::fmt;
use std::str::FromStr;

/// Errors from the checked [`FromStr`] path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The input was not exactly six characters long.
    InvalidLength(usize),
    /// The input contained something other than hex digits.
    InvalidDigit(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::InvalidLength(len) => {
                write!(f, "Expected 6 hex digits, got {} characters", len)
            }
            ColorError::InvalidDigit(hex) => write!(f, "Invalid hex color: {}", hex),
        }
    }
}

impl std::error::Error for ColorError {}

/// Parses exactly six hex digits into a 24-bit value.
fn parse_rgb(hex: &str) -> Result<u32, ColorError> {
    if hex.len() != 6 {
        return Err(ColorError::InvalidLength(hex.len()));
    }
    // from_str_radix would accept a leading '+'
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidDigit(hex.to_string()));
    }
    u32::from_str_radix(hex, 16).map_err(|_| ColorError::InvalidDigit(hex.to_string()))
}

#[cfg(feature = "native-color")]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
}

#[cfg(feature = "native-color")]
impl Color {
    /// Builds a fully opaque color from six hex digits such as `"FF8000"`.
    ///
    /// # Panics
    ///
    /// Panics unless `hex` is exactly six hex digits. Use [`str::parse`] for
    /// input that has not been validated.
    pub fn from_hex(hex: &str) -> Self {
        match Self::from_str(hex) {
            Ok(color) => color,
            Err(e) => panic!("Color::from_hex precondition violated: {}", e),
        }
    }

    fn from_rgb(rgb: u32) -> Self {
        let channel = |shift: u32| f64::from((rgb >> shift) & 0xff) / 255.0;
        Self {
            red: channel(16),
            green: channel(8),
            blue: channel(0),
            alpha: 1.0,
        }
    }

    pub fn red(&self) -> f64 {
        self.red
    }

    pub fn green(&self) -> f64 {
        self.green
    }

    pub fn blue(&self) -> f64 {
        self.blue
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

#[cfg(feature = "native-color")]
impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rgb(s).map(Self::from_rgb)
    }
}

#[cfg(feature = "native-color")]
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({:.3}, {:.3}, {:.3}, {:.1})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

#[cfg(not(feature = "native-color"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    hex: String,
}

#[cfg(not(feature = "native-color"))]
impl Color {
    /// Builds a color that remembers the given hex text.
    ///
    /// # Panics
    ///
    /// Panics unless `hex` is exactly six hex digits.
    pub fn from_hex(hex: &str) -> Self {
        match Self::from_str(hex) {
            Ok(color) => color,
            Err(e) => panic!("Color::from_hex precondition violated: {}", e),
        }
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }
}

#[cfg(not(feature = "native-color"))]
impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rgb(s)?;
        Ok(Self { hex: s.to_string() })
    }
}

#[cfg(not(feature = "native-color"))]
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb() {
        assert_eq!(parse_rgb("FF8000").unwrap(), 0xFF8000);
        assert_eq!(parse_rgb("00ff7f").unwrap(), 0x00FF7F);
    }

    #[test]
    fn test_parse_rgb_invalid_length() {
        assert_eq!(parse_rgb("FFF"), Err(ColorError::InvalidLength(3)));
        assert_eq!(parse_rgb("FF80001"), Err(ColorError::InvalidLength(7)));
        assert_eq!(parse_rgb(""), Err(ColorError::InvalidLength(0)));
    }

    #[test]
    fn test_parse_rgb_invalid_digit() {
        assert!(matches!(parse_rgb("GG0000"), Err(ColorError::InvalidDigit(_))));
        assert!(matches!(parse_rgb("+FFFFF"), Err(ColorError::InvalidDigit(_))));
        assert!(matches!(parse_rgb(" FFFFF"), Err(ColorError::InvalidDigit(_))));
    }

    #[test]
    fn test_color_error_display() {
        assert!(ColorError::InvalidLength(3).to_string().contains("3"));
        assert!(
            ColorError::InvalidDigit("zzzzzz".into())
                .to_string()
                .contains("zzzzzz")
        );
    }

    #[test]
    #[should_panic(expected = "precondition")]
    fn test_from_hex_too_short_panics() {
        Color::from_hex("FFF");
    }

    #[test]
    #[should_panic(expected = "precondition")]
    fn test_from_hex_too_long_panics() {
        Color::from_hex("FF80001");
    }

    #[cfg(feature = "native-color")]
    #[test]
    fn test_from_hex_channels() {
        let color = Color::from_hex("FF8000");
        assert_eq!(color.red(), 1.0);
        assert_eq!(color.green(), 128.0 / 255.0);
        assert!((color.green() - 0.502).abs() < 0.001);
        assert_eq!(color.blue(), 0.0);
        assert_eq!(color.alpha(), 1.0);
    }

    #[cfg(feature = "native-color")]
    #[test]
    fn test_from_hex_case_insensitive() {
        assert_eq!(Color::from_hex("abcdef"), Color::from_hex("ABCDEF"));
    }

    #[cfg(feature = "native-color")]
    #[test]
    fn test_parse_checked() {
        let color: Color = "000000".parse().unwrap();
        assert_eq!(color.red(), 0.0);
        assert_eq!(color.alpha(), 1.0);
        assert!("12345".parse::<Color>().is_err());
    }

    #[cfg(not(feature = "native-color"))]
    #[test]
    fn test_from_hex_keeps_text() {
        let color = Color::from_hex("FF8000");
        assert_eq!(color.hex(), "FF8000");
    }

    #[cfg(not(feature = "native-color"))]
    #[test]
    fn test_equality_is_textual() {
        assert_eq!(Color::from_hex("ff8000"), Color::from_hex("ff8000"));
        assert_ne!(Color::from_hex("ff8000"), Color::from_hex("FF8000"));
    }
}
