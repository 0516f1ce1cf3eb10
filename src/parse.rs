//! Text representation of RGB colors as `#RRGGBB` hex strings.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

use crate::Rgb;

/// Errors produced when parsing a color from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// The input was not 6 hex digits long (after an optional `#` prefix).
    #[error("expected 6 hex digits, found {0}")]
    InvalidLength(usize),
    /// The input contained a character that is not a hex digit.
    #[error("invalid hex digit")]
    InvalidDigit(#[from] ParseIntError),
}

/// Parse a color from `RRGGBB` hex digits with an optional `#` prefix.
impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 {
            return Err(ParseColorError::InvalidLength(digits.len()));
        }
        let hex = u32::from_str_radix(digits, 16)?;
        Ok(Self::from_hex(hex))
    }
}

/// Format the color as `#rrggbb` from its 8-bit channel values.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.to_bytes();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_prefix() {
        let c: Rgb = "#ff8000".parse().unwrap();
        assert_eq!(c.to_bytes(), (255, 128, 0));

        let c: Rgb = "FF8000".parse().unwrap();
        assert_eq!(c.to_bytes(), (255, 128, 0));
    }

    #[test]
    fn display_round_trips() {
        let c = Rgb::from_hex(0x123456);
        assert_eq!(c.to_string(), "#123456");
        assert_eq!(c.to_string().parse::<Rgb>().unwrap(), c);
    }

    #[test]
    fn rejects_wrong_lengths() {
        assert_eq!(
            "#fff".parse::<Rgb>(),
            Err(ParseColorError::InvalidLength(3))
        );
        assert_eq!(
            "ff800000".parse::<Rgb>(),
            Err(ParseColorError::InvalidLength(8))
        );
        assert_eq!("".parse::<Rgb>(), Err(ParseColorError::InvalidLength(0)));
    }

    #[test]
    fn rejects_non_hex_digits() {
        assert!(matches!(
            "zzzzzz".parse::<Rgb>(),
            Err(ParseColorError::InvalidDigit(_))
        ));
    }
}
