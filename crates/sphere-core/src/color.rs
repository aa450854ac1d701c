use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("expected 6 hex digits, got {0:?}")]
    BadLength(String),
    #[error("invalid hex digit in {0:?}")]
    BadDigit(String),
}

/// Parse `#rrggbb` (leading `#` optional) into RGBA in `[0, 1]`, alpha 1.
pub fn parse_hex_color(s: &str) -> Result<[f32; 4], ColorError> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(ColorError::BadLength(s.to_string()));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map(|v| v as f32 / 255.0)
            .map_err(|_| ColorError::BadDigit(s.to_string()))
    };
    Ok([channel(0)?, channel(2)?, channel(4)?, 1.0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PALETTE;

    #[test]
    fn palette_entries_parse() {
        for c in PALETTE {
            assert!(parse_hex_color(c).is_ok(), "{c}");
        }
        let blue = parse_hex_color("#588DFF").unwrap();
        assert!((blue[0] - 0x58 as f32 / 255.0).abs() < 1e-6);
        assert!((blue[1] - 0x8D as f32 / 255.0).abs() < 1e-6);
        assert_eq!(blue[2], 1.0);
        assert_eq!(parse_hex_color("ffffff").unwrap(), [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn malformed_colors_are_rejected() {
        assert_eq!(
            parse_hex_color("#fff"),
            Err(ColorError::BadLength("#fff".into()))
        );
        assert_eq!(
            parse_hex_color("#gg0000"),
            Err(ColorError::BadDigit("#gg0000".into()))
        );
    }
}
