//! Text renderings of the answer register for a front-end to show.

use crate::config::DisplayConfig;
use crate::CalcError;

/// First line of a rendering whose last input failed.
pub const INVALID_INPUT_NOTICE: &str = "Last input was invalid";

pub fn decimal(value: i64) -> String {
    format!("Decimal: {}", value)
}

/// The same 64 bits read as an unsigned integer.
pub fn unsigned(value: i64) -> String {
    format!("Unsigned Decimal: {}", value as u64)
}

pub fn hex(value: i64) -> String {
    format!("Hex: {:x}", value as u64)
}

/// The character with this code point. `\n` and `\r` are spelled out; other
/// control characters and values that are not a Unicode scalar render empty.
pub fn ascii(value: i64) -> String {
    let glyph = match value {
        10 => "\\n".to_string(),
        13 => "\\r".to_string(),
        _ => u32::try_from(value)
            .ok()
            .and_then(char::from_u32)
            .filter(|c| !c.is_control())
            .map(String::from)
            .unwrap_or_default(),
    };
    format!("ASCII: {}", glyph)
}

/// A `Binary:` header followed by four rows of 16 bits, most significant row
/// first. Each row is labelled with the bit count up to and including it and
/// groups its bits in nibbles.
pub fn binary_rows(value: i64) -> Vec<String> {
    let bits = value as u64;
    let mut rows = vec!["Binary:".to_string()];
    for row in 0..4 {
        let top = 64 - 16 * row;
        let nibbles: Vec<String> = (0..4)
            .map(|nibble| {
                (0..4)
                    .map(|bit| ((bits >> (top - 1 - 4 * nibble - bit)) & 1).to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        rows.push(format!("{}: {}", top, nibbles.join("  ")));
    }
    rows
}

/// All renderings enabled in `config`, in display order. When the last input
/// failed, a notice comes first and `value` is the answer that was kept.
pub fn render(
    value: i64,
    last_error: Option<&CalcError>,
    config: &DisplayConfig,
) -> Vec<String> {
    let mut lines = Vec::new();
    if last_error.is_some() {
        lines.push(INVALID_INPUT_NOTICE.to_string());
    }
    if config.ascii {
        lines.push(ascii(value));
    }
    if config.decimal {
        lines.push(decimal(value));
    }
    if config.unsigned {
        lines.push(unsigned(value));
    }
    if config.hex {
        lines.push(hex(value));
    }
    if config.binary {
        lines.extend(binary_rows(value));
    }
    lines
}
