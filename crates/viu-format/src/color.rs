//! Hex color parsing and luminance math, used by the frontends to pick
//! readable text colors over project accent colors.

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Parses a 6-digit hex color, with or without the leading `#`.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let parse = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Rgb {
        r: parse(0..2)?,
        g: parse(2..4)?,
        b: parse(4..6)?,
    })
}

/// Renders an RGB triple as `#rrggbb`.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// True when the color's perceived luminance is above 0.5, meaning
/// dark text reads better over it. Unparseable colors count as light.
pub fn is_light_color(hex: &str) -> bool {
    let Some(rgb) = hex_to_rgb(hex) else {
        return true;
    };
    let luminance =
        (0.299 * f64::from(rgb.r) + 0.587 * f64::from(rgb.g) + 0.114 * f64::from(rgb.b)) / 255.0;
    luminance > 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parses_with_and_without_hash() {
        assert_eq!(hex_to_rgb("#3B82F6"), Some(Rgb { r: 59, g: 130, b: 246 }));
        assert_eq!(hex_to_rgb("3b82f6"), Some(Rgb { r: 59, g: 130, b: 246 }));
        assert_eq!(hex_to_rgb("#fff"), None);
        assert_eq!(hex_to_rgb("#GGGGGG"), None);
    }

    #[test]
    fn hex_rendering_round_trips() {
        let rgb = Rgb { r: 59, g: 130, b: 246 };
        assert_eq!(rgb_to_hex(rgb), "#3b82f6");
        assert_eq!(hex_to_rgb(&rgb_to_hex(rgb)), Some(rgb));
    }

    #[test]
    fn luminance_splits_light_from_dark() {
        assert!(is_light_color("#ffffff"));
        assert!(is_light_color("#fde047"));
        assert!(!is_light_color("#000000"));
        assert!(!is_light_color("#1e3a8a"));
        // unparseable defaults to light
        assert!(is_light_color("azul"));
    }
}
