//flowboard/src/color_utils.rs

// Category color mappings and hex parsing helpers.
// It intentionally has NO dependencies on ratatui or other UI crates so it
// can be used from non-UI code and tests.

use crate::model::Category;

/// Parse a hex color string like "#RRGGBB" or "RRGGBB" into u8 tuple.
/// Checked slicing: config values are user-supplied, so a non-ASCII
/// string must come back as `None` rather than panic on a char boundary.
pub fn parse_hex_to_u8(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 {
        return None;
    }
    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
    Some((r, g, b))
}

/// Returns the RGB color tuple for a given category.
/// Adapts to light/dark themes to ensure readability.
pub fn get_category_rgb(category: Category, is_dark_theme: bool) -> (f32, f32, f32) {
    if is_dark_theme {
        // Bright/Pastel colors for Dark Mode
        match category {
            Category::Urgent => (1.0, 0.2, 0.2),      // Red
            Category::Important => (1.0, 0.6, 0.2),   // Orange
            Category::Normal => (0.7, 0.75, 0.85),    // Light Steel Blue
            Category::Low => (0.6, 0.55, 0.65),       // Greyish Lavender
        }
    } else {
        // Darker/Saturated colors for Light Mode (White Background)
        match category {
            Category::Urgent => (0.8, 0.0, 0.0),    // Dark Red
            Category::Important => (0.9, 0.5, 0.0), // Dark Orange
            Category::Normal => (0.3, 0.4, 0.6),    // Navy Blue
            Category::Low => (0.5, 0.5, 0.5),       // Grey
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_accepts_rrggbb_with_or_without_hash() {
        assert_eq!(parse_hex_to_u8("#00ff7f"), Some((0, 255, 127)));
        assert_eq!(parse_hex_to_u8("00ff7f"), Some((0, 255, 127)));
        assert_eq!(parse_hex_to_u8("#FFFFFF"), Some((255, 255, 255)));
    }

    #[test]
    fn test_parse_hex_rejects_malformed_input() {
        assert_eq!(parse_hex_to_u8(""), None);
        assert_eq!(parse_hex_to_u8("#fff"), None);
        assert_eq!(parse_hex_to_u8("#zzzzzz"), None);
        // Multibyte garbage passes the length check but not the slicing.
        assert_eq!(parse_hex_to_u8("€€"), None);
    }
}
