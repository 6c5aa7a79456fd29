use std::str::FromStr;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Fixed qualitative palette
// ---------------------------------------------------------------------------

/// ColorBrewer "Set1", in slot order.
pub const SET1: [&str; 9] = [
    "#e41a1c", "#377eb8", "#4daf4a", "#984ea3", "#ff7f00", "#ffff33", "#a65628", "#f781bf",
    "#999999",
];

/// Named colours used by the single-colour charts.
pub fn named_color(name: &str) -> Color32 {
    match name {
        "blue" => Color32::from_rgb(0, 0, 255),
        "black" => Color32::BLACK,
        "white" => Color32::WHITE,
        other => hex_color(other).unwrap_or(Color32::GRAY),
    }
}

/// Parse `#rrggbb` into a colour.
pub fn hex_color(hex: &str) -> Option<Color32> {
    let rgb = Srgb::<u8>::from_str(hex).ok()?;
    Some(Color32::from_rgb(rgb.red, rgb.green, rgb.blue))
}

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Category → colour slot
// ---------------------------------------------------------------------------

/// Colours for an ordered list of categories.
///
/// The palette is Set1 truncated to the number of categories; the category
/// at position `i` takes slot `i % palette.len()`.
#[derive(Debug, Clone)]
pub struct CategoryColors {
    categories: Vec<String>,
    palette: Vec<Color32>,
}

impl CategoryColors {
    pub fn new(categories: &[String]) -> Self {
        let palette = SET1
            .iter()
            .take(categories.len())
            .filter_map(|hex| hex_color(hex))
            .collect();
        CategoryColors {
            categories: categories.to_vec(),
            palette,
        }
    }

    /// Palette slot of a category, `None` if it is not known.
    pub fn slot_of(&self, category: &str) -> Option<usize> {
        let index = self.categories.iter().position(|c| c == category)?;
        if self.palette.is_empty() {
            return None;
        }
        Some(index % self.palette.len())
    }

    pub fn color_for(&self, category: &str) -> Color32 {
        self.slot_of(category)
            .map(|slot| self.palette[slot])
            .unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn set1_parses() {
        assert_eq!(hex_color(SET1[0]), Some(Color32::from_rgb(0xe4, 0x1a, 0x1c)));
        assert!(SET1.iter().all(|h| hex_color(h).is_some()));
    }

    #[test]
    fn slots_follow_category_order() {
        let colors = CategoryColors::new(&names(&["neg", "pos"]));
        assert_eq!(colors.slot_of("neg"), Some(0));
        assert_eq!(colors.slot_of("pos"), Some(1));
        assert_eq!(colors.slot_of("neutral"), None);
        assert_eq!(colors.color_for("neg"), hex_color(SET1[0]).unwrap());
    }

    #[test]
    fn slots_wrap_past_palette_length() {
        let many: Vec<String> = (0..11).map(|i| format!("s{i}")).collect();
        let colors = CategoryColors::new(&many);
        assert_eq!(colors.slot_of("s8"), Some(8));
        assert_eq!(colors.slot_of("s9"), Some(0));
        assert_eq!(colors.slot_of("s10"), Some(1));
    }

    #[test]
    fn generated_palette_has_requested_length() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(7).len(), 7);
    }

    #[test]
    fn named_colors() {
        assert_eq!(named_color("blue"), Color32::from_rgb(0, 0, 255));
        assert_eq!(named_color("black"), Color32::BLACK);
    }
}
