//! Chart color palette.

pub const COLOR_1: &str = "#6366f1";
pub const COLOR_2: &str = "#3b82f6";
pub const COLOR_3: &str = "#10b981";
pub const COLOR_4: &str = "#f59e0b";
pub const COLOR_5: &str = "#ef4444";
pub const COLOR_6: &str = "#8b5cf6";
pub const COLOR_7: &str = "#06b6d4";

pub const COLOR_1_LIGHT: &str = "#e0e7ff";
pub const COLOR_2_LIGHT: &str = "#dbeafe";
pub const COLOR_3_LIGHT: &str = "#d1fae5";
pub const COLOR_4_LIGHT: &str = "#fef3c7";
pub const COLOR_5_LIGHT: &str = "#fee2e2";
pub const COLOR_6_LIGHT: &str = "#f3e8ff";
pub const COLOR_7_LIGHT: &str = "#cffafe";

/// Series colors, in the order charts assign them.
pub const COLORS: [&str; 7] = [COLOR_1, COLOR_2, COLOR_3, COLOR_4, COLOR_5, COLOR_6, COLOR_7];

/// Light tints matching `COLORS` index for index (area fills, badges).
pub const COLORS_LIGHT: [&str; 7] = [
    COLOR_1_LIGHT,
    COLOR_2_LIGHT,
    COLOR_3_LIGHT,
    COLOR_4_LIGHT,
    COLOR_5_LIGHT,
    COLOR_6_LIGHT,
    COLOR_7_LIGHT,
];

/// Series color for the `index`-th series, wrapping past the end.
pub fn chart_color(index: usize) -> &'static str {
    COLORS[index % COLORS.len()]
}

/// Light tint for the `index`-th series, wrapping past the end.
pub fn chart_color_light(index: usize) -> &'static str {
    COLORS_LIGHT[index % COLORS_LIGHT.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_palettes_are_valid_hex() {
        for color in COLORS.iter().chain(COLORS_LIGHT.iter()) {
            assert!(color.parse::<Rgb>().is_ok(), "{} is not hex", color);
        }
    }

    #[test]
    fn test_chart_color_wraps() {
        assert_eq!(chart_color(0), COLOR_1);
        assert_eq!(chart_color(6), COLOR_7);
        assert_eq!(chart_color(7), COLOR_1);
        assert_eq!(chart_color_light(9), COLOR_3_LIGHT);
    }
}
