//! Built-in Tailwind color scales backing theme token resolution.

use crate::error::VistaError;

/// Shade levels every scale defines, lightest first.
pub const LEVELS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

pub const WHITE: &str = "#ffffff";

/// A named color scale with one hex value per entry of [`LEVELS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorScale {
    pub name: &'static str,
    pub shades: [&'static str; 10],
}

impl ColorScale {
    /// Hex value for a shade level, `None` if the level is not in [`LEVELS`].
    pub fn shade(&self, level: u16) -> Option<&'static str> {
        LEVELS
            .iter()
            .position(|&l| l == level)
            .map(|i| self.shades[i])
    }
}

pub const GRAY: ColorScale = ColorScale {
    name: "gray",
    shades: [
        "#f9fafb", "#f3f4f6", "#e5e7eb", "#d1d5db", "#9ca3af", "#6b7280", "#4b5563", "#374151",
        "#1f2937", "#111827",
    ],
};

pub const RED: ColorScale = ColorScale {
    name: "red",
    shades: [
        "#fef2f2", "#fee2e2", "#fecaca", "#fca5a5", "#f87171", "#ef4444", "#dc2626", "#b91c1c",
        "#991b1b", "#7f1d1d",
    ],
};

pub const INDIGO: ColorScale = ColorScale {
    name: "indigo",
    shades: [
        "#eef2ff", "#e0e7ff", "#c7d2fe", "#a5b4fc", "#818cf8", "#6366f1", "#4f46e5", "#4338ca",
        "#3730a3", "#312e81",
    ],
};

pub const BLUE: ColorScale = ColorScale {
    name: "blue",
    shades: [
        "#eff6ff", "#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6", "#2563eb", "#1d4ed8",
        "#1e40af", "#1e3a8a",
    ],
};

pub const EMERALD: ColorScale = ColorScale {
    name: "emerald",
    shades: [
        "#ecfdf5", "#d1fae5", "#a7f3d0", "#6ee7b7", "#34d399", "#10b981", "#059669", "#047857",
        "#065f46", "#064e3b",
    ],
};

pub const AMBER: ColorScale = ColorScale {
    name: "amber",
    shades: [
        "#fffbeb", "#fef3c7", "#fde68a", "#fcd34d", "#fbbf24", "#f59e0b", "#d97706", "#b45309",
        "#92400e", "#78350f",
    ],
};

pub const VIOLET: ColorScale = ColorScale {
    name: "violet",
    shades: [
        "#f5f3ff", "#ede9fe", "#ddd6fe", "#c4b5fd", "#a78bfa", "#8b5cf6", "#7c3aed", "#6d28d9",
        "#5b21b6", "#4c1d95",
    ],
};

pub const PURPLE: ColorScale = ColorScale {
    name: "purple",
    shades: [
        "#faf5ff", "#f3e8ff", "#e9d5ff", "#d8b4fe", "#c084fc", "#a855f7", "#9333ea", "#7e22ce",
        "#6b21a8", "#581c87",
    ],
};

pub const CYAN: ColorScale = ColorScale {
    name: "cyan",
    shades: [
        "#ecfeff", "#cffafe", "#a5f3fc", "#67e8f9", "#22d3ee", "#06b6d4", "#0891b2", "#0e7490",
        "#155e75", "#164e63",
    ],
};

pub const SCALES: [ColorScale; 9] = [GRAY, RED, INDIGO, BLUE, EMERALD, AMBER, VIOLET, PURPLE, CYAN];

/// Find a scale by its Tailwind name.
pub fn scale(name: &str) -> Option<&'static ColorScale> {
    SCALES.iter().find(|s| s.name == name)
}

/// Hex value of `{color}-{level}`, e.g. `indigo-600`.
pub fn shade(color: &str, level: u16) -> Result<&'static str, VistaError> {
    let scale = scale(color).ok_or_else(|| VistaError::UnknownColor(color.to_string()))?;
    scale.shade(level).ok_or(VistaError::UnknownLevel {
        color: color.to_string(),
        level,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_shade_lookup() {
        assert_eq!(shade("indigo", 600).unwrap(), "#4f46e5");
        assert_eq!(shade("gray", 50).unwrap(), "#f9fafb");
        assert_eq!(shade("red", 500).unwrap(), "#ef4444");
    }

    #[test]
    fn test_unknown_color_and_level() {
        assert_eq!(
            shade("mauve", 500),
            Err(VistaError::UnknownColor("mauve".to_string()))
        );
        assert_eq!(
            shade("blue", 550),
            Err(VistaError::UnknownLevel {
                color: "blue".to_string(),
                level: 550
            })
        );
    }

    #[test]
    fn test_all_shades_are_hex() {
        for scale in SCALES.iter() {
            for hex in scale.shades.iter() {
                assert!(hex.parse::<Rgb>().is_ok(), "{}: {}", scale.name, hex);
            }
        }
    }
}
