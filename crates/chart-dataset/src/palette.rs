// File: crates/chart-dataset/src/palette.rs
// Summary: Named color templates a data set can adopt as its palette.

use crate::color::Rgba;

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub name: &'static str,
    pub colors: Vec<Rgba>,
}

impl Palette {
    /// Single light-cyan color; what a new data set starts with.
    pub fn default_palette() -> Self {
        Self { name: "default", colors: vec![Rgba::default()] }
    }

    pub fn liberty() -> Self {
        Self {
            name: "liberty",
            colors: vec![
                Rgba::from_rgb(207, 248, 246),
                Rgba::from_rgb(148, 212, 212),
                Rgba::from_rgb(136, 180, 187),
                Rgba::from_rgb(118, 174, 175),
                Rgba::from_rgb(42, 109, 130),
            ],
        }
    }

    pub fn joyful() -> Self {
        Self {
            name: "joyful",
            colors: vec![
                Rgba::from_rgb(217, 80, 138),
                Rgba::from_rgb(254, 149, 7),
                Rgba::from_rgb(254, 247, 120),
                Rgba::from_rgb(106, 167, 134),
                Rgba::from_rgb(53, 194, 209),
            ],
        }
    }

    pub fn pastel() -> Self {
        Self {
            name: "pastel",
            colors: vec![
                Rgba::from_rgb(64, 89, 128),
                Rgba::from_rgb(149, 165, 124),
                Rgba::from_rgb(217, 184, 162),
                Rgba::from_rgb(191, 134, 134),
                Rgba::from_rgb(179, 48, 80),
            ],
        }
    }

    pub fn colorful() -> Self {
        Self {
            name: "colorful",
            colors: vec![
                Rgba::from_rgb(193, 37, 82),
                Rgba::from_rgb(255, 102, 0),
                Rgba::from_rgb(245, 199, 0),
                Rgba::from_rgb(106, 150, 31),
                Rgba::from_rgb(179, 100, 53),
            ],
        }
    }

    pub fn vordiplom() -> Self {
        Self {
            name: "vordiplom",
            colors: vec![
                Rgba::from_rgb(192, 255, 140),
                Rgba::from_rgb(255, 247, 140),
                Rgba::from_rgb(255, 208, 140),
                Rgba::from_rgb(140, 234, 255),
                Rgba::from_rgb(255, 140, 157),
            ],
        }
    }

    pub fn len(&self) -> usize { self.colors.len() }

    pub fn is_empty(&self) -> bool { self.colors.is_empty() }
}

impl Default for Palette {
    fn default() -> Self { Self::default_palette() }
}

/// Return a list of built-in palette presets.
pub fn presets() -> Vec<Palette> {
    vec![
        Palette::default_palette(),
        Palette::liberty(),
        Palette::joyful(),
        Palette::pastel(),
        Palette::colorful(),
        Palette::vordiplom(),
    ]
}

/// Find a palette by its `name`, falling back to the default palette.
pub fn find(name: &str) -> Palette {
    for p in presets() { if p.name.eq_ignore_ascii_case(name) { return p; } }
    Palette::default_palette()
}
