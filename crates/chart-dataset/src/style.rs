// File: crates/chart-dataset/src/style.rs
// Summary: Value-label styling carried by a data set for its renderer (text color, font, formatter, axis).

use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// Which y-axis a data set is plotted against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisDependency {
    #[default]
    Left,
    Right,
}

/// Font request for value labels. `family: None` means the platform system font.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: Option<String>,
    pub size: f32,
}

impl FontSpec {
    pub fn system(size: f32) -> Self {
        Self { family: None, size }
    }
}

impl Default for FontSpec {
    fn default() -> Self { Self::system(7.0) }
}

/// Fixed-precision number formatting for value labels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueFormatter {
    pub fraction_digits: usize,
    pub prefix: String,
    pub suffix: String,
}

impl ValueFormatter {
    pub fn with_digits(fraction_digits: usize) -> Self {
        Self { fraction_digits, prefix: String::new(), suffix: String::new() }
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return format!("{}{}{}", self.prefix, value, self.suffix);
        }
        format!("{}{:.*}{}", self.prefix, self.fraction_digits, value, self.suffix)
    }
}

impl Default for ValueFormatter {
    fn default() -> Self { Self::with_digits(1) }
}

/// Rendering configuration passed through to whoever draws the value labels.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueStyle {
    pub text_color: Rgba,
    pub font: FontSpec,
    pub formatter: Option<ValueFormatter>,
    pub axis: AxisDependency,
}

impl Default for ValueStyle {
    fn default() -> Self {
        Self {
            text_color: Rgba::BLACK,
            font: FontSpec::default(),
            formatter: None,
            axis: AxisDependency::Left,
        }
    }
}

impl ValueStyle {
    /// Format `value` with the configured formatter, or plain `{}` when none is set.
    pub fn format_value(&self, value: f64) -> String {
        match &self.formatter {
            Some(f) => f.format(value),
            None => value.to_string(),
        }
    }
}
