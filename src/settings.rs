use crate::errors::{ReportError, Result};
use image::Rgb;
use serde::{Deserialize, Serialize};

/// Largest accepted label font magnification.
pub const MAX_LABEL_SCALE: u32 = 64;
/// Largest accepted separator stripe width.
pub const MAX_SEPARATOR_THICKNESS: u32 = 64;
/// Offsets and margins must fit a signed pixel coordinate.
pub const MAX_LABEL_OFFSET: u32 = i32::MAX as u32;

/// Colors, offsets and label texts used when laying out a report image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportStyle {
    // Colors (RGB)
    pub background_color: [u8; 3],
    pub bar_color: [u8; 3],
    pub separator_color: [u8; 3],
    pub label_color: [u8; 3],

    // Histogram panels
    pub separator_thickness: u32,

    // Labels
    /// Integer magnification of the 5x7 label font.
    pub label_scale: u32,
    /// Baseline distance below the bottom of the image row.
    pub label_offset: u32,
    /// Left margin inside each panel.
    pub label_margin: u32,
    /// Baseline distance above the bottom of the canvas.
    pub test_name_offset: u32,
    pub color_label: String,
    pub gray_label: String,
    pub equalized_label: String,
    pub test_name_prefix: String,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            background_color: [255, 255, 255],
            bar_color: [0, 0, 255],
            separator_color: [0, 255, 0],
            label_color: [255, 0, 0],

            separator_thickness: 3,

            label_scale: 4,
            label_offset: 50,
            label_margin: 10,
            test_name_offset: 20,
            color_label: "Color Image".to_string(),
            gray_label: "Gray Image".to_string(),
            equalized_label: "Equalized Image".to_string(),
            test_name_prefix: "Test: ".to_string(),
        }
    }
}

impl ReportStyle {
    pub fn from_json(json: &str) -> Result<Self> {
        let style: ReportStyle = serde_json::from_str(json)?;
        style.validate()?;
        log::debug!("loaded report style: {:?}", style);
        Ok(style)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_LABEL_SCALE).contains(&self.label_scale) {
            return Err(ReportError::InvalidStyle {
                message: format!("label_scale must be between 1 and {}", MAX_LABEL_SCALE),
            });
        }
        if !(1..=MAX_SEPARATOR_THICKNESS).contains(&self.separator_thickness) {
            return Err(ReportError::InvalidStyle {
                message: format!("separator_thickness must be between 1 and {}", MAX_SEPARATOR_THICKNESS),
            });
        }
        let offsets = [
            ("label_offset", self.label_offset),
            ("label_margin", self.label_margin),
            ("test_name_offset", self.test_name_offset),
        ];
        for (name, value) in offsets {
            if value > MAX_LABEL_OFFSET {
                return Err(ReportError::InvalidStyle {
                    message: format!("{} must be at most {}", name, MAX_LABEL_OFFSET),
                });
            }
        }
        Ok(())
    }

    pub fn background(&self) -> Rgb<u8> {
        Rgb(self.background_color)
    }

    pub fn bar(&self) -> Rgb<u8> {
        Rgb(self.bar_color)
    }

    pub fn separator(&self) -> Rgb<u8> {
        Rgb(self.separator_color)
    }

    pub fn label(&self) -> Rgb<u8> {
        Rgb(self.label_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let style = ReportStyle::from_json(r#"{ "label_scale": 2, "bar_color": [10, 20, 30] }"#).unwrap();

        assert_eq!(style.label_scale, 2);
        assert_eq!(style.bar(), Rgb([10, 20, 30]));
        assert_eq!(style.separator_thickness, 3);
        assert_eq!(style.equalized_label, "Equalized Image");
    }

    #[test]
    fn test_json_round_trip() {
        let style = ReportStyle {
            test_name_prefix: "Case ".to_string(),
            ..ReportStyle::default()
        };
        let json = style.to_json().unwrap();
        assert_eq!(ReportStyle::from_json(&json).unwrap(), style);
    }

    #[test]
    fn test_rejects_zero_scale() {
        let err = ReportStyle::from_json(r#"{ "label_scale": 0 }"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_STYLE");
    }

    #[test]
    fn test_rejects_oversized_values() {
        for json in [
            r#"{ "label_scale": 1000000000 }"#,
            r#"{ "separator_thickness": 65 }"#,
            r#"{ "label_offset": 4294967295 }"#,
            r#"{ "test_name_offset": 2147483648 }"#,
            r#"{ "label_margin": 3000000000 }"#,
        ] {
            let err = ReportStyle::from_json(json).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_STYLE", "accepted {}", json);
        }

        let edge = ReportStyle::from_json(r#"{ "label_scale": 64, "label_offset": 2147483647 }"#).unwrap();
        assert_eq!(edge.label_scale, MAX_LABEL_SCALE);
    }

    #[test]
    fn test_malformed_json() {
        let err = ReportStyle::from_json("{ not json").unwrap_err();
        assert_eq!(err.error_code(), "JSON_ERROR");
        assert!(err.user_message().contains("malformed"));
    }
}
