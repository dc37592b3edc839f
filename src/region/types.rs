use serde::{Deserialize, Serialize};

/// One named region of the sheet, with optional corner cleanup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    /// Output file name stem (`<label>.png`). Labels are not checked for
    /// uniqueness; a later region with the same label overwrites the
    /// earlier output file.
    pub label: String,
    #[serde(flatten)]
    pub shape: Shape,
    /// Corners to paint over after cropping, applied in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub corners: Vec<CornerMask>,
}

impl Region {
    /// Region with an explicit crop box and no corner cleanup.
    pub fn rect(label: impl Into<String>, left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            label: label.into(),
            shape: Shape::Rect {
                left,
                top,
                right,
                bottom,
            },
            corners: Vec::new(),
        }
    }

    /// Region covering one cell of an even grid split.
    pub fn cell(label: impl Into<String>, row: u32, col: u32) -> Self {
        Self {
            label: label.into(),
            shape: Shape::Cell { row, col },
            corners: Vec::new(),
        }
    }

    /// Region of fixed size centered on a point.
    pub fn centered(
        label: impl Into<String>,
        center_x: u32,
        center_y: u32,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            label: label.into(),
            shape: Shape::Centered {
                center_x,
                center_y,
                width,
                height,
            },
            corners: Vec::new(),
        }
    }

    /// Add a corner cleanup mask (builder-style).
    pub fn with_corner(mut self, corner: Corner, size: Option<u32>) -> Self {
        self.corners.push(CornerMask { corner, size });
        self
    }
}

/// How a region's crop rectangle is specified.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    /// Hand-tuned crop box, used as-is. No bounds checking until crop time.
    Rect {
        left: u32,
        top: u32,
        right: u32,
        bottom: u32,
    },
    /// Cell (row, col) of an even grid split; cell size is derived from the
    /// sheet dimensions and the run's grid size by integer division.
    Cell { row: u32, col: u32 },
    /// Fixed-size box centered on a point, shifted inward (then clipped)
    /// to stay within the sheet.
    Centered {
        center_x: u32,
        center_y: u32,
        width: u32,
        height: u32,
    },
}

/// A triangular cleanup patch attached to one corner of a cropped region.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CornerMask {
    pub corner: Corner,
    /// Triangle leg length in pixels. Falls back to the run's default
    /// corner size when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rect_region() {
        let json = r#"{"label": "angry", "type": "rect",
                       "left": 25, "top": 5, "right": 365, "bottom": 240}"#;
        let region: Region = serde_json::from_str(json).unwrap();

        assert_eq!(region.label, "angry");
        assert!(region.corners.is_empty());
        match region.shape {
            Shape::Rect {
                left,
                top,
                right,
                bottom,
            } => {
                assert_eq!((left, top, right, bottom), (25, 5, 365, 240));
            }
            other => panic!("expected rect, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_cell_region() {
        let json = r#"{"label": "wave_hi", "type": "cell", "row": 0, "col": 1}"#;
        let region: Region = serde_json::from_str(json).unwrap();

        assert!(matches!(region.shape, Shape::Cell { row: 0, col: 1 }));
    }

    #[test]
    fn test_parse_centered_region_with_corners() {
        let json = r#"{"label": "laughing", "type": "centered",
                       "center_x": 920, "center_y": 395,
                       "width": 380, "height": 260,
                       "corners": [{"corner": "bottom-left"},
                                   {"corner": "bottom-right", "size": 50}]}"#;
        let region: Region = serde_json::from_str(json).unwrap();

        assert_eq!(region.corners.len(), 2);
        assert_eq!(region.corners[0].corner, Corner::BottomLeft);
        assert_eq!(region.corners[0].size, None);
        assert_eq!(region.corners[1].size, Some(50));
    }

    #[test]
    fn test_parse_unknown_shape_rejected() {
        let json = r#"{"label": "bad", "type": "oval", "left": 0}"#;
        assert!(serde_json::from_str::<Region>(json).is_err());
    }

    #[test]
    fn test_region_roundtrip() {
        let region =
            Region::rect("excited", 735, 5, 1100, 245).with_corner(Corner::BottomLeft, Some(70));
        let json = serde_json::to_string(&region).unwrap();
        let back: Region = serde_json::from_str(&json).unwrap();

        assert_eq!(back.label, "excited");
        assert_eq!(back.corners.len(), 1);
        assert_eq!(back.corners[0].size, Some(70));
    }
}
