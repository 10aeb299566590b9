use core::{fmt::Display, str::FromStr};

use image::Rgba;
use serde::{Deserialize, Serialize};

use crate::{GravatarError, Result};

/// Corner radius of the rounded-square styles.
pub const CORNER_RADIUS: f64 = 15.0;

/// Line width of the border drawn by the bordered styles.
pub const STROKE_LINE_WIDTH: f64 = 1.0;

/// The styling of the avatar's shape and border.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Style {
    /// A circle without a border.
    Circle,
    /// A rounded square without a border.
    RoundedSquare,
    /// A square without a border.
    #[default]
    Square,
    /// A circle with a border.
    BorderedCircle,
    /// A rounded square with a border.
    BorderedRoundedSquare,
    /// A square with a border.
    BorderedSquare,
}

/// The region of the avatar that stays visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClipShape {
    Circle,
    RoundedRect { corner_radius: f64 },
    Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrokeColor {
    /// Low-emphasis foreground color.
    Tertiary,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub line_width: f64,
    pub color: StrokeColor,
}

/// What a [`Style`] does to the avatar: a clip shape plus an optional
/// stroke following the same shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleSpec {
    pub clip: ClipShape,
    pub border: Option<Border>,
}

impl Style {
    pub const ALL: [Style; 6] = [
        Style::Circle,
        Style::RoundedSquare,
        Style::Square,
        Style::BorderedCircle,
        Style::BorderedRoundedSquare,
        Style::BorderedSquare,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Circle => "circle",
            Style::RoundedSquare => "roundedSquare",
            Style::Square => "square",
            Style::BorderedCircle => "borderedCircle",
            Style::BorderedRoundedSquare => "borderedRoundedSquare",
            Style::BorderedSquare => "borderedSquare",
        }
    }

    pub fn spec(&self) -> StyleSpec {
        let border = Border {
            line_width: STROKE_LINE_WIDTH,
            color: StrokeColor::Tertiary,
        };
        let rounded = ClipShape::RoundedRect {
            corner_radius: CORNER_RADIUS,
        };

        match self {
            Style::Circle => StyleSpec {
                clip: ClipShape::Circle,
                border: None,
            },
            Style::RoundedSquare => StyleSpec {
                clip: rounded,
                border: None,
            },
            Style::Square => StyleSpec {
                clip: ClipShape::Rect,
                border: None,
            },
            Style::BorderedCircle => StyleSpec {
                clip: ClipShape::Circle,
                border: Some(border),
            },
            Style::BorderedRoundedSquare => StyleSpec {
                clip: rounded,
                border: Some(border),
            },
            Style::BorderedSquare => StyleSpec {
                clip: ClipShape::Rect,
                border: Some(border),
            },
        }
    }

    pub fn is_bordered(&self) -> bool {
        self.spec().border.is_some()
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = GravatarError;

    fn from_str(s: &str) -> Result<Self> {
        Style::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| GravatarError::UnknownVariant {
                kind: "style",
                value: s.to_string(),
            })
    }
}

impl ClipShape {
    /// Signed distance from the point `(x, y)` to the edge of the shape
    /// filling a `width × height` box. Positive inside, negative outside.
    pub fn edge_distance(
        &self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> f64 {
        let to_sides = x.min(y).min(width - x).min(height - y);

        match *self {
            ClipShape::Rect => to_sides,
            ClipShape::Circle => {
                let radius = width.min(height) / 2.0;
                let (dx, dy) = (x - width / 2.0, y - height / 2.0);
                radius - dx.hypot(dy)
            }
            ClipShape::RoundedRect { corner_radius } => {
                let r = corner_radius.clamp(0.0, width.min(height) / 2.0);
                // Nearest corner centre, only relevant inside a corner square
                let cx = if x < r { r } else { width - r };
                let cy = if y < r { r } else { height - r };
                let in_corner =
                    (x < r || x > width - r) && (y < r || y > height - r);
                if in_corner {
                    r - (x - cx).hypot(y - cy)
                } else {
                    to_sides
                }
            }
        }
    }

    pub fn contains(&self, x: f64, y: f64, width: f64, height: f64) -> bool {
        self.edge_distance(x, y, width, height) >= 0.0
    }
}

impl StrokeColor {
    pub fn rgba(&self) -> Rgba<u8> {
        match self {
            // 60, 60, 67 at 30% opacity
            StrokeColor::Tertiary => Rgba([60, 60, 67, 77]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const ROUNDED: ClipShape = ClipShape::RoundedRect {
        corner_radius: 15.0,
    };

    #[rstest]
    #[case(Style::Circle, ClipShape::Circle, false)]
    #[case(Style::RoundedSquare, ROUNDED, false)]
    #[case(Style::Square, ClipShape::Rect, false)]
    #[case(Style::BorderedCircle, ClipShape::Circle, true)]
    #[case(Style::BorderedRoundedSquare, ROUNDED, true)]
    #[case(Style::BorderedSquare, ClipShape::Rect, true)]
    fn style_mapping(
        #[case] style: Style,
        #[case] clip: ClipShape,
        #[case] bordered: bool,
    ) {
        let spec = style.spec();
        assert_eq!(spec.clip, clip);
        assert_eq!(style.is_bordered(), bordered);
        if let Some(border) = spec.border {
            assert_eq!(border.line_width, 1.0);
            assert_eq!(border.color, StrokeColor::Tertiary);
        }
    }

    #[test]
    fn default_is_square() {
        assert_eq!(Style::default(), Style::Square);
    }

    #[test]
    fn tags_round_trip() {
        for style in Style::ALL {
            assert_eq!(style.to_string().parse::<Style>().unwrap(), style);
            assert_eq!(
                serde_json::to_string(&style).unwrap(),
                format!("\"{}\"", style.as_str())
            );
        }
        assert!("rounded_square".parse::<Style>().is_err());
    }

    #[test]
    fn circle_excludes_corners() {
        let circle = ClipShape::Circle;
        assert!(circle.contains(50.0, 50.0, 100.0, 100.0));
        assert!(circle.contains(50.0, 0.5, 100.0, 100.0));
        assert!(!circle.contains(0.5, 0.5, 100.0, 100.0));
        assert!(!circle.contains(99.5, 99.5, 100.0, 100.0));
    }

    #[test]
    fn rounded_rect_only_trims_corners() {
        let rounded = ClipShape::RoundedRect {
            corner_radius: CORNER_RADIUS,
        };
        assert!(!rounded.contains(0.5, 0.5, 80.0, 80.0));
        assert!(rounded.contains(15.0, 0.5, 80.0, 80.0));
        assert!(rounded.contains(0.5, 40.0, 80.0, 80.0));
        assert!(rounded.contains(75.0, 75.0, 80.0, 80.0));
        assert!(!rounded.contains(79.5, 79.5, 80.0, 80.0));
    }

    #[test]
    fn rect_keeps_everything() {
        let rect = ClipShape::Rect;
        for (x, y) in [(0.5, 0.5), (79.5, 0.5), (40.0, 40.0), (79.5, 79.5)] {
            assert!(rect.contains(x, y, 80.0, 80.0));
        }
        assert_eq!(rect.edge_distance(0.5, 40.0, 80.0, 80.0), 0.5);
    }
}
