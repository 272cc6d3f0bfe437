use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::{Color, Rgb};

/// Identity of a renderer inside a document. Assigned by the document,
/// monotonically, never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct RendererId(pub u64);

impl fmt::Display for RendererId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RendererKind {
    Line,
    Scatter,
    Span,
    Box,
}

impl RendererKind {
    pub fn label(&self) -> &'static str {
        match self {
            RendererKind::Line => "Line",
            RendererKind::Scatter => "Scatter",
            RendererKind::Span => "Span",
            RendererKind::Box => "Box",
        }
    }
}

impl fmt::Display for RendererKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Marker glyphs available to scatter series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerShape {
    Circle,
    Diamond,
    Square,
    Cross,
    Plus,
    Up,
    Down,
    Left,
    Right,
    Asterisk,
}

impl MarkerShape {
    pub const ALL: [MarkerShape; 10] = [
        MarkerShape::Circle,
        MarkerShape::Diamond,
        MarkerShape::Square,
        MarkerShape::Cross,
        MarkerShape::Plus,
        MarkerShape::Up,
        MarkerShape::Down,
        MarkerShape::Left,
        MarkerShape::Right,
        MarkerShape::Asterisk,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MarkerShape::Circle => "circle",
            MarkerShape::Diamond => "diamond",
            MarkerShape::Square => "square",
            MarkerShape::Cross => "cross",
            MarkerShape::Plus => "plus",
            MarkerShape::Up => "up",
            MarkerShape::Down => "down",
            MarkerShape::Left => "left",
            MarkerShape::Right => "right",
            MarkerShape::Asterisk => "asterisk",
        }
    }
}

impl fmt::Display for MarkerShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Orientation of a span guide line: `Height` spans the plot vertically at
/// x = location, `Width` spans it horizontally at y = location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanDimension {
    Height,
    Width,
}

impl SpanDimension {
    pub const ALL: [SpanDimension; 2] = [SpanDimension::Height, SpanDimension::Width];

    pub fn label(&self) -> &'static str {
        match self {
            SpanDimension::Height => "height",
            SpanDimension::Width => "width",
        }
    }
}

impl fmt::Display for SpanDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A polyline through a snapshot of (x, y) points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineGlyph {
    pub points: Vec<[f64; 2]>,
    pub line_color: Color,
    pub line_width: f64,
    pub line_alpha: f64,
}

impl LineGlyph {
    pub fn new(points: Vec<[f64; 2]>, color: Color) -> Self {
        Self {
            points,
            line_color: color,
            line_width: 2.0,
            line_alpha: 1.0,
        }
    }
}

/// Markers at a snapshot of (x, y) points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScatterGlyph {
    pub points: Vec<[f64; 2]>,
    pub marker: MarkerShape,
    pub size: f64,
    pub fill_color: Color,
    pub fill_alpha: f64,
    pub line_color: Color,
    pub line_width: f64,
    pub line_alpha: f64,
}

impl ScatterGlyph {
    pub fn new(points: Vec<[f64; 2]>, color: Color) -> Self {
        Self {
            points,
            marker: MarkerShape::Circle,
            size: 4.0,
            fill_color: color,
            fill_alpha: 1.0,
            line_color: color,
            line_width: 1.0,
            line_alpha: 1.0,
        }
    }
}

/// A guide line across the full extent of the plot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpanAnnotation {
    pub location: f64,
    pub dimension: SpanDimension,
    pub line_color: Color,
    pub line_width: f64,
    pub line_alpha: f64,
}

impl Default for SpanAnnotation {
    fn default() -> Self {
        Self {
            location: 0.0,
            dimension: SpanDimension::Height,
            line_color: Color::BLACK,
            line_width: 1.0,
            line_alpha: 1.0,
        }
    }
}

/// A shaded rectangular region. Unset edges extend to the plot bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxAnnotation {
    #[serde(default)]
    pub left: Option<f64>,
    #[serde(default)]
    pub right: Option<f64>,
    #[serde(default)]
    pub top: Option<f64>,
    #[serde(default)]
    pub bottom: Option<f64>,
    pub fill_color: Color,
    pub fill_alpha: f64,
    pub line_color: Color,
    pub line_width: f64,
    pub line_alpha: f64,
}

impl Default for BoxAnnotation {
    fn default() -> Self {
        Self {
            left: None,
            right: None,
            top: None,
            bottom: None,
            fill_color: Color::Custom(Rgb {
                r: 0xff,
                g: 0xf9,
                b: 0xba,
            }),
            fill_alpha: 0.4,
            line_color: Color::Custom(Rgb {
                r: 0xcc,
                g: 0xcc,
                b: 0xcc,
            }),
            line_width: 1.0,
            line_alpha: 0.3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RendererShape {
    Line(LineGlyph),
    Scatter(ScatterGlyph),
    Span(SpanAnnotation),
    Box(BoxAnnotation),
}

impl RendererShape {
    pub fn kind(&self) -> RendererKind {
        match self {
            RendererShape::Line(_) => RendererKind::Line,
            RendererShape::Scatter(_) => RendererKind::Scatter,
            RendererShape::Span(_) => RendererKind::Span,
            RendererShape::Box(_) => RendererKind::Box,
        }
    }
}

/// A drawable element of the document: identity, visibility flag and shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Renderer {
    pub id: RendererId,
    pub visible: bool,
    pub shape: RendererShape,
}

impl Renderer {
    pub fn kind(&self) -> RendererKind {
        self.shape.kind()
    }
}
