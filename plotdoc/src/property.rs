use crate::color::Color;
use crate::renderer::{
    BoxAnnotation, LineGlyph, MarkerShape, Renderer, RendererKind, RendererShape, ScatterGlyph,
    SpanAnnotation,
};

/// Current value of a stylable renderer property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Float(f64),
    Color(Color),
    Marker(MarkerShape),
    Text(String),
    Bool(bool),
}

impl PropertyValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Float(_) => "float",
            PropertyValue::Color(_) => "color",
            PropertyValue::Marker(_) => "marker",
            PropertyValue::Text(_) => "text",
            PropertyValue::Bool(_) => "bool",
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PropertyError {
    #[error("unknown property: {0}")]
    Unknown(String),
    #[error("property {property} expects {expected}, got {found}")]
    WrongType {
        property: String,
        expected: &'static str,
        found: &'static str,
    },
}

pub const LINE_PROPERTIES: &[&str] = &["line_alpha", "line_color", "line_width", "visible"];

pub const SCATTER_PROPERTIES: &[&str] = &[
    "fill_alpha",
    "fill_color",
    "line_alpha",
    "line_color",
    "line_width",
    "marker",
    "size",
    "visible",
];

pub const SPAN_PROPERTIES: &[&str] = &[
    "line_alpha",
    "line_color",
    "line_width",
    "location",
    "visible",
];

pub const BOX_PROPERTIES: &[&str] = &[
    "bottom",
    "fill_alpha",
    "fill_color",
    "left",
    "line_alpha",
    "line_color",
    "line_width",
    "right",
    "top",
    "visible",
];

/// All introspectable property names of a renderer kind, sorted.
pub fn property_names(kind: RendererKind) -> &'static [&'static str] {
    match kind {
        RendererKind::Line => LINE_PROPERTIES,
        RendererKind::Scatter => SCATTER_PROPERTIES,
        RendererKind::Span => SPAN_PROPERTIES,
        RendererKind::Box => BOX_PROPERTIES,
    }
}

fn float_value(value: PropertyValue, property: &str) -> Result<f64, PropertyError> {
    match value {
        PropertyValue::Float(v) => Ok(v),
        other => Err(PropertyError::WrongType {
            property: property.to_string(),
            expected: "float",
            found: other.type_name(),
        }),
    }
}

fn color_value(value: PropertyValue, property: &str) -> Result<Color, PropertyError> {
    match value {
        PropertyValue::Color(c) => Ok(c),
        other => Err(PropertyError::WrongType {
            property: property.to_string(),
            expected: "color",
            found: other.type_name(),
        }),
    }
}

fn marker_value(value: PropertyValue, property: &str) -> Result<MarkerShape, PropertyError> {
    match value {
        PropertyValue::Marker(m) => Ok(m),
        other => Err(PropertyError::WrongType {
            property: property.to_string(),
            expected: "marker",
            found: other.type_name(),
        }),
    }
}

fn bool_value(value: PropertyValue, property: &str) -> Result<bool, PropertyError> {
    match value {
        PropertyValue::Bool(b) => Ok(b),
        other => Err(PropertyError::WrongType {
            property: property.to_string(),
            expected: "bool",
            found: other.type_name(),
        }),
    }
}

impl Renderer {
    pub fn property_names(&self) -> &'static [&'static str] {
        property_names(self.kind())
    }

    /// Current value of a property, or `None` when the name is unknown for
    /// this kind or the property is unset (box edges default to unset).
    pub fn property(&self, name: &str) -> Option<PropertyValue> {
        if name == "visible" {
            return Some(PropertyValue::Bool(self.visible));
        }
        match &self.shape {
            RendererShape::Line(line) => line_property(line, name),
            RendererShape::Scatter(scatter) => scatter_property(scatter, name),
            RendererShape::Span(span) => span_property(span, name),
            RendererShape::Box(shape) => box_property(shape, name),
        }
    }

    pub fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<(), PropertyError> {
        if name == "visible" {
            self.visible = bool_value(value, name)?;
            return Ok(());
        }
        match &mut self.shape {
            RendererShape::Line(line) => set_line_property(line, name, value),
            RendererShape::Scatter(scatter) => set_scatter_property(scatter, name, value),
            RendererShape::Span(span) => set_span_property(span, name, value),
            RendererShape::Box(shape) => set_box_property(shape, name, value),
        }
    }
}

fn line_property(line: &LineGlyph, name: &str) -> Option<PropertyValue> {
    match name {
        "line_alpha" => Some(PropertyValue::Float(line.line_alpha)),
        "line_color" => Some(PropertyValue::Color(line.line_color)),
        "line_width" => Some(PropertyValue::Float(line.line_width)),
        _ => None,
    }
}

fn set_line_property(
    line: &mut LineGlyph,
    name: &str,
    value: PropertyValue,
) -> Result<(), PropertyError> {
    match name {
        "line_alpha" => line.line_alpha = float_value(value, name)?,
        "line_color" => line.line_color = color_value(value, name)?,
        "line_width" => line.line_width = float_value(value, name)?,
        _ => return Err(PropertyError::Unknown(name.to_string())),
    }
    Ok(())
}

fn scatter_property(scatter: &ScatterGlyph, name: &str) -> Option<PropertyValue> {
    match name {
        "fill_alpha" => Some(PropertyValue::Float(scatter.fill_alpha)),
        "fill_color" => Some(PropertyValue::Color(scatter.fill_color)),
        "line_alpha" => Some(PropertyValue::Float(scatter.line_alpha)),
        "line_color" => Some(PropertyValue::Color(scatter.line_color)),
        "line_width" => Some(PropertyValue::Float(scatter.line_width)),
        "marker" => Some(PropertyValue::Marker(scatter.marker)),
        "size" => Some(PropertyValue::Float(scatter.size)),
        _ => None,
    }
}

fn set_scatter_property(
    scatter: &mut ScatterGlyph,
    name: &str,
    value: PropertyValue,
) -> Result<(), PropertyError> {
    match name {
        "fill_alpha" => scatter.fill_alpha = float_value(value, name)?,
        "fill_color" => scatter.fill_color = color_value(value, name)?,
        "line_alpha" => scatter.line_alpha = float_value(value, name)?,
        "line_color" => scatter.line_color = color_value(value, name)?,
        "line_width" => scatter.line_width = float_value(value, name)?,
        "marker" => scatter.marker = marker_value(value, name)?,
        "size" => scatter.size = float_value(value, name)?,
        _ => return Err(PropertyError::Unknown(name.to_string())),
    }
    Ok(())
}

fn span_property(span: &SpanAnnotation, name: &str) -> Option<PropertyValue> {
    match name {
        "line_alpha" => Some(PropertyValue::Float(span.line_alpha)),
        "line_color" => Some(PropertyValue::Color(span.line_color)),
        "line_width" => Some(PropertyValue::Float(span.line_width)),
        "location" => Some(PropertyValue::Float(span.location)),
        _ => None,
    }
}

fn set_span_property(
    span: &mut SpanAnnotation,
    name: &str,
    value: PropertyValue,
) -> Result<(), PropertyError> {
    match name {
        "line_alpha" => span.line_alpha = float_value(value, name)?,
        "line_color" => span.line_color = color_value(value, name)?,
        "line_width" => span.line_width = float_value(value, name)?,
        "location" => span.location = float_value(value, name)?,
        _ => return Err(PropertyError::Unknown(name.to_string())),
    }
    Ok(())
}

fn box_property(shape: &BoxAnnotation, name: &str) -> Option<PropertyValue> {
    match name {
        "bottom" => shape.bottom.map(PropertyValue::Float),
        "fill_alpha" => Some(PropertyValue::Float(shape.fill_alpha)),
        "fill_color" => Some(PropertyValue::Color(shape.fill_color)),
        "left" => shape.left.map(PropertyValue::Float),
        "line_alpha" => Some(PropertyValue::Float(shape.line_alpha)),
        "line_color" => Some(PropertyValue::Color(shape.line_color)),
        "line_width" => Some(PropertyValue::Float(shape.line_width)),
        "right" => shape.right.map(PropertyValue::Float),
        "top" => shape.top.map(PropertyValue::Float),
        _ => None,
    }
}

fn set_box_property(
    shape: &mut BoxAnnotation,
    name: &str,
    value: PropertyValue,
) -> Result<(), PropertyError> {
    match name {
        "bottom" => shape.bottom = Some(float_value(value, name)?),
        "fill_alpha" => shape.fill_alpha = float_value(value, name)?,
        "fill_color" => shape.fill_color = color_value(value, name)?,
        "left" => shape.left = Some(float_value(value, name)?),
        "line_alpha" => shape.line_alpha = float_value(value, name)?,
        "line_color" => shape.line_color = color_value(value, name)?,
        "line_width" => shape.line_width = float_value(value, name)?,
        "right" => shape.right = Some(float_value(value, name)?),
        "top" => shape.top = Some(float_value(value, name)?),
        _ => return Err(PropertyError::Unknown(name.to_string())),
    }
    Ok(())
}
