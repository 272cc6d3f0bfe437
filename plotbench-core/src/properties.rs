use plotdoc::{Color, MarkerShape, PropertyValue, Renderer, RendererKind, Rgb};

/// Closed set of control families a stylable property can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyCategory {
    Opacity,
    Color,
    StrokeWidth,
    Marker,
    MarkerSize,
    Text,
}

/// Maps a property name to its control family. First matching rule wins;
/// names matching no rule get no control.
pub fn classify(name: &str) -> Option<PropertyCategory> {
    if name.contains("alpha") {
        Some(PropertyCategory::Opacity)
    } else if name.contains("color") {
        Some(PropertyCategory::Color)
    } else if name.ends_with("width") {
        Some(PropertyCategory::StrokeWidth)
    } else if name.contains("marker") {
        Some(PropertyCategory::Marker)
    } else if name == "size" {
        Some(PropertyCategory::MarkerSize)
    } else if name.ends_with("text") || name.ends_with("label") {
        Some(PropertyCategory::Text)
    } else {
        None
    }
}

/// Per-kind control tables. Entries are exactly the classifiable names of
/// [`plotdoc::property_names`], in name order; enforced by test.
pub const LINE_CONTROLS: &[(&str, PropertyCategory)] = &[
    ("line_alpha", PropertyCategory::Opacity),
    ("line_color", PropertyCategory::Color),
    ("line_width", PropertyCategory::StrokeWidth),
];

pub const SCATTER_CONTROLS: &[(&str, PropertyCategory)] = &[
    ("fill_alpha", PropertyCategory::Opacity),
    ("fill_color", PropertyCategory::Color),
    ("line_alpha", PropertyCategory::Opacity),
    ("line_color", PropertyCategory::Color),
    ("line_width", PropertyCategory::StrokeWidth),
    ("marker", PropertyCategory::Marker),
    ("size", PropertyCategory::MarkerSize),
];

pub const SPAN_CONTROLS: &[(&str, PropertyCategory)] = &[
    ("line_alpha", PropertyCategory::Opacity),
    ("line_color", PropertyCategory::Color),
    ("line_width", PropertyCategory::StrokeWidth),
];

pub const BOX_CONTROLS: &[(&str, PropertyCategory)] = &[
    ("fill_alpha", PropertyCategory::Opacity),
    ("fill_color", PropertyCategory::Color),
    ("line_alpha", PropertyCategory::Opacity),
    ("line_color", PropertyCategory::Color),
    ("line_width", PropertyCategory::StrokeWidth),
];

pub fn controls_table(kind: RendererKind) -> &'static [(&'static str, PropertyCategory)] {
    match kind {
        RendererKind::Line => LINE_CONTROLS,
        RendererKind::Scatter => SCATTER_CONTROLS,
        RendererKind::Span => SPAN_CONTROLS,
        RendererKind::Box => BOX_CONTROLS,
    }
}

/// What the shell should render for one property, seeded with the current
/// value.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlSpec {
    Slider {
        min: f64,
        max: f64,
        step: f64,
        value: f64,
    },
    NamedColorSelect {
        value: &'static str,
    },
    ColorPicker {
        value: Rgb,
    },
    MarkerSelect {
        value: MarkerShape,
    },
    TextInput {
        value: String,
    },
}

fn float_or(value: &PropertyValue, fallback: f64) -> f64 {
    match value {
        PropertyValue::Float(v) => *v,
        _ => fallback,
    }
}

/// Builds the control spec for a category and current value. Total: a value
/// of an unexpected type falls back to the category's default seed.
pub fn control_for(category: PropertyCategory, value: &PropertyValue) -> ControlSpec {
    match category {
        PropertyCategory::Opacity => ControlSpec::Slider {
            min: 0.0,
            max: 1.0,
            step: 0.05,
            value: float_or(value, 1.0),
        },
        PropertyCategory::Color => match value {
            PropertyValue::Color(Color::Named(name)) => {
                ControlSpec::NamedColorSelect { value: *name }
            }
            PropertyValue::Color(Color::Custom(rgb)) => ControlSpec::ColorPicker { value: *rgb },
            _ => ControlSpec::ColorPicker { value: Rgb::BLACK },
        },
        PropertyCategory::StrokeWidth => ControlSpec::Slider {
            min: 0.0,
            max: 5.0,
            step: 0.2,
            value: float_or(value, 1.0),
        },
        PropertyCategory::Marker => ControlSpec::MarkerSelect {
            value: match value {
                PropertyValue::Marker(marker) => *marker,
                _ => MarkerShape::Circle,
            },
        },
        PropertyCategory::MarkerSize => ControlSpec::Slider {
            min: 0.0,
            max: 20.0,
            step: 1.0,
            value: float_or(value, 4.0),
        },
        PropertyCategory::Text => ControlSpec::TextInput {
            value: match value {
                PropertyValue::Text(text) => text.clone(),
                _ => String::new(),
            },
        },
    }
}

/// One editable row of an overlay panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    pub property: &'static str,
    pub title: String,
    pub spec: ControlSpec,
}

/// Property name turned into a display name: underscores to spaces, first
/// letter upper-cased.
pub fn prettify(property: &str) -> String {
    let spaced = property.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Controls for every classifiable, currently set property of a renderer,
/// sorted alphabetically by display name. Unset properties produce nothing.
pub fn build_controls(renderer: &Renderer) -> Vec<Control> {
    let mut controls = Vec::new();
    for (property, category) in controls_table(renderer.kind()).iter().copied() {
        let Some(value) = renderer.property(property) else {
            continue;
        };
        controls.push(Control {
            property,
            title: prettify(property),
            spec: control_for(category, &value),
        });
    }
    controls.sort_by(|a, b| a.title.cmp(&b.title));
    controls
}
