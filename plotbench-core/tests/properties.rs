use plotbench_core::{
    build_controls, classify, control_for, controls_table, prettify, ControlSpec,
    PropertyCategory,
};
use plotdoc::{
    property_names, BoxAnnotation, Color, MarkerShape, PropertyValue, Renderer, RendererId,
    RendererKind, RendererShape, Rgb, ScatterGlyph,
};

#[test]
fn name_rules_in_priority_order() {
    assert_eq!(classify("line_alpha"), Some(PropertyCategory::Opacity));
    assert_eq!(classify("fill_alpha"), Some(PropertyCategory::Opacity));
    assert_eq!(classify("line_color"), Some(PropertyCategory::Color));
    assert_eq!(classify("fill_color"), Some(PropertyCategory::Color));
    assert_eq!(classify("line_width"), Some(PropertyCategory::StrokeWidth));
    assert_eq!(classify("border_line_width"), Some(PropertyCategory::StrokeWidth));
    assert_eq!(classify("marker"), Some(PropertyCategory::Marker));
    assert_eq!(classify("size"), Some(PropertyCategory::MarkerSize));
    assert_eq!(classify("axis_label"), Some(PropertyCategory::Text));
    assert_eq!(classify("title_text"), Some(PropertyCategory::Text));

    // "alpha" outranks the later rules when a name matches several.
    assert_eq!(classify("alpha_color"), Some(PropertyCategory::Opacity));
    // "size" must match exactly, not as a substring.
    assert_eq!(classify("marker_size"), Some(PropertyCategory::Marker));

    assert_eq!(classify("location"), None);
    assert_eq!(classify("dimension"), None);
    assert_eq!(classify("visible"), None);
    assert_eq!(classify("left"), None);
    assert_eq!(classify("points"), None);
}

#[test]
fn control_tables_are_the_classifiable_property_names() {
    for kind in [
        RendererKind::Line,
        RendererKind::Scatter,
        RendererKind::Span,
        RendererKind::Box,
    ] {
        let expected: Vec<(&str, PropertyCategory)> = property_names(kind)
            .iter()
            .filter_map(|name| classify(name).map(|category| (*name, category)))
            .collect();
        assert_eq!(controls_table(kind), expected.as_slice(), "{:?}", kind);
    }
}

#[test]
fn control_specs_per_category() {
    assert_eq!(
        control_for(PropertyCategory::Opacity, &PropertyValue::Float(0.3)),
        ControlSpec::Slider {
            min: 0.0,
            max: 1.0,
            step: 0.05,
            value: 0.3,
        }
    );
    assert_eq!(
        control_for(PropertyCategory::StrokeWidth, &PropertyValue::Float(2.0)),
        ControlSpec::Slider {
            min: 0.0,
            max: 5.0,
            step: 0.2,
            value: 2.0,
        }
    );
    assert_eq!(
        control_for(PropertyCategory::MarkerSize, &PropertyValue::Float(4.0)),
        ControlSpec::Slider {
            min: 0.0,
            max: 20.0,
            step: 1.0,
            value: 4.0,
        }
    );
    assert_eq!(
        control_for(
            PropertyCategory::Color,
            &PropertyValue::Color(Color::Named("black"))
        ),
        ControlSpec::NamedColorSelect { value: "black" }
    );
    assert_eq!(
        control_for(
            PropertyCategory::Color,
            &PropertyValue::Color(Color::Custom(Rgb {
                r: 0x1f,
                g: 0x77,
                b: 0xb4,
            }))
        ),
        ControlSpec::ColorPicker {
            value: Rgb {
                r: 0x1f,
                g: 0x77,
                b: 0xb4,
            }
        }
    );
    assert_eq!(
        control_for(
            PropertyCategory::Marker,
            &PropertyValue::Marker(MarkerShape::Diamond)
        ),
        ControlSpec::MarkerSelect {
            value: MarkerShape::Diamond,
        }
    );
    assert_eq!(
        control_for(
            PropertyCategory::Text,
            &PropertyValue::Text("hello".to_string())
        ),
        ControlSpec::TextInput {
            value: "hello".to_string(),
        }
    );
}

#[test]
fn display_names_are_prettified() {
    assert_eq!(prettify("line_color"), "Line color");
    assert_eq!(prettify("fill_alpha"), "Fill alpha");
    assert_eq!(prettify("size"), "Size");
    assert_eq!(prettify("marker"), "Marker");
}

#[test]
fn scatter_controls_come_out_alphabetical() {
    let renderer = Renderer {
        id: RendererId(0),
        visible: true,
        shape: RendererShape::Scatter(ScatterGlyph::new(vec![[0.0, 0.0]], Color::Named("blue"))),
    };
    let titles: Vec<String> = build_controls(&renderer)
        .into_iter()
        .map(|control| control.title)
        .collect();
    assert_eq!(
        titles,
        vec![
            "Fill alpha",
            "Fill color",
            "Line alpha",
            "Line color",
            "Line width",
            "Marker",
            "Size",
        ]
    );
}

#[test]
fn unset_box_edges_produce_no_controls() {
    let renderer = Renderer {
        id: RendererId(0),
        visible: true,
        shape: RendererShape::Box(BoxAnnotation::default()),
    };
    let controls = build_controls(&renderer);
    assert_eq!(controls.len(), 5);
    assert!(controls
        .iter()
        .all(|control| !["left", "right", "top", "bottom"].contains(&control.property)));
}
