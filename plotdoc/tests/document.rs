use plotdoc::{
    BoxAnnotation, Color, LegendEntry, LineGlyph, MarkerShape, PlotDocument, PropertyError,
    PropertyValue, Renderer, RendererId, RendererShape, Rgb, ScatterGlyph, SpanAnnotation,
};

fn line_shape() -> RendererShape {
    RendererShape::Line(LineGlyph::new(vec![[0.0, 0.0], [1.0, 1.0]], Color::BLACK))
}

#[test]
fn renderer_ids_are_monotonic_and_never_reused() {
    let mut doc = PlotDocument::new();
    let first = doc.add_renderer(line_shape());
    let second = doc.add_renderer(line_shape());
    assert_eq!(first, RendererId(0));
    assert_eq!(second, RendererId(1));

    doc.remove_renderer(first);
    let third = doc.add_renderer(line_shape());
    assert_eq!(third, RendererId(2));
    assert_eq!(doc.renderers().len(), 2);
    assert!(doc.renderer(first).is_none());
}

#[test]
fn property_access_per_kind() {
    let mut doc = PlotDocument::new();
    let id = doc.add_renderer(RendererShape::Scatter(ScatterGlyph::new(
        vec![[0.0, 1.0]],
        Color::Named("red"),
    )));
    let renderer = doc.renderer_mut(id).expect("scatter renderer");

    assert_eq!(
        renderer.property("marker"),
        Some(PropertyValue::Marker(MarkerShape::Circle))
    );
    assert_eq!(renderer.property("size"), Some(PropertyValue::Float(4.0)));
    assert_eq!(
        renderer.property("fill_color"),
        Some(PropertyValue::Color(Color::Named("red")))
    );
    assert_eq!(renderer.property("no_such"), None);

    renderer
        .set_property("marker", PropertyValue::Marker(MarkerShape::Diamond))
        .expect("set marker");
    renderer
        .set_property("size", PropertyValue::Float(12.0))
        .expect("set size");
    assert_eq!(
        renderer.property("marker"),
        Some(PropertyValue::Marker(MarkerShape::Diamond))
    );
    assert_eq!(renderer.property("size"), Some(PropertyValue::Float(12.0)));
}

#[test]
fn set_property_rejects_unknown_and_mistyped() {
    let mut renderer = Renderer {
        id: RendererId(7),
        visible: true,
        shape: line_shape(),
    };
    assert_eq!(
        renderer.set_property("no_such", PropertyValue::Float(1.0)),
        Err(PropertyError::Unknown("no_such".to_string()))
    );
    let err = renderer
        .set_property("line_width", PropertyValue::Bool(true))
        .expect_err("mistyped value");
    assert_eq!(
        err,
        PropertyError::WrongType {
            property: "line_width".to_string(),
            expected: "float",
            found: "bool",
        }
    );
    // The failed sets left the renderer untouched.
    assert_eq!(
        renderer.property("line_width"),
        Some(PropertyValue::Float(2.0))
    );
}

#[test]
fn unset_box_edges_read_back_as_absent() {
    let renderer = Renderer {
        id: RendererId(0),
        visible: true,
        shape: RendererShape::Box(BoxAnnotation::default()),
    };
    assert_eq!(renderer.property("left"), None);
    assert_eq!(renderer.property("top"), None);
    assert_eq!(
        renderer.property("fill_alpha"),
        Some(PropertyValue::Float(0.4))
    );
}

#[test]
fn visible_is_a_property_of_every_kind() {
    for shape in [
        line_shape(),
        RendererShape::Span(SpanAnnotation::default()),
        RendererShape::Box(BoxAnnotation::default()),
    ] {
        let mut renderer = Renderer {
            id: RendererId(0),
            visible: true,
            shape,
        };
        assert_eq!(
            renderer.property("visible"),
            Some(PropertyValue::Bool(true))
        );
        renderer
            .set_property("visible", PropertyValue::Bool(false))
            .expect("set visible");
        assert!(!renderer.visible);
    }
}

#[test]
fn legend_replacement_bumps_revision() {
    let mut doc = PlotDocument::new();
    assert_eq!(doc.legend.revision(), 0);
    doc.legend.replace_entries(vec![LegendEntry {
        label: "Line 1".to_string(),
        renderers: vec![RendererId(0)],
    }]);
    assert_eq!(doc.legend.revision(), 1);
    doc.legend.replace_entries(Vec::new());
    assert_eq!(doc.legend.revision(), 2);
}

#[test]
fn toggling_a_legend_entry_flips_its_renderers() {
    let mut doc = PlotDocument::new();
    let id = doc.add_renderer(line_shape());
    doc.legend.replace_entries(vec![LegendEntry {
        label: "Line 1".to_string(),
        renderers: vec![id],
    }]);

    doc.toggle_entry_visibility(0);
    assert!(!doc.renderer(id).expect("renderer").visible);
    doc.toggle_entry_visibility(0);
    assert!(doc.renderer(id).expect("renderer").visible);

    // Out-of-range index is a no-op.
    doc.toggle_entry_visibility(5);
    assert!(doc.renderer(id).expect("renderer").visible);
}

#[test]
fn colors_parse_and_format_as_strings() {
    let named: Color = "Black".parse().expect("named color");
    assert_eq!(named, Color::Named("black"));
    assert_eq!(named.to_string(), "black");
    assert_eq!(named.rgb(), Rgb { r: 0, g: 0, b: 0 });

    let custom: Color = "#1F77B4".parse().expect("hex color");
    assert_eq!(
        custom.rgb(),
        Rgb {
            r: 0x1f,
            g: 0x77,
            b: 0xb4
        }
    );
    assert_eq!(custom.to_string(), "#1f77b4");

    assert!("not-a-color".parse::<Color>().is_err());
    assert!("#12345".parse::<Color>().is_err());
}

#[test]
fn document_serializes_with_string_colors() {
    let mut doc = PlotDocument::new();
    doc.add_renderer(RendererShape::Span(SpanAnnotation::default()));
    let json = serde_json::to_value(&doc).expect("serialize document");

    let renderer = &json["renderers"][0];
    assert_eq!(renderer["shape"]["type"], "span");
    assert_eq!(renderer["shape"]["line_color"], "black");
    assert_eq!(renderer["shape"]["dimension"], "height");
    assert_eq!(json["title"], "Title");

    let back: PlotDocument = serde_json::from_value(json).expect("deserialize document");
    assert_eq!(back.renderers().len(), 1);
}
