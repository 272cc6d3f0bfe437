use plotbench_core::{AnnotationKind, PanelItem, PlotSession, SeriesKind, PALETTE};
use plotdoc::{Color, RendererShape, SpanDimension};

const CSV: &[u8] = b"A,B,C\n1,4,7\n2,5,8\n3,6,9\n";

fn session_with_data() -> PlotSession {
    let mut session = PlotSession::new();
    session.upload_csv(CSV).expect("upload csv");
    session
}

fn line_color(session: &PlotSession, index: usize) -> Color {
    let id = session.overlays()[index].renderer;
    match &session.document().renderer(id).expect("renderer").shape {
        RendererShape::Line(line) => line.line_color,
        other => panic!("expected a line glyph, got {:?}", other),
    }
}

#[test]
fn live_overlays_have_pairwise_distinct_labels() {
    let mut session = session_with_data();
    session.add_series(SeriesKind::Line, "A", "B").expect("add line");
    session.add_series(SeriesKind::Line, "A", "C").expect("add line");
    session
        .add_series(SeriesKind::Scatter, "A", "B")
        .expect("add scatter");
    session.add_annotation(AnnotationKind::Span);
    session.add_annotation(AnnotationKind::Box);
    session.add_annotation(AnnotationKind::Span);

    let labels: Vec<&str> = session
        .overlays()
        .iter()
        .map(|overlay| overlay.label.as_str())
        .collect();
    assert_eq!(
        labels,
        vec!["Line 1", "Line 2", "Scatter 1", "Span 1", "Box 1", "Span 2"]
    );
}

#[test]
fn legend_matches_live_overlays_through_adds_and_deletes() {
    let mut session = session_with_data();
    let first = session.add_series(SeriesKind::Line, "A", "B").expect("add");
    session.add_series(SeriesKind::Scatter, "A", "C").expect("add");
    session.add_annotation(AnnotationKind::Box);

    session.delete_overlay(first);
    session.add_series(SeriesKind::Line, "A", "B").expect("add");

    let entries = session.document().legend.entries();
    assert_eq!(entries.len(), session.overlays().len());
    for (entry, overlay) in entries.iter().zip(session.overlays()) {
        assert_eq!(entry.label, overlay.label);
        assert_eq!(entry.renderers, vec![overlay.renderer]);
    }
}

#[test]
fn delete_leaves_no_trace_even_right_after_add() {
    let mut session = session_with_data();
    let id = session.add_series(SeriesKind::Line, "A", "B").expect("add");
    session.delete_overlay(id);

    assert!(session.document().renderers().is_empty());
    assert!(session.document().legend.entries().is_empty());
    assert!(session.panels().is_empty());
    assert!(session.overlays().is_empty());
}

#[test]
fn rename_changes_one_entry_and_keeps_order() {
    let mut session = session_with_data();
    session.add_series(SeriesKind::Line, "A", "B").expect("add");
    let middle = session.add_series(SeriesKind::Line, "A", "B").expect("add");
    session.add_series(SeriesKind::Line, "A", "B").expect("add");
    let revision = session.document().legend.revision();

    session.rename_overlay(middle, "Pressure");

    let labels: Vec<&str> = session
        .document()
        .legend
        .entries()
        .iter()
        .map(|entry| entry.label.as_str())
        .collect();
    assert_eq!(labels, vec!["Line 1", "Pressure", "Line 3"]);
    assert_eq!(session.document().legend.revision(), revision + 1);
}

#[test]
fn rename_to_a_consumed_label_bumps() {
    let mut session = session_with_data();
    session.add_series(SeriesKind::Line, "A", "B").expect("add");
    let second = session.add_series(SeriesKind::Line, "A", "B").expect("add");

    // "Line 1" and "Line 2" are both consumed, so the request resolves to
    // the next free bump.
    session.rename_overlay(second, "Line 1");
    assert_eq!(session.overlays()[1].label, "Line 3");

    // Renaming to the current label changes nothing.
    let revision = session.document().legend.revision();
    session.rename_overlay(second, "Line 3");
    assert_eq!(session.overlays()[1].label, "Line 3");
    assert_eq!(session.document().legend.revision(), revision);
}

#[test]
fn the_eleventh_series_reuses_the_first_color() {
    let mut session = session_with_data();
    for _ in 0..11 {
        session.add_series(SeriesKind::Line, "A", "B").expect("add");
    }
    assert_eq!(line_color(&session, 0), PALETTE[0]);
    assert_eq!(line_color(&session, 10), PALETTE[0]);
    assert_ne!(line_color(&session, 9), PALETTE[0]);
}

#[test]
fn two_default_lines_get_sequential_labels_and_entries() {
    let mut session = session_with_data();
    session.add_series(SeriesKind::Line, "A", "B").expect("add");
    session.add_series(SeriesKind::Line, "A", "B").expect("add");

    let entries = session.document().legend.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].label, "Line 1");
    assert_eq!(entries[1].label, "Line 2");
}

#[test]
fn invalid_span_location_text_is_ignored() {
    let mut session = session_with_data();
    let id = session.add_annotation(AnnotationKind::Span);

    session.set_span_location(id, "2.5");
    session.set_span_location(id, "abc");

    match &session.document().renderer(id).expect("span").shape {
        RendererShape::Span(span) => assert_eq!(span.location, 2.5),
        other => panic!("expected a span, got {:?}", other),
    }
}

#[test]
fn deleting_the_first_of_two_series_keeps_the_second() {
    let mut session = session_with_data();
    let first = session.add_series(SeriesKind::Line, "A", "B").expect("add");
    let second = session.add_series(SeriesKind::Line, "A", "C").expect("add");

    session.delete_overlay(first);

    let entries = session.document().legend.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].label, "Line 2");
    assert_eq!(entries[0].renderers, vec![second]);
    let renderers = session.document().renderers();
    assert_eq!(renderers.len(), 1);
    assert_eq!(renderers[0].id, second);
}

#[test]
fn failed_upload_keeps_the_previous_table() {
    let mut session = session_with_data();
    session.add_series(SeriesKind::Line, "A", "B").expect("add");

    let err = session
        .upload_csv(b"A,B\n1,2\n3\n")
        .expect_err("ragged row rejected");
    assert!(err.contains("row 3"));

    assert_eq!(session.table().names(), ["A", "B", "C"]);
    assert_eq!(session.overlays().len(), 1);
    assert_eq!(session.document().legend.entries().len(), 1);
}

#[test]
fn unparsable_cells_read_back_as_nan() {
    let mut session = PlotSession::new();
    session.upload_csv(b"A,B\n1,x\n").expect("upload");
    assert_eq!(session.table().value(0, 0), Some(1.0));
    assert!(session.table().value(0, 1).expect("cell").is_nan());
}

#[test]
fn missing_columns_fall_back_to_the_first() {
    let mut session = session_with_data();
    let id = session
        .add_series(SeriesKind::Line, "nope", "B")
        .expect("add");
    match &session.document().renderer(id).expect("line").shape {
        RendererShape::Line(line) => {
            assert_eq!(line.points, vec![[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]);
        }
        other => panic!("expected a line glyph, got {:?}", other),
    }
}

#[test]
fn adding_a_series_without_data_is_refused() {
    let mut session = PlotSession::new();
    let err = session
        .add_series(SeriesKind::Line, "A", "B")
        .expect_err("no table loaded");
    assert_eq!(err, "no data loaded");
    assert!(session.overlays().is_empty());
}

#[test]
fn panels_follow_the_prescribed_row_order() {
    let mut session = session_with_data();
    session
        .add_series(SeriesKind::Scatter, "A", "B")
        .expect("add scatter");
    session.add_annotation(AnnotationKind::Span);

    let panels = session.panels();
    assert_eq!(panels.len(), 2);

    let series = &panels[0];
    assert_eq!(series.title, "Scatter 1");
    assert!(matches!(series.items[0], PanelItem::LegendLabel { .. }));
    assert!(!series
        .items
        .iter()
        .any(|item| matches!(item, PanelItem::VisibleToggle { .. })));

    let span = &panels[1];
    assert_eq!(span.title, "Span 1");
    assert!(matches!(span.items[0], PanelItem::LegendLabel { .. }));
    assert!(matches!(
        span.items.last(),
        Some(PanelItem::VisibleToggle { value: true })
    ));
    let location_at = span
        .items
        .iter()
        .position(|item| matches!(item, PanelItem::SpanLocation { .. }))
        .expect("location row");
    let dimension_at = span
        .items
        .iter()
        .position(|item| {
            matches!(
                item,
                PanelItem::SpanDimension {
                    value: SpanDimension::Height,
                }
            )
        })
        .expect("dimension row");
    assert_eq!(dimension_at, location_at + 1);
}

#[test]
fn legend_click_toggles_renderer_visibility() {
    let mut session = session_with_data();
    let id = session.add_series(SeriesKind::Line, "A", "B").expect("add");
    session.add_annotation(AnnotationKind::Box);

    session.toggle_legend_entry(0);
    assert!(!session.document().renderer(id).expect("line").visible);
    session.toggle_legend_entry(0);
    assert!(session.document().renderer(id).expect("line").visible);
}

#[test]
fn reset_releases_labels_and_rewinds_the_palette() {
    let mut session = session_with_data();
    session.add_series(SeriesKind::Line, "A", "B").expect("add");
    session.add_series(SeriesKind::Line, "A", "B").expect("add");

    session.reset();

    assert!(session.overlays().is_empty());
    assert!(session.document().legend.entries().is_empty());
    assert!(!session.table().is_empty());
    session.add_series(SeriesKind::Line, "A", "B").expect("add");
    assert_eq!(session.overlays()[0].label, "Line 1");
    assert_eq!(line_color(&session, 0), PALETTE[0]);
}

#[test]
fn title_edits_flow_into_the_export_file_name() {
    let mut session = session_with_data();
    session.set_title("My plot");
    session.set_x_axis_label("time");
    session.set_y_axis_label("value");
    assert_eq!(session.document().title, "My plot");
    assert_eq!(session.document().file_name(), "My plot.html");
    assert_eq!(session.document().x_axis_label, "time");
    assert_eq!(session.document().y_axis_label, "value");
}
