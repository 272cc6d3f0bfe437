//! The only writers of the legend entry list and the renderer list.
//!
//! Every mutation reads the entry list, rewrites it, and puts it back as a
//! whole, so a view never observes a half-applied change and the legend
//! revision moves once per user action.

use plotdoc::{LegendEntry, PlotDocument, RendererId};

/// Appends a legend entry for a freshly added renderer.
pub fn on_overlay_added(doc: &mut PlotDocument, renderer: RendererId, label: &str) {
    let mut entries = doc.legend.entries().to_vec();
    entries.push(LegendEntry {
        label: label.to_string(),
        renderers: vec![renderer],
    });
    doc.legend.replace_entries(entries);
}

/// Relabels the entry associated with `renderer`. The entry is found by
/// renderer identity, never by label; entry order is untouched.
pub fn on_label_changed(doc: &mut PlotDocument, renderer: RendererId, new_label: &str) {
    let mut entries = doc.legend.entries().to_vec();
    for entry in &mut entries {
        if entry.renderers.contains(&renderer) {
            entry.label = new_label.to_string();
        }
    }
    doc.legend.replace_entries(entries);
}

/// Drops the entry whose sole renderer is the removed overlay's, and the
/// renderer itself, preserving the order of everything that survives.
pub fn on_overlay_removed(doc: &mut PlotDocument, renderer: RendererId) {
    let entries: Vec<LegendEntry> = doc
        .legend
        .entries()
        .iter()
        .filter(|entry| entry.renderers != [renderer])
        .cloned()
        .collect();
    doc.legend.replace_entries(entries);
    doc.remove_renderer(renderer);
}
