use plotdoc::{
    BoxAnnotation, LineGlyph, PlotDocument, PropertyValue, RendererId, RendererShape,
    ScatterGlyph, SpanAnnotation, SpanDimension,
};

use crate::labels::LabelPool;
use crate::legend_sync;
use crate::overlays::{overlay_panel, AnnotationKind, Overlay, OverlayPanel, SeriesKind};
use crate::palette::ColorCycle;
use crate::table::DataTable;

/// One editing session: the document, the uploaded table and the overlay
/// registry, all mutated synchronously from the shell's event handlers.
///
/// Adding and deleting an overlay touch the renderer list, the legend and
/// the registry as one transaction; each runs to completion before the next
/// event is handled.
#[derive(Debug, Default)]
pub struct PlotSession {
    document: PlotDocument,
    table: DataTable,
    overlays: Vec<Overlay>,
    labels: LabelPool,
    colors: ColorCycle,
}

impl PlotSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&self) -> &PlotDocument {
        &self.document
    }

    pub fn table(&self) -> &DataTable {
        &self.table
    }

    pub fn overlays(&self) -> &[Overlay] {
        &self.overlays
    }

    /// Parses `bytes` as a CSV table and swaps it in. A file that fails to
    /// parse is rejected and the previous table, overlays and legend stay
    /// untouched. Existing series keep the data snapshot they were created
    /// with either way.
    pub fn upload_csv(&mut self, bytes: &[u8]) -> Result<(), String> {
        match DataTable::parse(bytes) {
            Ok(table) => {
                self.table = table;
                Ok(())
            }
            Err(err) => {
                log::warn!("rejected upload: {}", err);
                Err(err.to_string())
            }
        }
    }

    /// Adds a line or scatter series over a snapshot of the named columns.
    /// A missing column falls back to the table's first column; with no
    /// table loaded there is nothing to plot and the add is refused.
    pub fn add_series(
        &mut self,
        kind: SeriesKind,
        x_column: &str,
        y_column: &str,
    ) -> Result<RendererId, String> {
        let x = self
            .table
            .column_or_first(x_column)
            .ok_or_else(|| "no data loaded".to_string())?;
        let y = self
            .table
            .column_or_first(y_column)
            .ok_or_else(|| "no data loaded".to_string())?;
        let points: Vec<[f64; 2]> = x.iter().zip(y).map(|(&x, &y)| [x, y]).collect();

        let color = self.colors.next_color();
        let shape = match kind {
            SeriesKind::Line => RendererShape::Line(LineGlyph::new(points, color)),
            SeriesKind::Scatter => RendererShape::Scatter(ScatterGlyph::new(points, color)),
        };
        let label = self.labels.allocate(kind.default_label());
        let id = self.document.add_renderer(shape);
        legend_sync::on_overlay_added(&mut self.document, id, &label);
        self.overlays.push(Overlay {
            renderer: id,
            kind: kind.into(),
            label,
        });
        Ok(id)
    }

    pub fn add_annotation(&mut self, kind: AnnotationKind) -> RendererId {
        let shape = match kind {
            AnnotationKind::Span => RendererShape::Span(SpanAnnotation::default()),
            AnnotationKind::Box => RendererShape::Box(BoxAnnotation::default()),
        };
        let label = self.labels.allocate(kind.default_label());
        let id = self.document.add_renderer(shape);
        legend_sync::on_overlay_added(&mut self.document, id, &label);
        self.overlays.push(Overlay {
            renderer: id,
            kind: kind.into(),
            label,
        });
        id
    }

    /// Removes the overlay's renderer, legend entry and registry slot in
    /// one step. Its label stays consumed.
    pub fn delete_overlay(&mut self, id: RendererId) {
        legend_sync::on_overlay_removed(&mut self.document, id);
        self.overlays.retain(|overlay| overlay.renderer != id);
    }

    /// Renames an overlay. The request goes through the label pool, so a
    /// clash with any label ever used resolves to a bumped variant.
    /// Renaming to the current label is a no-op.
    pub fn rename_overlay(&mut self, id: RendererId, requested: &str) {
        let Some(index) = self
            .overlays
            .iter()
            .position(|overlay| overlay.renderer == id)
        else {
            return;
        };
        if self.overlays[index].label == requested {
            return;
        }
        let label = self.labels.allocate(requested);
        self.overlays[index].label = label.clone();
        legend_sync::on_label_changed(&mut self.document, id, &label);
    }

    pub fn set_renderer_property(
        &mut self,
        id: RendererId,
        property: &str,
        value: PropertyValue,
    ) -> Result<(), String> {
        let renderer = self
            .document
            .renderer_mut(id)
            .ok_or_else(|| format!("no renderer {}", id))?;
        renderer
            .set_property(property, value)
            .map_err(|err| err.to_string())
    }

    /// Commits a span location typed as text. Text that does not parse as a
    /// float is ignored and the previous location stays.
    pub fn set_span_location(&mut self, id: RendererId, text: &str) {
        let Ok(location) = text.trim().parse::<f64>() else {
            return;
        };
        if let Some(renderer) = self.document.renderer_mut(id) {
            if let RendererShape::Span(span) = &mut renderer.shape {
                span.location = location;
            }
        }
    }

    pub fn set_span_dimension(&mut self, id: RendererId, dimension: SpanDimension) {
        if let Some(renderer) = self.document.renderer_mut(id) {
            if let RendererShape::Span(span) = &mut renderer.shape {
                span.dimension = dimension;
            }
        }
    }

    /// Direct visibility binding for the annotation toggles.
    pub fn set_overlay_visible(&mut self, id: RendererId, visible: bool) {
        if let Some(renderer) = self.document.renderer_mut(id) {
            renderer.visible = visible;
        }
    }

    /// Legend click-to-hide: flips the renderers behind the entry at
    /// `entry_index`.
    pub fn toggle_legend_entry(&mut self, entry_index: usize) {
        self.document.toggle_entry_visibility(entry_index);
    }

    pub fn set_title(&mut self, title: &str) {
        self.document.title = title.to_string();
    }

    pub fn set_x_axis_label(&mut self, label: &str) {
        self.document.x_axis_label = label.to_string();
    }

    pub fn set_y_axis_label(&mut self, label: &str) {
        self.document.y_axis_label = label.to_string();
    }

    pub fn set_legend_position(&mut self, position: plotdoc::LegendPosition) {
        self.document.legend.position = position;
    }

    /// The overlay tabs, in creation order.
    pub fn panels(&self) -> Vec<OverlayPanel> {
        self.overlays
            .iter()
            .filter_map(|overlay| {
                let renderer = self.document.renderer(overlay.renderer)?;
                Some(overlay_panel(overlay, renderer))
            })
            .collect()
    }

    /// Starts the plot over: fresh document, empty registry, released
    /// labels and a rewound palette. The uploaded table is kept.
    pub fn reset(&mut self) {
        self.document = PlotDocument::new();
        self.overlays.clear();
        self.labels.reset();
        self.colors.reset();
    }
}
