use plotdoc::{Renderer, RendererId, RendererKind, RendererShape, SpanDimension};

use crate::properties::{build_controls, Control};

/// Glyph families offered by the series controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Line,
    Scatter,
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 2] = [SeriesKind::Line, SeriesKind::Scatter];

    pub fn label(&self) -> &'static str {
        match self {
            SeriesKind::Line => "line",
            SeriesKind::Scatter => "scatter",
        }
    }

    /// Seed label handed to the label pool for a new series.
    pub fn default_label(&self) -> &'static str {
        match self {
            SeriesKind::Line => "Line 1",
            SeriesKind::Scatter => "Scatter 1",
        }
    }
}

impl From<SeriesKind> for RendererKind {
    fn from(kind: SeriesKind) -> Self {
        match kind {
            SeriesKind::Line => RendererKind::Line,
            SeriesKind::Scatter => RendererKind::Scatter,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationKind {
    Span,
    Box,
}

impl AnnotationKind {
    pub const ALL: [AnnotationKind; 2] = [AnnotationKind::Span, AnnotationKind::Box];

    pub fn label(&self) -> &'static str {
        match self {
            AnnotationKind::Span => "Span",
            AnnotationKind::Box => "Box",
        }
    }

    pub fn default_label(&self) -> &'static str {
        match self {
            AnnotationKind::Span => "Span 1",
            AnnotationKind::Box => "Box 1",
        }
    }
}

impl From<AnnotationKind> for RendererKind {
    fn from(kind: AnnotationKind) -> Self {
        match kind {
            AnnotationKind::Span => RendererKind::Span,
            AnnotationKind::Box => RendererKind::Box,
        }
    }
}

/// A live overlay: one registry entry per series or annotation, identified
/// by the renderer backing it.
#[derive(Debug, Clone)]
pub struct Overlay {
    pub renderer: RendererId,
    pub kind: RendererKind,
    pub label: String,
}

/// One row of an overlay's control panel, in display order.
#[derive(Debug, Clone)]
pub enum PanelItem {
    /// Legend label editor; always the first item.
    LegendLabel { value: String },
    Control(Control),
    /// Span geometry; committed as text, parsed as float.
    SpanLocation { value: f64 },
    SpanDimension { value: SpanDimension },
    /// Annotation visibility; always the last item.
    VisibleToggle { value: bool },
}

/// An overlay's tab: title, rows and the renderer the rows act on.
#[derive(Debug, Clone)]
pub struct OverlayPanel {
    pub renderer: RendererId,
    pub title: String,
    pub items: Vec<PanelItem>,
}

/// Assembles the panel for an overlay: label editor first, then the
/// classified property controls alphabetically, then (for annotations)
/// geometry fields and the visibility toggle.
pub fn overlay_panel(overlay: &Overlay, renderer: &Renderer) -> OverlayPanel {
    let mut items = vec![PanelItem::LegendLabel {
        value: overlay.label.clone(),
    }];
    items.extend(build_controls(renderer).into_iter().map(PanelItem::Control));
    if let RendererShape::Span(span) = &renderer.shape {
        items.push(PanelItem::SpanLocation {
            value: span.location,
        });
        items.push(PanelItem::SpanDimension {
            value: span.dimension,
        });
    }
    if matches!(overlay.kind, RendererKind::Span | RendererKind::Box) {
        items.push(PanelItem::VisibleToggle {
            value: renderer.visible,
        });
    }
    OverlayPanel {
        renderer: renderer.id,
        title: overlay.label.clone(),
        items,
    }
}
