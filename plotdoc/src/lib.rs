pub mod color;
pub mod document;
pub mod legend;
pub mod property;
pub mod renderer;

pub use color::{named_color, Color, ColorParseError, Rgb, NAMED_COLORS};
pub use document::PlotDocument;
pub use legend::{Legend, LegendEntry, LegendPosition};
pub use property::{
    property_names, PropertyError, PropertyValue, BOX_PROPERTIES, LINE_PROPERTIES,
    SCATTER_PROPERTIES, SPAN_PROPERTIES,
};
pub use renderer::{
    BoxAnnotation, LineGlyph, MarkerShape, Renderer, RendererId, RendererKind, RendererShape,
    ScatterGlyph, SpanAnnotation, SpanDimension,
};
