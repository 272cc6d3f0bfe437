pub mod labels;
pub mod legend_sync;
pub mod overlays;
pub mod palette;
pub mod properties;
pub mod session;
pub mod table;

pub use labels::LabelPool;
pub use overlays::{overlay_panel, AnnotationKind, Overlay, OverlayPanel, PanelItem, SeriesKind};
pub use palette::{palette_color, ColorCycle, PALETTE};
pub use properties::{
    build_controls, classify, control_for, controls_table, prettify, Control, ControlSpec,
    PropertyCategory,
};
pub use session::PlotSession;
pub use table::{DataTable, TableError};
