use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;

use eframe::egui;
use plotbench_core::{AnnotationKind, PlotSession, SeriesKind};
use plotdoc::RendererId;

mod export;
mod ui;
mod view;

pub use export::{document_html, document_svg};

/// Configuration for the workbench window.
#[derive(Debug, Clone)]
pub struct GuiConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            title: "Plotbench".to_string(),
            width: 1280.0,
            height: 720.0,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum GuiError {
    #[error("gui error: {0}")]
    Gui(String),
}

/// Rendered page kept in memory between Save and Download.
struct SavedExport {
    file_name: String,
    html: String,
}

/// Receivers for file dialogs running on background threads.
#[derive(Default)]
struct FileDialogs {
    upload_rx: Option<Receiver<Option<PathBuf>>>,
    download_rx: Option<Receiver<Option<PathBuf>>>,
}

struct GuiApp {
    session: PlotSession,
    file_dialogs: FileDialogs,
    saved_export: Option<SavedExport>,
    /// 0 selects the data tab, `i + 1` the i-th overlay tab.
    selected_tab: usize,
    series_kind: SeriesKind,
    annotation_kind: AnnotationKind,
    x_column: String,
    y_column: String,
    label_edits: HashMap<RendererId, String>,
    location_edits: HashMap<RendererId, String>,
    status: String,
}

impl GuiApp {
    fn new(session: PlotSession) -> Self {
        let mut app = Self {
            session,
            file_dialogs: FileDialogs::default(),
            saved_export: None,
            selected_tab: 0,
            series_kind: SeriesKind::Line,
            annotation_kind: AnnotationKind::Span,
            x_column: String::new(),
            y_column: String::new(),
            label_edits: HashMap::new(),
            location_edits: HashMap::new(),
            status: String::new(),
        };
        app.refresh_column_choices();
        app
    }

    fn poll_upload_dialog(&mut self) {
        let result = match &self.file_dialogs.upload_rx {
            Some(rx) => rx.try_recv().ok(),
            None => None,
        };
        if let Some(selection) = result {
            self.file_dialogs.upload_rx = None;
            if let Some(path) = selection {
                self.load_csv_file(&path);
            }
        }
    }

    fn poll_download_dialog(&mut self) {
        let result = match &self.file_dialogs.download_rx {
            Some(rx) => rx.try_recv().ok(),
            None => None,
        };
        if let Some(selection) = result {
            self.file_dialogs.download_rx = None;
            if let Some(path) = selection {
                self.write_export_file(&path);
            }
        }
    }

    fn load_csv_file(&mut self, path: &Path) {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                self.status = format!("Could not read {}: {}", path.display(), err);
                return;
            }
        };
        match self.session.upload_csv(&bytes) {
            Ok(()) => {
                self.refresh_column_choices();
                let name = path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or("file");
                self.status = format!(
                    "Loaded {} rows from {}",
                    self.session.table().row_count(),
                    name
                );
            }
            Err(err) => self.status = err,
        }
    }

    fn write_export_file(&mut self, path: &Path) {
        let Some(saved) = &self.saved_export else {
            return;
        };
        match std::fs::write(path, &saved.html) {
            Ok(()) => self.status = format!("Downloaded to {}", path.display()),
            Err(err) => {
                log::warn!("export write failed: {err}");
                self.status = format!("Could not write {}: {}", path.display(), err);
            }
        }
    }

    /// Keeps the column selectors valid after the table changes.
    fn refresh_column_choices(&mut self) {
        let names = self.session.table().names();
        let first = names.first().cloned().unwrap_or_default();
        if !names.contains(&self.x_column) {
            self.x_column = first.clone();
        }
        if !names.contains(&self.y_column) {
            self.y_column = first;
        }
    }
}

impl eframe::App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.style_mut(|style| {
            style.interaction.selectable_labels = false;
        });

        self.poll_upload_dialog();
        self.poll_download_dialog();

        egui::TopBottomPanel::top("plot_controls").show(ctx, |ui| {
            self.controls_row(ui);
        });
        if !self.status.is_empty() {
            egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
                ui.weak(&self.status);
            });
        }
        egui::SidePanel::left("workbench_panel")
            .resizable(true)
            .default_width(360.0)
            .show(ctx, |ui| {
                self.side_panel(ui);
            });
        egui::CentralPanel::default().show(ctx, |ui| {
            self.plot_view(ui);
        });
    }
}

/// Runs the workbench with an empty session.
pub fn run_gui(config: GuiConfig) -> Result<(), GuiError> {
    run_gui_with_session(config, PlotSession::new())
}

/// Runs the workbench over a prepared session, e.g. with data loaded
/// from the command line.
pub fn run_gui_with_session(config: GuiConfig, session: PlotSession) -> Result<(), GuiError> {
    let mut options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width, config.height]),
        ..Default::default()
    };
    // NOTE: Vsync generates hangs and lag on occluded windows.
    options.vsync = false;

    eframe::run_native(
        &config.title,
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(session))),
    )
    .map_err(|err| GuiError::Gui(err.to_string()))
}
