use plotbench_core::{AnnotationKind, SeriesKind};

use super::*;

const PREVIEW_ROWS: usize = 10;

impl GuiApp {
    pub(crate) fn data_tab(&mut self, ui: &mut egui::Ui) {
        if ui.button("Upload CSV").clicked() {
            self.open_upload_dialog();
        }
        ui.add_space(6.0);
        self.table_preview(ui);
        ui.separator();
        self.series_row(ui);
        ui.separator();
        self.annotation_row(ui);
    }

    fn open_upload_dialog(&mut self) {
        if self.file_dialogs.upload_rx.is_some() {
            self.status = "A file dialog is already open".to_string();
            return;
        }
        let (tx, rx) = std::sync::mpsc::channel();
        self.file_dialogs.upload_rx = Some(rx);
        std::thread::spawn(move || {
            let file = rfd::FileDialog::new()
                .add_filter("CSV", &["csv"])
                .pick_file();
            let _ = tx.send(file);
        });
    }

    fn table_preview(&mut self, ui: &mut egui::Ui) {
        let table = self.session.table();
        if table.is_empty() {
            ui.weak("No data loaded.");
            return;
        }
        let preview = table.row_count().min(PREVIEW_ROWS);
        egui::ScrollArea::horizontal().show(ui, |ui| {
            egui::Grid::new("table_preview").striped(true).show(ui, |ui| {
                for name in table.names() {
                    ui.strong(name);
                }
                ui.end_row();
                for row in 0..preview {
                    for column in 0..table.names().len() {
                        let value = table.value(row, column).unwrap_or(f64::NAN);
                        ui.label(format!("{value}"));
                    }
                    ui.end_row();
                }
            });
        });
        if table.row_count() > preview {
            ui.weak(format!("… {} more rows", table.row_count() - preview));
        }
    }

    fn series_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            egui::ComboBox::from_id_source("series_kind")
                .selected_text(self.series_kind.label())
                .width(70.0)
                .show_ui(ui, |ui| {
                    for kind in SeriesKind::ALL {
                        ui.selectable_value(&mut self.series_kind, kind, kind.label());
                    }
                });
            ui.label("x");
            self.column_select(ui, "x_column", true);
            ui.label("y");
            self.column_select(ui, "y_column", false);
            let has_data = !self.session.table().is_empty();
            if ui.add_enabled(has_data, egui::Button::new("Add")).clicked() {
                match self
                    .session
                    .add_series(self.series_kind, &self.x_column, &self.y_column)
                {
                    Ok(_) => self.selected_tab = self.session.overlays().len(),
                    Err(err) => self.status = err,
                }
            }
        });
    }

    fn column_select(&mut self, ui: &mut egui::Ui, id: &str, x_axis: bool) {
        let selected = if x_axis {
            self.x_column.clone()
        } else {
            self.y_column.clone()
        };
        egui::ComboBox::from_id_source(id)
            .selected_text(selected.as_str())
            .width(90.0)
            .show_ui(ui, |ui| {
                for name in self.session.table().names() {
                    if ui.selectable_label(*name == selected, name.as_str()).clicked() {
                        if x_axis {
                            self.x_column = name.clone();
                        } else {
                            self.y_column = name.clone();
                        }
                    }
                }
            });
    }

    fn annotation_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            egui::ComboBox::from_id_source("annotation_kind")
                .selected_text(self.annotation_kind.label())
                .width(70.0)
                .show_ui(ui, |ui| {
                    for kind in AnnotationKind::ALL {
                        ui.selectable_value(&mut self.annotation_kind, kind, kind.label());
                    }
                });
            if ui.button("Add").clicked() {
                self.session.add_annotation(self.annotation_kind);
                self.selected_tab = self.session.overlays().len();
            }
        });
    }
}
