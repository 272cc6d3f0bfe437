use plotdoc::LegendPosition;

use super::*;
use crate::SavedExport;

impl GuiApp {
    /// Top row: figure text properties, legend placement and export.
    pub(crate) fn controls_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Title");
            let mut title = self.session.document().title.clone();
            if ui
                .add(egui::TextEdit::singleline(&mut title).desired_width(140.0))
                .changed()
            {
                self.session.set_title(&title);
            }

            ui.label("X axis");
            let mut x_label = self.session.document().x_axis_label.clone();
            if ui
                .add(egui::TextEdit::singleline(&mut x_label).desired_width(100.0))
                .changed()
            {
                self.session.set_x_axis_label(&x_label);
            }

            ui.label("Y axis");
            let mut y_label = self.session.document().y_axis_label.clone();
            if ui
                .add(egui::TextEdit::singleline(&mut y_label).desired_width(100.0))
                .changed()
            {
                self.session.set_y_axis_label(&y_label);
            }

            ui.label("Legend");
            let position = self.session.document().legend.position;
            egui::ComboBox::from_id_source("legend_position")
                .selected_text(position.label())
                .width(110.0)
                .show_ui(ui, |ui| {
                    for corner in LegendPosition::ALL {
                        if ui.selectable_label(position == corner, corner.label()).clicked() {
                            self.session.set_legend_position(corner);
                        }
                    }
                });

            ui.separator();

            if ui.button("Reset").clicked() {
                self.reset_document();
            }
            if ui.button("Save").clicked() {
                self.save_export();
            }
            let downloadable = self.saved_export.is_some();
            if ui
                .add_enabled(downloadable, egui::Button::new("Download"))
                .clicked()
            {
                self.open_download_dialog();
            }
        });
    }

    /// Starts the plot over: every overlay goes, labels and colors are
    /// released, the loaded table stays.
    fn reset_document(&mut self) {
        self.session.reset();
        self.selected_tab = 0;
        self.label_edits.clear();
        self.location_edits.clear();
        self.status = "Plot reset".to_string();
    }

    /// Renders the current document to a page held in memory. Download
    /// writes the last saved page, not the live document.
    fn save_export(&mut self) {
        match crate::export::document_html(self.session.document()) {
            Ok(html) => {
                let file_name = self.session.document().file_name();
                self.status = format!("Saved {file_name}");
                self.saved_export = Some(SavedExport { file_name, html });
            }
            Err(err) => {
                log::warn!("export failed: {err}");
                self.status = format!("Export failed: {err}");
            }
        }
    }

    fn open_download_dialog(&mut self) {
        if self.file_dialogs.download_rx.is_some() {
            self.status = "A file dialog is already open".to_string();
            return;
        }
        let Some(saved) = &self.saved_export else {
            return;
        };
        let file_name = saved.file_name.clone();
        let (tx, rx) = std::sync::mpsc::channel();
        self.file_dialogs.download_rx = Some(rx);
        std::thread::spawn(move || {
            let file = rfd::FileDialog::new()
                .set_file_name(&file_name)
                .add_filter("HTML", &["html"])
                .save_file();
            let _ = tx.send(file);
        });
    }
}
