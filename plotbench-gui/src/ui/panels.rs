use plotbench_core::{Control, ControlSpec, PanelItem};
use plotdoc::{Color, MarkerShape, PropertyValue, RendererId, Rgb, SpanDimension, NAMED_COLORS};

use super::*;

impl GuiApp {
    /// Tab strip over the data tab and one tab per overlay, in creation
    /// order, plus the body of whichever tab is selected.
    pub(crate) fn side_panel(&mut self, ui: &mut egui::Ui) {
        let mut titles = vec!["Data".to_string()];
        titles.extend(self.session.overlays().iter().map(|overlay| overlay.label.clone()));
        if self.selected_tab >= titles.len() {
            self.selected_tab = 0;
        }
        ui.horizontal_wrapped(|ui| {
            for (index, title) in titles.iter().enumerate() {
                if ui.selectable_label(self.selected_tab == index, title).clicked() {
                    self.selected_tab = index;
                }
            }
        });
        ui.separator();
        egui::ScrollArea::vertical()
            .id_source("tab_body")
            .show(ui, |ui| {
                if self.selected_tab == 0 {
                    self.data_tab(ui);
                } else {
                    let index = self.selected_tab - 1;
                    self.overlay_tab(ui, index);
                }
            });
    }

    fn overlay_tab(&mut self, ui: &mut egui::Ui, index: usize) {
        let Some(panel) = self.session.panels().into_iter().nth(index) else {
            self.selected_tab = 0;
            return;
        };
        let renderer = panel.renderer;
        for item in &panel.items {
            match item {
                PanelItem::LegendLabel { value } => self.label_row(ui, renderer, value),
                PanelItem::Control(control) => self.control_row(ui, renderer, control),
                PanelItem::SpanLocation { value } => self.location_row(ui, renderer, *value),
                PanelItem::SpanDimension { value } => self.dimension_row(ui, renderer, *value),
                PanelItem::VisibleToggle { value } => {
                    let mut visible = *value;
                    if ui.checkbox(&mut visible, "Visible").changed() {
                        self.session.set_overlay_visible(renderer, visible);
                    }
                }
            }
        }
        ui.separator();
        let delete = egui::Button::new(
            egui::RichText::new("Delete").color(egui::Color32::from_rgb(220, 60, 60)),
        );
        if ui.add(delete).clicked() {
            self.label_edits.remove(&renderer);
            self.location_edits.remove(&renderer);
            self.session.delete_overlay(renderer);
            self.selected_tab = self.selected_tab.min(self.session.overlays().len());
        }
    }

    /// Edits go through a buffer and commit on focus loss, so a half
    /// typed label never hits the dedup pass.
    fn label_row(&mut self, ui: &mut egui::Ui, renderer: RendererId, value: &str) {
        let buffer = self
            .label_edits
            .entry(renderer)
            .or_insert_with(|| value.to_string());
        let mut committed = None;
        ui.horizontal(|ui| {
            ui.label("Legend label");
            let response = ui.add(egui::TextEdit::singleline(buffer).desired_width(160.0));
            if response.lost_focus() {
                committed = Some(buffer.clone());
            }
        });
        if let Some(requested) = committed {
            let requested = requested.trim();
            if !requested.is_empty() {
                self.session.rename_overlay(renderer, requested);
            }
            self.label_edits.remove(&renderer);
        }
    }

    fn location_row(&mut self, ui: &mut egui::Ui, renderer: RendererId, value: f64) {
        let buffer = self
            .location_edits
            .entry(renderer)
            .or_insert_with(|| value.to_string());
        let mut committed = None;
        ui.horizontal(|ui| {
            ui.label("Location");
            let response = ui.add(egui::TextEdit::singleline(buffer).desired_width(80.0));
            if response.lost_focus() {
                committed = Some(buffer.clone());
            }
        });
        if let Some(text) = committed {
            self.session.set_span_location(renderer, &text);
            self.location_edits.remove(&renderer);
        }
    }

    fn dimension_row(&mut self, ui: &mut egui::Ui, renderer: RendererId, value: SpanDimension) {
        ui.horizontal(|ui| {
            ui.label("Dimension");
            egui::ComboBox::from_id_source((renderer, "dimension"))
                .selected_text(value.label())
                .width(90.0)
                .show_ui(ui, |ui| {
                    for dimension in SpanDimension::ALL {
                        if ui
                            .selectable_label(value == dimension, dimension.label())
                            .clicked()
                        {
                            self.session.set_span_dimension(renderer, dimension);
                        }
                    }
                });
        });
    }

    fn control_row(&mut self, ui: &mut egui::Ui, renderer: RendererId, control: &Control) {
        ui.horizontal(|ui| {
            ui.label(&control.title);
            match &control.spec {
                ControlSpec::Slider { min, max, step, value } => {
                    let mut current = *value;
                    if ui
                        .add(egui::Slider::new(&mut current, *min..=*max).step_by(*step))
                        .changed()
                    {
                        let _ = self.session.set_renderer_property(
                            renderer,
                            control.property,
                            PropertyValue::Float(current),
                        );
                    }
                }
                ControlSpec::NamedColorSelect { value } => {
                    egui::ComboBox::from_id_source((renderer, control.property))
                        .selected_text(*value)
                        .width(120.0)
                        .show_ui(ui, |ui| {
                            for (name, _) in NAMED_COLORS.iter().copied() {
                                if ui.selectable_label(*value == name, name).clicked() {
                                    let _ = self.session.set_renderer_property(
                                        renderer,
                                        control.property,
                                        PropertyValue::Color(Color::Named(name)),
                                    );
                                }
                            }
                        });
                }
                ControlSpec::ColorPicker { value } => {
                    let mut srgb = [value.r, value.g, value.b];
                    if ui.color_edit_button_srgb(&mut srgb).changed() {
                        let color = Color::Custom(Rgb {
                            r: srgb[0],
                            g: srgb[1],
                            b: srgb[2],
                        });
                        let _ = self.session.set_renderer_property(
                            renderer,
                            control.property,
                            PropertyValue::Color(color),
                        );
                    }
                }
                ControlSpec::MarkerSelect { value } => {
                    egui::ComboBox::from_id_source((renderer, control.property))
                        .selected_text(value.label())
                        .width(90.0)
                        .show_ui(ui, |ui| {
                            for marker in MarkerShape::ALL {
                                if ui
                                    .selectable_label(*value == marker, marker.label())
                                    .clicked()
                                {
                                    let _ = self.session.set_renderer_property(
                                        renderer,
                                        control.property,
                                        PropertyValue::Marker(marker),
                                    );
                                }
                            }
                        });
                }
                ControlSpec::TextInput { value } => {
                    let mut text = value.clone();
                    if ui
                        .add(egui::TextEdit::singleline(&mut text).desired_width(160.0))
                        .changed()
                    {
                        let _ = self.session.set_renderer_property(
                            renderer,
                            control.property,
                            PropertyValue::Text(text),
                        );
                    }
                }
            }
        });
    }
}
