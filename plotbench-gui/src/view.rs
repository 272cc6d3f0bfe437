use egui::{vec2, Align2, Area, Color32, Context, Frame, Id, Order, Rect, RichText, Sense, Stroke, Ui};
use egui_plot::{HLine, Line, Plot, PlotPoints, Points, Polygon, VLine};
use plotdoc::{Color, LegendPosition, MarkerShape, PlotDocument, Renderer, RendererShape, SpanDimension};

use crate::GuiApp;

impl GuiApp {
    pub(crate) fn plot_view(&mut self, ui: &mut Ui) {
        let plot_rect = {
            let document = self.session.document();
            let title = document.title.clone();
            if !title.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(title).strong().size(16.0));
                });
            }
            let response = Plot::new("workbench_plot")
                .x_axis_label(document.x_axis_label.clone())
                .y_axis_label(document.y_axis_label.clone())
                .show(ui, |plot_ui| draw_document(plot_ui, document));
            response.response.rect
        };
        let clicked = self.legend_overlay(ui.ctx(), plot_rect);
        if let Some(index) = clicked {
            self.session.toggle_legend_entry(index);
        }
    }

    /// Floating legend pinned to a plot corner. Rows toggle the entry
    /// they name; a muted row means every renderer behind it is hidden.
    fn legend_overlay(&self, ctx: &Context, plot_rect: Rect) -> Option<usize> {
        let document = self.session.document();
        let entries = document.legend.entries();
        if entries.is_empty() {
            return None;
        }
        let pad = 8.0;
        let (pos, pivot) = match document.legend.position {
            LegendPosition::TopLeft => {
                (plot_rect.left_top() + vec2(pad, pad), Align2::LEFT_TOP)
            }
            LegendPosition::TopRight => {
                (plot_rect.right_top() + vec2(-pad, pad), Align2::RIGHT_TOP)
            }
            LegendPosition::BottomLeft => {
                (plot_rect.left_bottom() + vec2(pad, -pad), Align2::LEFT_BOTTOM)
            }
            LegendPosition::BottomRight => {
                (plot_rect.right_bottom() + vec2(-pad, -pad), Align2::RIGHT_BOTTOM)
            }
        };
        let mut clicked = None;
        Area::new(Id::new("plot_legend"))
            .pivot(pivot)
            .fixed_pos(pos)
            .order(Order::Foreground)
            .show(ctx, |ui| {
                Frame::popup(ui.style()).show(ui, |ui| {
                    for (index, entry) in entries.iter().enumerate() {
                        let hidden = entry.renderers.iter().all(|id| {
                            document.renderer(*id).map(|r| !r.visible).unwrap_or(true)
                        });
                        let swatch = entry
                            .renderers
                            .first()
                            .and_then(|id| document.renderer(*id))
                            .map(renderer_swatch)
                            .unwrap_or(Color32::GRAY);
                        let swatch = if hidden {
                            swatch.gamma_multiply(0.3)
                        } else {
                            swatch
                        };
                        let row = ui.horizontal(|ui| {
                            let (rect, _) = ui
                                .allocate_exact_size(vec2(14.0, 14.0), Sense::hover());
                            ui.painter().rect_filled(rect.shrink(2.0), 2.0, swatch);
                            let text = RichText::new(&entry.label);
                            let text = if hidden { text.weak() } else { text };
                            ui.label(text);
                        });
                        if row.response.interact(Sense::click()).clicked() {
                            clicked = Some(index);
                        }
                    }
                });
            });
        clicked
    }
}

fn draw_document(plot_ui: &mut egui_plot::PlotUi, document: &PlotDocument) {
    for renderer in document.renderers() {
        if !renderer.visible {
            continue;
        }
        match &renderer.shape {
            RendererShape::Line(line) => {
                plot_ui.line(
                    Line::new(PlotPoints::from(line.points.clone()))
                        .color(color32(&line.line_color, line.line_alpha))
                        .width(line.line_width as f32),
                );
            }
            RendererShape::Scatter(scatter) => {
                plot_ui.points(
                    Points::new(PlotPoints::from(scatter.points.clone()))
                        .shape(marker_shape(scatter.marker))
                        .radius((scatter.size / 2.0).max(0.5) as f32)
                        .filled(true)
                        .color(color32(&scatter.fill_color, scatter.fill_alpha)),
                );
            }
            RendererShape::Span(span) => {
                let color = color32(&span.line_color, span.line_alpha);
                let width = span.line_width as f32;
                match span.dimension {
                    SpanDimension::Height => {
                        plot_ui.vline(VLine::new(span.location).color(color).width(width));
                    }
                    SpanDimension::Width => {
                        plot_ui.hline(HLine::new(span.location).color(color).width(width));
                    }
                }
            }
            RendererShape::Box(region) => {
                // Open edges stretch to the bounds the plot showed last
                // frame, mirroring how the exported page clamps them.
                let bounds = plot_ui.plot_bounds();
                let left = region.left.unwrap_or_else(|| bounds.min()[0]);
                let right = region.right.unwrap_or_else(|| bounds.max()[0]);
                let bottom = region.bottom.unwrap_or_else(|| bounds.min()[1]);
                let top = region.top.unwrap_or_else(|| bounds.max()[1]);
                let corners = vec![
                    [left, bottom],
                    [right, bottom],
                    [right, top],
                    [left, top],
                ];
                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(corners))
                        .fill_color(color32(&region.fill_color, region.fill_alpha))
                        .stroke(Stroke::new(
                            region.line_width as f32,
                            color32(&region.line_color, region.line_alpha),
                        )),
                );
            }
        }
    }
}

fn renderer_swatch(renderer: &Renderer) -> Color32 {
    match &renderer.shape {
        RendererShape::Line(line) => color32(&line.line_color, line.line_alpha),
        RendererShape::Scatter(scatter) => color32(&scatter.fill_color, scatter.fill_alpha),
        RendererShape::Span(span) => color32(&span.line_color, span.line_alpha),
        RendererShape::Box(region) => color32(&region.fill_color, region.fill_alpha),
    }
}

fn color32(color: &Color, alpha: f64) -> Color32 {
    let rgb = color.rgb();
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(rgb.r, rgb.g, rgb.b, a)
}

fn marker_shape(marker: MarkerShape) -> egui_plot::MarkerShape {
    match marker {
        MarkerShape::Circle => egui_plot::MarkerShape::Circle,
        MarkerShape::Diamond => egui_plot::MarkerShape::Diamond,
        MarkerShape::Square => egui_plot::MarkerShape::Square,
        MarkerShape::Cross => egui_plot::MarkerShape::Cross,
        MarkerShape::Plus => egui_plot::MarkerShape::Plus,
        MarkerShape::Up => egui_plot::MarkerShape::Up,
        MarkerShape::Down => egui_plot::MarkerShape::Down,
        MarkerShape::Left => egui_plot::MarkerShape::Left,
        MarkerShape::Right => egui_plot::MarkerShape::Right,
        MarkerShape::Asterisk => egui_plot::MarkerShape::Asterisk,
    }
}
