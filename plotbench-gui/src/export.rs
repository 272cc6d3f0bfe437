//! Standalone page export. The document is rendered to SVG once and
//! bundled with its own serialized form, so the saved file both shows
//! the chart and can be re-imported by tooling that reads the spec
//! block.

use std::collections::HashMap;
use std::ops::Range;

use plotdoc::{Color, LegendPosition, MarkerShape, PlotDocument, RendererId, RendererShape, SpanDimension};
use plotters::prelude::*;
// `plotdoc::Color` shadows the plotters color trait of the same name.
use plotters::style::Color as _;

const EXPORT_WIDTH: u32 = 900;
const EXPORT_HEIGHT: u32 = 600;

/// Renders the document into a self-contained HTML page.
pub fn document_html(document: &PlotDocument) -> Result<String, String> {
    let svg = document_svg(document, EXPORT_WIDTH, EXPORT_HEIGHT)?;
    let spec = serde_json::to_string_pretty(document).map_err(|err| err.to_string())?;
    // A literal "</" inside the inline block would end the script
    // element early.
    let spec = spec.replace("</", "<\\/");
    Ok(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         </head>\n\
         <body>\n\
         {svg}\n\
         <script type=\"application/json\" id=\"plot-spec\">\n\
         {spec}\n\
         </script>\n\
         </body>\n\
         </html>\n",
        title = escape_text(&document.title),
        svg = svg,
        spec = spec
    ))
}

/// Renders the visible renderers to an SVG string. Hidden ones are left
/// out entirely, legend included.
pub fn document_svg(document: &PlotDocument, width: u32, height: u32) -> Result<String, String> {
    let (x_range, y_range) = data_ranges(document);
    let labels = entry_labels(document);
    let mut labeled = false;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(|err| err.to_string())?;
        let text_color = RGBColor(40, 40, 40);

        let mut builder = ChartBuilder::on(&root);
        builder
            .margin(20)
            .set_label_area_size(LabelAreaPosition::Left, 50)
            .set_label_area_size(LabelAreaPosition::Bottom, 40);
        if !document.title.is_empty() {
            builder.caption(
                &document.title,
                ("sans-serif", 24).into_font().color(&text_color),
            );
        }
        let mut chart = builder
            .build_cartesian_2d(x_range.clone(), y_range.clone())
            .map_err(|err| err.to_string())?;

        chart
            .configure_mesh()
            .x_desc(&document.x_axis_label)
            .y_desc(&document.y_axis_label)
            .axis_desc_style(("sans-serif", 16).into_font().color(&text_color))
            .label_style(("sans-serif", 12).into_font().color(&text_color))
            .axis_style(&text_color)
            .draw()
            .map_err(|err| err.to_string())?;

        for renderer in document.renderers() {
            if !renderer.visible {
                continue;
            }
            let label = labels.get(&renderer.id).copied();
            match &renderer.shape {
                RendererShape::Line(line) => {
                    let style = line_style(&line.line_color, line.line_alpha, line.line_width);
                    let series = chart
                        .draw_series(LineSeries::new(finite_points(&line.points), style))
                        .map_err(|err| err.to_string())?;
                    if let Some(label) = label {
                        labeled = true;
                        series.label(label).legend(move |(x, y)| {
                            PathElement::new(vec![(x, y), (x + 20, y)], style)
                        });
                    }
                }
                RendererShape::Scatter(scatter) => {
                    let fill = fill_style(&scatter.fill_color, scatter.fill_alpha);
                    let size = (scatter.size / 2.0).round().max(1.0) as i32;
                    let points = finite_points(&scatter.points);
                    let series = match scatter.marker {
                        MarkerShape::Circle => chart.draw_series(
                            points.iter().map(|&(x, y)| Circle::new((x, y), size, fill)),
                        ),
                        MarkerShape::Cross | MarkerShape::Plus | MarkerShape::Asterisk => chart
                            .draw_series(
                                points.iter().map(|&(x, y)| Cross::new((x, y), size, fill)),
                            ),
                        MarkerShape::Up
                        | MarkerShape::Down
                        | MarkerShape::Left
                        | MarkerShape::Right => chart.draw_series(
                            points
                                .iter()
                                .map(|&(x, y)| TriangleMarker::new((x, y), size, fill)),
                        ),
                        MarkerShape::Square | MarkerShape::Diamond => {
                            chart.draw_series(points.iter().map(|&(x, y)| {
                                EmptyElement::at((x, y))
                                    + Rectangle::new([(-size, -size), (size, size)], fill)
                            }))
                        }
                    }
                    .map_err(|err| err.to_string())?;
                    if let Some(label) = label {
                        labeled = true;
                        series
                            .label(label)
                            .legend(move |(x, y)| Circle::new((x + 10, y), 4, fill));
                    }
                }
                RendererShape::Span(span) => {
                    let style = line_style(&span.line_color, span.line_alpha, span.line_width);
                    let segment = match span.dimension {
                        SpanDimension::Height => vec![
                            (span.location, y_range.start),
                            (span.location, y_range.end),
                        ],
                        SpanDimension::Width => vec![
                            (x_range.start, span.location),
                            (x_range.end, span.location),
                        ],
                    };
                    let series = chart
                        .draw_series(LineSeries::new(segment, style))
                        .map_err(|err| err.to_string())?;
                    if let Some(label) = label {
                        labeled = true;
                        series.label(label).legend(move |(x, y)| {
                            PathElement::new(vec![(x, y), (x + 20, y)], style)
                        });
                    }
                }
                RendererShape::Box(region) => {
                    let left = region.left.unwrap_or(x_range.start);
                    let right = region.right.unwrap_or(x_range.end);
                    let bottom = region.bottom.unwrap_or(y_range.start);
                    let top = region.top.unwrap_or(y_range.end);
                    let fill = fill_style(&region.fill_color, region.fill_alpha);
                    let border =
                        line_style(&region.line_color, region.line_alpha, region.line_width);
                    let series = chart
                        .draw_series([
                            Rectangle::new([(left, bottom), (right, top)], fill),
                            Rectangle::new([(left, bottom), (right, top)], border),
                        ])
                        .map_err(|err| err.to_string())?;
                    if let Some(label) = label {
                        labeled = true;
                        series.label(label).legend(move |(x, y)| {
                            Rectangle::new([(x, y - 5), (x + 20, y + 5)], fill)
                        });
                    }
                }
            }
        }

        if labeled {
            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(RGBColor(120, 120, 120))
                .label_font(("sans-serif", 14).into_font().color(&text_color))
                .position(series_label_position(document.legend.position))
                .margin(12)
                .draw()
                .map_err(|err| err.to_string())?;
        }
        root.present().map_err(|err| err.to_string())?;
    }
    Ok(svg)
}

/// Label each entry's first renderer carries in the exported legend.
fn entry_labels(document: &PlotDocument) -> HashMap<RendererId, &str> {
    document
        .legend
        .entries()
        .iter()
        .filter_map(|entry| Some((*entry.renderers.first()?, entry.label.as_str())))
        .collect()
}

fn series_label_position(position: LegendPosition) -> SeriesLabelPosition {
    match position {
        LegendPosition::TopLeft => SeriesLabelPosition::UpperLeft,
        LegendPosition::TopRight => SeriesLabelPosition::UpperRight,
        LegendPosition::BottomLeft => SeriesLabelPosition::LowerLeft,
        LegendPosition::BottomRight => SeriesLabelPosition::LowerRight,
    }
}

fn line_style(color: &Color, alpha: f64, width: f64) -> ShapeStyle {
    let rgb = color.rgb();
    RGBColor(rgb.r, rgb.g, rgb.b)
        .mix(alpha)
        .stroke_width(width.round().max(1.0) as u32)
}

fn fill_style(color: &Color, alpha: f64) -> ShapeStyle {
    let rgb = color.rgb();
    RGBColor(rgb.r, rgb.g, rgb.b).mix(alpha).filled()
}

fn finite_points(points: &[[f64; 2]]) -> Vec<(f64, f64)> {
    points
        .iter()
        .filter(|point| point[0].is_finite() && point[1].is_finite())
        .map(|point| (point[0], point[1]))
        .collect()
}

/// Axis ranges covering every visible renderer, padded so data does not
/// sit on the frame. An empty document falls back to the unit range.
fn data_ranges(document: &PlotDocument) -> (Range<f64>, Range<f64>) {
    let mut x = Extent::new();
    let mut y = Extent::new();
    for renderer in document.renderers() {
        if !renderer.visible {
            continue;
        }
        match &renderer.shape {
            RendererShape::Line(line) => {
                for point in &line.points {
                    x.add(point[0]);
                    y.add(point[1]);
                }
            }
            RendererShape::Scatter(scatter) => {
                for point in &scatter.points {
                    x.add(point[0]);
                    y.add(point[1]);
                }
            }
            RendererShape::Span(span) => match span.dimension {
                SpanDimension::Height => x.add(span.location),
                SpanDimension::Width => y.add(span.location),
            },
            RendererShape::Box(region) => {
                if let Some(left) = region.left {
                    x.add(left);
                }
                if let Some(right) = region.right {
                    x.add(right);
                }
                if let Some(bottom) = region.bottom {
                    y.add(bottom);
                }
                if let Some(top) = region.top {
                    y.add(top);
                }
            }
        }
    }
    (x.padded(), y.padded())
}

struct Extent {
    min: f64,
    max: f64,
}

impl Extent {
    fn new() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    fn add(&mut self, value: f64) {
        if value.is_finite() {
            self.min = self.min.min(value);
            self.max = self.max.max(value);
        }
    }

    fn padded(self) -> Range<f64> {
        if self.min > self.max {
            return 0.0..1.0;
        }
        if self.min == self.max {
            return (self.min - 0.5)..(self.max + 0.5);
        }
        let pad = (self.max - self.min) * 0.05;
        (self.min - pad)..(self.max + pad)
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
