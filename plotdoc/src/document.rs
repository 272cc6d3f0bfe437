use serde::{Deserialize, Serialize};

use crate::legend::Legend;
use crate::renderer::{Renderer, RendererId, RendererShape};

/// The plot being edited: titles, renderers and the shared legend.
///
/// Renderer ids are handed out monotonically and never reused within a
/// document. The renderer list and the legend are only mutated through the
/// methods here and the legend's replace operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotDocument {
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub legend: Legend,
    renderers: Vec<Renderer>,
    next_renderer_id: u64,
}

impl Default for PlotDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl PlotDocument {
    pub fn new() -> Self {
        Self {
            title: "Title".to_string(),
            x_axis_label: "X".to_string(),
            y_axis_label: "Y".to_string(),
            legend: Legend::new(),
            renderers: Vec::new(),
            next_renderer_id: 0,
        }
    }

    pub fn add_renderer(&mut self, shape: RendererShape) -> RendererId {
        let id = RendererId(self.next_renderer_id);
        self.next_renderer_id += 1;
        self.renderers.push(Renderer {
            id,
            visible: true,
            shape,
        });
        id
    }

    pub fn remove_renderer(&mut self, id: RendererId) {
        self.renderers.retain(|renderer| renderer.id != id);
    }

    pub fn renderers(&self) -> &[Renderer] {
        &self.renderers
    }

    pub fn renderer(&self, id: RendererId) -> Option<&Renderer> {
        self.renderers.iter().find(|renderer| renderer.id == id)
    }

    pub fn renderer_mut(&mut self, id: RendererId) -> Option<&mut Renderer> {
        self.renderers.iter_mut().find(|renderer| renderer.id == id)
    }

    /// Flips visibility of every renderer behind the legend entry at
    /// `entry_index`. Out-of-range indices are ignored.
    pub fn toggle_entry_visibility(&mut self, entry_index: usize) {
        let Some(entry) = self.legend.entries().get(entry_index) else {
            return;
        };
        let ids: Vec<RendererId> = entry.renderers.clone();
        for id in ids {
            if let Some(renderer) = self.renderer_mut(id) {
                renderer.visible = !renderer.visible;
            }
        }
    }

    /// File name the exported document is saved under.
    pub fn file_name(&self) -> String {
        format!("{}.html", self.title)
    }
}
