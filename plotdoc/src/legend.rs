use std::fmt;

use serde::{Deserialize, Serialize};

use crate::renderer::RendererId;

/// One legend row: a label and the renderers it stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub renderers: Vec<RendererId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl LegendPosition {
    pub const ALL: [LegendPosition; 4] = [
        LegendPosition::TopLeft,
        LegendPosition::TopRight,
        LegendPosition::BottomLeft,
        LegendPosition::BottomRight,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LegendPosition::TopLeft => "top-left",
            LegendPosition::TopRight => "top-right",
            LegendPosition::BottomLeft => "bottom-left",
            LegendPosition::BottomRight => "bottom-right",
        }
    }
}

impl Default for LegendPosition {
    fn default() -> Self {
        LegendPosition::TopLeft
    }
}

impl fmt::Display for LegendPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The shared legend of a document. The entry list is only ever written as a
/// whole; every replacement bumps the revision so views can detect flushes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Legend {
    pub position: LegendPosition,
    entries: Vec<LegendEntry>,
    #[serde(skip)]
    revision: u64,
}

impl Legend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    pub fn replace_entries(&mut self, entries: Vec<LegendEntry>) {
        self.entries = entries;
        self.revision += 1;
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}
