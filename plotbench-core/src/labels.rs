use std::collections::HashSet;

/// Hands out display labels that are unique for the lifetime of the
/// document. A label stays consumed even after its overlay is deleted;
/// only a document reset releases the pool.
#[derive(Debug, Default)]
pub struct LabelPool {
    used: HashSet<String>,
}

impl LabelPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `requested` if free, otherwise bumps its trailing integer
    /// suffix (appending " 1" when there is none) until a free label is
    /// found. The result is recorded as used.
    pub fn allocate(&mut self, requested: &str) -> String {
        let mut label = requested.to_string();
        while self.used.contains(&label) {
            label = bump_label(&label);
        }
        self.used.insert(label.clone());
        label
    }

    pub fn is_used(&self, label: &str) -> bool {
        self.used.contains(label)
    }

    pub fn reset(&mut self) {
        self.used.clear();
    }
}

fn bump_label(label: &str) -> String {
    if let Some((head, tail)) = label.rsplit_once(' ') {
        if let Ok(number) = tail.parse::<u64>() {
            return format!("{} {}", head, number + 1);
        }
    }
    format!("{} 1", label)
}
