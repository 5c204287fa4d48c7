use std::sync::OnceLock;

// Process-wide slot for the discovered model name. Written once by discovery,
// read by every request; readers see either nothing or the published name.
#[derive(Default, Debug)]
pub struct ModelRegistry {
    slot: OnceLock<String>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // First publish wins; later calls are ignored.
    pub fn publish(&self, name: String) {
        if self.slot.set(name).is_err() {
            tracing::debug!("model already published, ignoring");
        }
    }

    pub fn get(&self) -> Option<&str> {
        self.slot.get().map(String::as_str)
    }
}
