use crate::processors::Dataset;
use std::sync::Arc;

/// Immutable state shared by every handler.
#[derive(Debug)]
pub struct AppState {
    pub dataset: Dataset,
    /// Base URL for links on the index page
    pub public_url: String,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(dataset: Dataset, public_url: impl Into<String>) -> Self {
        let public_url = public_url.into().trim_end_matches('/').to_string();
        Self {
            dataset,
            public_url,
        }
    }

    pub fn shared(self) -> SharedState {
        Arc::new(self)
    }
}
