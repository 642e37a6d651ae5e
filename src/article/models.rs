use serde::{Deserialize, Serialize};

use super::{FALLBACK_TITLE, FALLBACK_URL};

/// A randomly drawn article: display title plus a viewable address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomArticle {
    pub title: String,
    pub url: String,
}

impl RandomArticle {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    /// The fixed substitute returned when a fetch fails.
    pub fn fallback() -> Self {
        Self::new(FALLBACK_TITLE, FALLBACK_URL)
    }
}
