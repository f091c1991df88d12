use serde::{Deserialize, Serialize};

/// A curated Country Path puzzle. Only meaningful when both names resolve.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidPair {
    pub start: String,
    pub end: String,
}

impl ValidPair {
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}
