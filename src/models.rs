use serde::{Deserialize, Serialize};

/// A todo item
///
/// `id` is `None` until the store assigns one on creation. Request bodies may
/// carry an id, but the store always ignores it in favour of its own counter
/// (POST) or the path parameter (PUT).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Todo {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: String,
}

impl Todo {
    #[cfg(test)]
    pub fn new(summary: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            summary: summary.into(),
            description: description.into(),
        }
    }

    pub fn with_id(id: i64, summary: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            summary: summary.into(),
            description: description.into(),
        }
    }
}

/// The red/green counter pair, always replaced as a whole
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CounterPair {
    #[serde(default)]
    pub red: i32,
    #[serde(default)]
    pub green: i32,
}
