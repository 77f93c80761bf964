use serde::{Deserialize, Serialize};

/// Standard `{ "status", "error", "data" }` wrapper used by every upstream
/// response.
///
/// `data` is `None` when upstream omits it or sends `null`; callers decide
/// whether that means "empty" or "failed".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: Option<String>,
    pub error: Option<String>,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}
