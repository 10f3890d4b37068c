use serde::{Deserialize, Serialize};

/// Body of `POST /matches/{external_id}/toggle`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToggleResponse {
    /// Watched flag after the toggle, as persisted by the server
    pub watched: bool,
}
