use std::sync::Arc;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::app::repository::ProductRepository;

/// Shared state handed to every handler: the repository handle injected at
/// startup. No module-level connection singleton exists.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn ProductRepository>,
}

/// JSON body for error and confirmation responses.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct Message {
    pub message: String,
}
