use std::sync::Arc;

use crate::referee::CareerReferee;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub referee: Arc<CareerReferee>,
}
