use std::sync::Arc;

use crate::catalog::CareerCatalog;
use crate::extractor::SkillMatcher;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is read-only after startup, so cloning per request is cheap
/// and handlers need no synchronization.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CareerCatalog>,
    pub matcher: Arc<SkillMatcher>,
}
