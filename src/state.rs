//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::Allocator;

#[derive(Clone)]
pub struct AppState {
    pub allocator: Arc<Allocator>,
}

impl AppState {
    pub fn new(allocator: Arc<Allocator>) -> Self {
        Self { allocator }
    }
}
