//! Shared application state.

use std::sync::Arc;

use crate::application::services::AccountService;

/// State injected into every handler.
///
/// The collaborators live inside [`AccountService`]; cloning the state only
/// bumps a reference count.
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService>,
}

impl AppState {
    pub fn new(account_service: Arc<AccountService>) -> Self {
        Self { account_service }
    }
}
