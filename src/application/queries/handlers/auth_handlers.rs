//! Auth Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{SessionClaims, TokenServicePort};
use crate::application::queries::GetCurrentUser;

/// GetCurrentUser Handler
pub struct GetCurrentUserHandler {
    tokens: Arc<dyn TokenServicePort>,
}

impl GetCurrentUserHandler {
    pub fn new(tokens: Arc<dyn TokenServicePort>) -> Self {
        Self { tokens }
    }

    pub fn handle(&self, query: GetCurrentUser) -> Result<SessionClaims, ApplicationError> {
        Ok(self.tokens.decode(&query.token)?)
    }
}
