use axum::{extract::FromRequestParts, http::request::Parts};

use crate::server::error::access::AccessError;

/// The authenticated user for the current request.
///
/// Upstream authentication middleware (session layer, reverse proxy, or API
/// gateway) is expected to insert this as a request extension after
/// validating credentials. Handlers taking `CurrentUser` reject requests
/// without one before any resolution work happens.
#[derive(Clone, Copy, Debug)]
pub struct CurrentUser {
    pub user_id: i32,
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AccessError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .copied()
            .ok_or(AccessError::Unauthenticated)
    }
}
