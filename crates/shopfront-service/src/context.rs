//! Request context carrying the authenticated user.

use uuid::Uuid;

/// Context for a request that presented a valid session token.
///
/// Built from verified token claims only; it does not imply the user
/// still exists in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    /// The authenticated user's ID (token subject).
    pub user_id: Uuid,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }
}
