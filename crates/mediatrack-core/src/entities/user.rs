//! User display projection - the slice of the users table this service reads

use uuid::Uuid;

/// Display info for a user referenced by activity records.
///
/// The activity log trusts user ids supplied by the auth boundary; this
/// projection only exists to resolve names for stats output. A user that was
/// deleted after logging simply fails to resolve and callers substitute a
/// placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDisplay {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl UserDisplay {
    pub fn new(id: Uuid, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}
