use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT payload used for authentication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: Uuid,   // subject, serialized in string form
    pub authorized: bool,
    pub is_admin: bool,  // always false, there is no escalation path
    pub exp: usize,      // expires at (unix timestamp)
}
