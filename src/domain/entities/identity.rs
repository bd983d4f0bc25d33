//! Authenticated identity entity.

use serde::{Deserialize, Serialize};

/// An identity confirmed by the identity service.
///
/// Carried inside the session ticket and handed to handlers of protected
/// pages through a request extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub user_id: i64,
    pub user_name: String,
    /// `None` for host users that do not belong to any tenant.
    #[serde(default)]
    pub tenant_id: Option<i64>,
    #[serde(default)]
    pub tenancy_name: Option<String>,
}
