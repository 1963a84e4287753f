//! Tenant users.

use serde::{Deserialize, Serialize};

use super::forms::JsonFormsValue;
use crate::id::{TenantId, TenantUserId};

/// A user registered in a tenant, with free-form metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantUser {
    /// Tenant user identifier.
    pub id: TenantUserId,
    /// Owning tenant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<TenantId>,
    /// Metadata captured through a dynamic form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonFormsValue>,
}

impl TenantUser {
    /// A tenant user without metadata.
    #[must_use]
    pub fn new(id: TenantUserId) -> Self {
        Self {
            id,
            tenant_id: None,
            metadata: None,
        }
    }
}
