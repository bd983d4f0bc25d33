//! Port for multi-tenancy settings.

/// Exposes whether the deployment is multi-tenant.
#[cfg_attr(test, mockall::automock)]
pub trait TenancyConfig: Send + Sync {
    fn is_multi_tenancy_enabled(&self) -> bool;
}
