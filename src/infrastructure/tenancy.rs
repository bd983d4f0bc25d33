//! Tenancy settings captured at startup.

use crate::domain::ports::TenancyConfig;

/// Multi-tenancy flag fixed for the lifetime of the process.
///
/// Loaded from `MULTI_TENANCY_ENABLED` by [`crate::config::Config`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticTenancyConfig {
    enabled: bool,
}

impl StaticTenancyConfig {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl TenancyConfig for StaticTenancyConfig {
    fn is_multi_tenancy_enabled(&self) -> bool {
        self.enabled
    }
}
