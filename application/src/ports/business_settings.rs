//! Business settings port

use async_trait::async_trait;
use autoreply_domain::{BusinessId, BusinessInfo, RawBrandSettings};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    #[error("Unknown business: {0}")]
    UnknownBusiness(BusinessId),

    #[error("Settings unavailable: {0}")]
    Unavailable(String),
}

/// Source of per-business brand settings and profile
#[async_trait]
pub trait BusinessSettingsPort: Send + Sync {
    async fn load(
        &self,
        business_id: &BusinessId,
    ) -> Result<(RawBrandSettings, BusinessInfo), SettingsError>;
}
