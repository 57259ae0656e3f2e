//! Business settings served from the loaded configuration

use crate::config::FileBusinessConfig;
use async_trait::async_trait;
use autoreply_application::ports::business_settings::{BusinessSettingsPort, SettingsError};
use autoreply_domain::{BusinessId, BusinessInfo, RawBrandSettings};
use std::collections::HashMap;

/// Fixed set of business profiles, usually the single `[business]` section
#[derive(Debug, Clone, Default)]
pub struct StaticBusinessSettings {
    businesses: HashMap<BusinessId, (RawBrandSettings, BusinessInfo)>,
}

impl StaticBusinessSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &FileBusinessConfig) -> Self {
        Self::new().with_business(
            config.business_id(),
            config.raw_settings(),
            config.business_info(),
        )
    }

    pub fn with_business(
        mut self,
        business_id: BusinessId,
        settings: RawBrandSettings,
        info: BusinessInfo,
    ) -> Self {
        self.businesses.insert(business_id, (settings, info));
        self
    }
}

#[async_trait]
impl BusinessSettingsPort for StaticBusinessSettings {
    async fn load(
        &self,
        business_id: &BusinessId,
    ) -> Result<(RawBrandSettings, BusinessInfo), SettingsError> {
        self.businesses
            .get(business_id)
            .cloned()
            .ok_or_else(|| SettingsError::UnknownBusiness(business_id.clone()))
    }
}
