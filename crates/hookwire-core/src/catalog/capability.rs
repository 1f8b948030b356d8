use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, CapabilityId, CapabilityStatus, tags};
use crate::typed::Payload;

/// `capability.requested`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityRequested {
    #[serde(rename = "accountID")]
    pub account_id: AccountId,
    #[serde(rename = "capabilityID")]
    pub capability_id: CapabilityId,
}

impl Payload for CapabilityRequested {
    const EVENT_TYPE: &'static str = tags::CAPABILITY_REQUESTED;
}

/// `capability.updated`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityUpdated {
    #[serde(rename = "accountID")]
    pub account_id: AccountId,
    #[serde(rename = "capabilityID")]
    pub capability_id: CapabilityId,
    pub status: CapabilityStatus,
    #[serde(rename = "foreignID", default, skip_serializing_if = "Option::is_none")]
    pub foreign_id: Option<String>,
}

impl Payload for CapabilityUpdated {
    const EVENT_TYPE: &'static str = tags::CAPABILITY_UPDATED;
}
