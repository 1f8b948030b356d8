use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, RepresentativeId, tags};
use crate::typed::Payload;

/// `representative.created`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepresentativeCreated {
    #[serde(rename = "accountID")]
    pub account_id: AccountId,
    #[serde(rename = "representativeID")]
    pub representative_id: RepresentativeId,
}

impl Payload for RepresentativeCreated {
    const EVENT_TYPE: &'static str = tags::REPRESENTATIVE_CREATED;
}

/// `representative.updated`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepresentativeUpdated {
    #[serde(rename = "accountID")]
    pub account_id: AccountId,
    #[serde(rename = "representativeID")]
    pub representative_id: RepresentativeId,
}

impl Payload for RepresentativeUpdated {
    const EVENT_TYPE: &'static str = tags::REPRESENTATIVE_UPDATED;
}

/// `representative.disconnected`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepresentativeDisconnected {
    #[serde(rename = "accountID")]
    pub account_id: AccountId,
    #[serde(rename = "representativeID")]
    pub representative_id: RepresentativeId,
}

impl Payload for RepresentativeDisconnected {
    const EVENT_TYPE: &'static str = tags::REPRESENTATIVE_DISCONNECTED;
}
