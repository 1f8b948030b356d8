use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, tags};
use crate::typed::Payload;

/// `account.created`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountCreated {
    #[serde(rename = "accountID")]
    pub account_id: AccountId,
}

impl Payload for AccountCreated {
    const EVENT_TYPE: &'static str = tags::ACCOUNT_CREATED;
}

/// `account.updated`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountUpdated {
    #[serde(rename = "accountID")]
    pub account_id: AccountId,
    /// The integrator's own identifier for the account, when one was set.
    #[serde(rename = "foreignID", default, skip_serializing_if = "Option::is_none")]
    pub foreign_id: Option<String>,
}

impl Payload for AccountUpdated {
    const EVENT_TYPE: &'static str = tags::ACCOUNT_UPDATED;
}

/// `account.disconnected`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDisconnected {
    #[serde(rename = "accountID")]
    pub account_id: AccountId,
    #[serde(rename = "foreignID", default, skip_serializing_if = "Option::is_none")]
    pub foreign_id: Option<String>,
}

impl Payload for AccountDisconnected {
    const EVENT_TYPE: &'static str = tags::ACCOUNT_DISCONNECTED;
}
