use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, TransferId, TransferStatus, tags};
use crate::typed::Payload;

/// `transfer.created`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferCreated {
    #[serde(rename = "accountID")]
    pub account_id: AccountId,
    #[serde(rename = "transferID")]
    pub transfer_id: TransferId,
    pub status: TransferStatus,
}

impl Payload for TransferCreated {
    const EVENT_TYPE: &'static str = tags::TRANSFER_CREATED;
}

/// `transfer.updated`, sent on every status change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferUpdated {
    #[serde(rename = "accountID")]
    pub account_id: AccountId,
    #[serde(rename = "transferID")]
    pub transfer_id: TransferId,
    pub status: TransferStatus,
}

impl Payload for TransferUpdated {
    const EVENT_TYPE: &'static str = tags::TRANSFER_UPDATED;
}
