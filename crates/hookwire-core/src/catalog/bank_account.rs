use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, BankAccountId, BankAccountStatus, tags};
use crate::typed::Payload;

/// `bankAccount.created`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccountCreated {
    #[serde(rename = "accountID")]
    pub account_id: AccountId,
    #[serde(rename = "bankAccountID")]
    pub bank_account_id: BankAccountId,
}

impl Payload for BankAccountCreated {
    const EVENT_TYPE: &'static str = tags::BANK_ACCOUNT_CREATED;
}

/// `bankAccount.updated`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccountUpdated {
    #[serde(rename = "accountID")]
    pub account_id: AccountId,
    #[serde(rename = "bankAccountID")]
    pub bank_account_id: BankAccountId,
    pub status: BankAccountStatus,
    /// Human readable explanation, set when verification failed or errored.
    #[serde(rename = "statusReason", default, skip_serializing_if = "Option::is_none")]
    pub status_reason: Option<String>,
}

impl Payload for BankAccountUpdated {
    const EVENT_TYPE: &'static str = tags::BANK_ACCOUNT_UPDATED;
}

/// `bankAccount.deleted`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccountDeleted {
    #[serde(rename = "accountID")]
    pub account_id: AccountId,
    #[serde(rename = "bankAccountID")]
    pub bank_account_id: BankAccountId,
}

impl Payload for BankAccountDeleted {
    const EVENT_TYPE: &'static str = tags::BANK_ACCOUNT_DELETED;
}
