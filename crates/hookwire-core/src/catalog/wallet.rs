use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, TransactionId, WalletId, WalletTransactionStatus, tags};
use crate::typed::Payload;

/// `balance.updated`
///
/// Carries no amount; fetch the wallet to read the new balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceUpdated {
    #[serde(rename = "accountID")]
    pub account_id: AccountId,
    #[serde(rename = "walletID")]
    pub wallet_id: WalletId,
}

impl Payload for BalanceUpdated {
    const EVENT_TYPE: &'static str = tags::BALANCE_UPDATED;
}

/// `walletTransaction.updated`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletTransactionUpdated {
    #[serde(rename = "accountID")]
    pub account_id: AccountId,
    #[serde(rename = "walletID")]
    pub wallet_id: WalletId,
    #[serde(rename = "transactionID")]
    pub transaction_id: TransactionId,
    pub status: WalletTransactionStatus,
}

impl Payload for WalletTransactionUpdated {
    const EVENT_TYPE: &'static str = tags::WALLET_TRANSACTION_UPDATED;
}
