//! Status enumerations embedded in webhook payloads.
//!
//! These are closed enumerations: a status string outside the listed values
//! fails the typed decode with `PayloadMismatch` instead of being coerced.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferStatus {
    Created,
    Queued,
    Pending,
    Completed,
    Failed,
    Reversed,
    Canceled,
}

impl TransferStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferStatus::Created => "created",
            TransferStatus::Queued => "queued",
            TransferStatus::Pending => "pending",
            TransferStatus::Completed => "completed",
            TransferStatus::Failed => "failed",
            TransferStatus::Reversed => "reversed",
            TransferStatus::Canceled => "canceled",
        }
    }

    /// Completed, failed, reversed and canceled transfers do not move again.
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            TransferStatus::Completed
                | TransferStatus::Failed
                | TransferStatus::Reversed
                | TransferStatus::Canceled
        )
    }
}

/// Verification state of a linked bank account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BankAccountStatus {
    New,
    Verified,
    VerificationFailed,
    Pending,
    Errored,
}

impl BankAccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BankAccountStatus::New => "new",
            BankAccountStatus::Verified => "verified",
            BankAccountStatus::VerificationFailed => "verificationFailed",
            BankAccountStatus::Pending => "pending",
            BankAccountStatus::Errored => "errored",
        }
    }
}

/// State of an account capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CapabilityStatus {
    Enabled,
    Disabled,
    Pending,
    InReview,
}

impl CapabilityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CapabilityStatus::Enabled => "enabled",
            CapabilityStatus::Disabled => "disabled",
            CapabilityStatus::Pending => "pending",
            CapabilityStatus::InReview => "in-review",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletTransactionStatus {
    Pending,
    Completed,
    Failed,
    Canceled,
}

impl WalletTransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WalletTransactionStatus::Pending => "pending",
            WalletTransactionStatus::Completed => "completed",
            WalletTransactionStatus::Failed => "failed",
            WalletTransactionStatus::Canceled => "canceled",
        }
    }
}

macro_rules! display_as_str {
    ($($status:ty),+) => {
        $(
            impl fmt::Display for $status {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_as_str!(
    TransferStatus,
    BankAccountStatus,
    CapabilityStatus,
    WalletTransactionStatus
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::created(TransferStatus::Created)]
    #[case::queued(TransferStatus::Queued)]
    #[case::pending(TransferStatus::Pending)]
    #[case::completed(TransferStatus::Completed)]
    #[case::failed(TransferStatus::Failed)]
    #[case::reversed(TransferStatus::Reversed)]
    #[case::canceled(TransferStatus::Canceled)]
    fn transfer_status_wire_value_matches_as_str(#[case] status: TransferStatus) {
        let wire = serde_json::to_string(&status).unwrap();
        assert_eq!(wire, format!("\"{}\"", status.as_str()));
    }

    #[test]
    fn mixed_case_statuses_use_platform_spelling() {
        assert_eq!(
            serde_json::to_string(&BankAccountStatus::VerificationFailed).unwrap(),
            r#""verificationFailed""#
        );
        assert_eq!(
            serde_json::to_string(&CapabilityStatus::InReview).unwrap(),
            r#""in-review""#
        );
        assert_eq!(CapabilityStatus::InReview.to_string(), "in-review");
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(serde_json::from_str::<TransferStatus>(r#""teleported""#).is_err());
        assert!(serde_json::from_str::<TransferStatus>(r#""Created""#).is_err());
        assert!(serde_json::from_str::<TransferStatus>("1").is_err());
    }

    #[test]
    fn final_transfer_states() {
        assert!(!TransferStatus::Created.is_final());
        assert!(!TransferStatus::Pending.is_final());
        assert!(TransferStatus::Completed.is_final());
        assert!(TransferStatus::Reversed.is_final());
    }
}
