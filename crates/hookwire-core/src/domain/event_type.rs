//! EventType - webhook の種類を表すタグ
//!
//! ワイヤ上の `eventType` は開いた集合です。parser はカタログを知らず、
//! 未知のタグもそのまま運びます。既知のタグは [`tags`] に定数として置き、
//! `match event.event_type().as_str()` で分岐できるようにしています。

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Wire values of every tag in the payload catalog.
pub mod tags {
    pub const ACCOUNT_CREATED: &str = "account.created";
    pub const ACCOUNT_UPDATED: &str = "account.updated";
    pub const ACCOUNT_DISCONNECTED: &str = "account.disconnected";
    pub const BALANCE_UPDATED: &str = "balance.updated";
    pub const BANK_ACCOUNT_CREATED: &str = "bankAccount.created";
    pub const BANK_ACCOUNT_UPDATED: &str = "bankAccount.updated";
    pub const BANK_ACCOUNT_DELETED: &str = "bankAccount.deleted";
    pub const CAPABILITY_REQUESTED: &str = "capability.requested";
    pub const CAPABILITY_UPDATED: &str = "capability.updated";
    pub const PAYMENT_METHOD_ENABLED: &str = "paymentMethod.enabled";
    pub const PAYMENT_METHOD_DISABLED: &str = "paymentMethod.disabled";
    pub const REPRESENTATIVE_CREATED: &str = "representative.created";
    pub const REPRESENTATIVE_UPDATED: &str = "representative.updated";
    pub const REPRESENTATIVE_DISCONNECTED: &str = "representative.disconnected";
    pub const TRANSFER_CREATED: &str = "transfer.created";
    pub const TRANSFER_UPDATED: &str = "transfer.updated";
    pub const WALLET_TRANSACTION_UPDATED: &str = "walletTransaction.updated";

    pub const ALL: &[&str] = &[
        ACCOUNT_CREATED,
        ACCOUNT_UPDATED,
        ACCOUNT_DISCONNECTED,
        BALANCE_UPDATED,
        BANK_ACCOUNT_CREATED,
        BANK_ACCOUNT_UPDATED,
        BANK_ACCOUNT_DELETED,
        CAPABILITY_REQUESTED,
        CAPABILITY_UPDATED,
        PAYMENT_METHOD_ENABLED,
        PAYMENT_METHOD_DISABLED,
        REPRESENTATIVE_CREATED,
        REPRESENTATIVE_UPDATED,
        REPRESENTATIVE_DISCONNECTED,
        TRANSFER_CREATED,
        TRANSFER_UPDATED,
        WALLET_TRANSACTION_UPDATED,
    ];
}

/// The `eventType` discriminator of a webhook envelope.
///
/// Known tags are stored without allocating (`from_static`); tags read off
/// the wire are owned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventType(Cow<'static, str>);

impl EventType {
    pub const fn from_static(tag: &'static str) -> Self {
        Self(Cow::Borrowed(tag))
    }

    pub fn new(tag: impl Into<String>) -> Self {
        Self(Cow::Owned(tag.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the tag belongs to the payload catalog of this crate.
    ///
    /// `false` is not an error: newer senders may emit tags this build has
    /// never heard of.
    pub fn is_known(&self) -> bool {
        tags::ALL.contains(&self.as_str())
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventType {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for EventType {
    fn from(tag: String) -> Self {
        Self::new(tag)
    }
}

impl PartialEq<str> for EventType {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for EventType {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
