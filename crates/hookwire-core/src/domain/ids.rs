//! Resource identifiers (strongly-typed IDs).
//!
//! プラットフォームが払い出す ID はワイヤ上ではただの文字列（通常は UUID）です。
//! `Id<T>` は文字列をそのまま保持しつつ、Phantom type で
//! `AccountId` と `TransferId` の取り違えをコンパイル時に防ぎます。
//!
//! ## 文字列をそのまま保持する理由
//! 送信側が UUID 以外の値を送ってきても envelope の parse は失敗させません。
//! UUID として扱いたい場合は `as_uuid()` で明示的に変換します。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// IdMarker は各 ID 型のマーカー trait
pub trait IdMarker: Send + Sync + 'static {
    /// Debug 出力やエラーメッセージで使うリソース名（例: "account"）
    fn resource() -> &'static str;
}

/// ジェネリック ID 型
///
/// # 例
/// ```ignore
/// let account: AccountId = Id::new("22222222-2222-2222-2222-222222222222");
/// let transfer: TransferId = Id::generate();
/// // account と transfer は異なる型なので、混同できない
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T: IdMarker> {
    value: String,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _marker: PhantomData,
        }
    }

    /// ランダムな v4 UUID から Id を作成
    pub fn generate() -> Self {
        Self::from(Uuid::new_v4())
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// UUID として解釈する（ワイヤ上の値が UUID でなければエラー）
    pub fn as_uuid(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.value)
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl<T: IdMarker> From<Uuid> for Id<T> {
    fn from(uuid: Uuid) -> Self {
        Self::new(uuid.to_string())
    }
}

impl<T: IdMarker> From<&str> for Id<T> {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<T: IdMarker> From<String> for Id<T> {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T: IdMarker> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", T::resource(), self.value)
    }
}

// ========================================
// マーカー型の定義
// ========================================

macro_rules! id_marker {
    ($marker:ident, $resource:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $marker {}

        impl IdMarker for $marker {
            fn resource() -> &'static str {
                $resource
            }
        }
    };
}

id_marker!(Event, "event");
id_marker!(Account, "account");
id_marker!(Transfer, "transfer");
id_marker!(BankAccount, "bank_account");
id_marker!(Capability, "capability");
id_marker!(PaymentMethod, "payment_method");
id_marker!(Source, "source");
id_marker!(Representative, "representative");
id_marker!(Wallet, "wallet");
id_marker!(WalletTransaction, "wallet_transaction");

// ========================================
// Type Alias（使いやすさのため）
// ========================================

/// Identifier of a webhook event, unique per delivery.
pub type EventId = Id<Event>;

pub type AccountId = Id<Account>;

pub type TransferId = Id<Transfer>;

pub type BankAccountId = Id<BankAccount>;

/// Capability IDs are names such as `transfers` or `send-funds`, not UUIDs.
pub type CapabilityId = Id<Capability>;

pub type PaymentMethodId = Id<PaymentMethod>;

/// The bank account or card a payment method draws from.
pub type SourceId = Id<Source>;

pub type RepresentativeId = Id<Representative>;

pub type WalletId = Id<Wallet>;

pub type TransactionId = Id<WalletTransaction>;
