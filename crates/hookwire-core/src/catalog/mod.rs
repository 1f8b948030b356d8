//! Payload catalog - 既知の eventType と `data` の形
//!
//! 各 payload 型は [`Payload`] を実装し、`Event` にはカタログの各要素に
//! 対応する名前付き decoder（`account_created()` など）が生えます。
//!
//! # dispatch の 2 つの書き方
//! - `match event.event_type().as_str()` で分岐し、名前付き decoder を呼ぶ
//! - [`KnownEvent::from_event`]（= `event.known()`）で閉じた enum にする
//!
//! どちらも未知のタグはエラーにしません。
//!
//! # カタログの拡張
//! 新しい payload 型を追加し、下の `catalog!` に 1 行足します。
//! 既存の型を互換性のない形に変えてはいけません。

mod account;
mod bank_account;
mod capability;
mod payment_method;
mod representative;
mod transfer;
mod wallet;

pub use self::account::{AccountCreated, AccountDisconnected, AccountUpdated};
pub use self::bank_account::{BankAccountCreated, BankAccountDeleted, BankAccountUpdated};
pub use self::capability::{CapabilityRequested, CapabilityUpdated};
pub use self::payment_method::{PaymentMethodDisabled, PaymentMethodEnabled};
pub use self::representative::{
    RepresentativeCreated, RepresentativeDisconnected, RepresentativeUpdated,
};
pub use self::transfer::{TransferCreated, TransferUpdated};
pub use self::wallet::{BalanceUpdated, WalletTransactionUpdated};

use crate::domain::{Event, EventType, HookError};
use crate::typed::Payload;

macro_rules! catalog {
    ($($payload:ident => $decoder:ident),+ $(,)?) => {
        /// A decoded payload of any catalog entry.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum KnownEvent {
            $($payload($payload),)+
        }

        impl KnownEvent {
            /// Picks the decoder for the event's tag and runs it.
            ///
            /// `Ok(None)` means the tag is outside the catalog; the caller
            /// should skip the event.
            pub fn from_event(event: &Event) -> Result<Option<Self>, HookError> {
                let tag = event.event_type().as_str();
                $(
                    if tag == <$payload as Payload>::EVENT_TYPE {
                        return Ok(Some(KnownEvent::$payload(event.decode()?)));
                    }
                )+
                Ok(None)
            }

            pub fn event_type(&self) -> EventType {
                match self {
                    $(KnownEvent::$payload(_) => <$payload as Payload>::event_type(),)+
                }
            }
        }

        $(
            impl From<$payload> for KnownEvent {
                fn from(payload: $payload) -> Self {
                    KnownEvent::$payload(payload)
                }
            }
        )+

        /// Named decoders, one per catalog entry.
        ///
        /// None of them look at `event_type()`: calling `transfer_created()` on
        /// an `account.created` event succeeds if the data happens to fit.
        impl Event {
            $(
                pub fn $decoder(&self) -> Result<$payload, HookError> {
                    self.decode()
                }
            )+

            /// Shorthand for [`KnownEvent::from_event`].
            pub fn known(&self) -> Result<Option<KnownEvent>, HookError> {
                KnownEvent::from_event(self)
            }
        }
    };
}

catalog! {
    AccountCreated => account_created,
    AccountUpdated => account_updated,
    AccountDisconnected => account_disconnected,
    BalanceUpdated => balance_updated,
    BankAccountCreated => bank_account_created,
    BankAccountUpdated => bank_account_updated,
    BankAccountDeleted => bank_account_deleted,
    CapabilityRequested => capability_requested,
    CapabilityUpdated => capability_updated,
    PaymentMethodEnabled => payment_method_enabled,
    PaymentMethodDisabled => payment_method_disabled,
    RepresentativeCreated => representative_created,
    RepresentativeUpdated => representative_updated,
    RepresentativeDisconnected => representative_disconnected,
    TransferCreated => transfer_created,
    TransferUpdated => transfer_updated,
    WalletTransactionUpdated => wallet_transaction_updated,
}
