//! Domain model (IDs, event types, statuses, the envelope, errors).

pub mod envelope;
pub mod errors;
pub mod event_type;
pub mod ids;
pub mod status;

pub use self::envelope::Event;
pub use self::errors::{ErrorKind, HookError};
pub use self::event_type::{EventType, tags};
pub use self::ids::{
    AccountId, BankAccountId, CapabilityId, EventId, Id, IdMarker, PaymentMethodId,
    RepresentativeId, SourceId, TransactionId, TransferId, WalletId,
};
pub use self::status::{
    BankAccountStatus, CapabilityStatus, TransferStatus, WalletTransactionStatus,
};
