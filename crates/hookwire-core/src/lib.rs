//! hookwire-core
//!
//! Webhook deliveries from the payments platform, decoded into typed events.
//!
//! # モジュール構成
//! - **domain**: envelope (`Event`), ids, event types, statuses, errors
//! - **catalog**: 既知の payload 型、名前付き decoder、`KnownEvent`
//! - **typed**: `Payload` trait, `PayloadCodec`, Handler, HandlerRegistry
//! - **app**: ReceiverBuilder, Receiver, ReceiverConfig
//!
//! # 使用例
//! ```
//! use hookwire_core::domain::{Event, tags};
//!
//! let body = br#"{"eventID":"x","eventType":"transfer.created","data":{"accountID":"a","transferID":"b","status":"created"},"createdOn":"2024-01-01T00:00:00Z"}"#;
//! let event = Event::from_slice(body)?;
//!
//! match event.event_type().as_str() {
//!     tags::ACCOUNT_CREATED => {
//!         let created = event.account_created()?;
//!         println!("account {}", created.account_id);
//!     }
//!     tags::TRANSFER_CREATED => {
//!         let created = event.transfer_created()?;
//!         assert_eq!(created.transfer_id.as_str(), "b");
//!     }
//!     _ => {} // newer event types are skipped
//! }
//! # Ok::<(), hookwire_core::domain::HookError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod typed;

pub use crate::catalog::KnownEvent;
pub use crate::domain::{Event, EventType, HookError};
