//! Typed - 型付き payload API
//!
//! このモジュールは eventType の文字列と payload 型の対応を型で表現し、
//! Handler との対応付けを静的に保証します。
//!
//! # 二層構造
//! - **表層（Typed）**: `Payload` trait, `Handler<P>` trait - 型安全
//! - **内部（Dyn）**: `DynHandler` trait - object-safe, type erasure

pub mod payload;
pub mod handler;
pub mod registry;
pub mod codec;

// 主要な trait/型 を再エクスポート
pub use self::payload::Payload;
pub use self::handler::{DispatchError, DynHandler, Handler, HandlerError, TypedHandler};
pub use self::registry::{Dispatch, HandlerRegistry, RegistryError};
pub use self::codec::PayloadCodec;
