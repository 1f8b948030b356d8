//! Handler trait - 型付き payload を処理する Handler の定義
//!
//! # 学習ポイント
//! - ジェネリック trait (Handler<P>)
//! - Object-safe trait (DynHandler)
//! - Type erasure パターン (TypedHandler<P, H> → DynHandler)
//!
//! parse / decode は同期処理ですが、Handler は受信側サービスの処理
//! （API 呼び出しなど）を行うため async です。

use super::payload::Payload;
use crate::domain::{Event, EventType, HookError};
use async_trait::async_trait;
use std::marker::PhantomData;
use std::sync::Arc;
use thiserror::Error;

/// Handler が返すエラー
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HandlerError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl HandlerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// DispatchError は envelope 1 件の処理失敗
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Decode(#[from] HookError),

    #[error("handler for {event_type} failed: {source}")]
    Handler {
        event_type: EventType,
        #[source]
        source: HandlerError,
    },
}

impl DispatchError {
    /// See [`HookError::is_sender_fault`].
    pub fn is_sender_fault(&self) -> bool {
        match self {
            DispatchError::Decode(e) => e.is_sender_fault(),
            DispatchError::Handler { .. } => false,
        }
    }
}

/// Handler は decode 済みの payload を受け取って処理する
///
/// # 使用例
/// ```ignore
/// struct OnAccountCreated;
///
/// #[async_trait]
/// impl Handler<AccountCreated> for OnAccountCreated {
///     async fn handle(&self, event: &Event, payload: AccountCreated) -> Result<(), HandlerError> {
///         tracing::info!(account_id = %payload.account_id, "account created");
///         Ok(())
///     }
/// }
/// ```
///
/// # ジェネリクスによる型安全性
/// - `Handler<AccountCreated>` は `AccountCreated` しか受け取れない
/// - コンパイル時に eventType と Handler の対応が保証される
#[async_trait]
pub trait Handler<P: Payload>: Send + Sync {
    async fn handle(&self, event: &Event, payload: P) -> Result<(), HandlerError>;
}

/// 複数の eventType で同じ Handler インスタンスを共有するため
#[async_trait]
impl<P: Payload, H: Handler<P> + ?Sized> Handler<P> for Arc<H> {
    async fn handle(&self, event: &Event, payload: P) -> Result<(), HandlerError> {
        (**self).handle(event, payload).await
    }
}

/// DynHandler は object-safe な Handler の抽象化
///
/// TypedHandler<P, H> を DynHandler に変換することで、
/// HashMap<String, Arc<dyn DynHandler>> に格納可能にします。
#[async_trait]
pub trait DynHandler: Send + Sync {
    async fn handle_dyn(&self, event: &Event) -> Result<(), DispatchError>;
    fn event_type(&self) -> EventType;
}

pub struct TypedHandler<P: Payload, H: Handler<P>> {
    handler: H,
    _marker: PhantomData<P>,
}

impl<P: Payload, H: Handler<P>> TypedHandler<P, H> {
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<P: Payload, H: Handler<P>> DynHandler for TypedHandler<P, H> {
    async fn handle_dyn(&self, event: &Event) -> Result<(), DispatchError> {
        let payload: P = event.decode()?;
        self.handler
            .handle(event, payload)
            .await
            .map_err(|source| DispatchError::Handler {
                event_type: P::event_type(),
                source,
            })
    }

    fn event_type(&self) -> EventType {
        P::event_type()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{Failing, Recorder};
    use super::*;
    use crate::catalog::{AccountCreated, TransferCreated};
    use crate::domain::{AccountId, EventId};
    use chrono::Utc;

    fn account_created_event() -> Event {
        let payload = AccountCreated {
            account_id: AccountId::new("a"),
        };
        Event::from_payload(EventId::generate(), &payload, Utc::now()).unwrap()
    }

    #[tokio::test]
    async fn test_typed_handler() {
        let recorder = Arc::new(Recorder::<AccountCreated>::new());
        let typed_handler = TypedHandler::<AccountCreated, _>::new(recorder.clone());

        typed_handler.handle_dyn(&account_created_event()).await.unwrap();

        let seen = recorder.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].account_id.as_str(), "a");
        assert_eq!(typed_handler.event_type().as_str(), "account.created");
    }

    #[tokio::test]
    async fn decode_failure_is_reported_before_the_handler_runs() {
        let recorder = Arc::new(Recorder::<TransferCreated>::new());
        let typed_handler = TypedHandler::<TransferCreated, _>::new(recorder.clone());

        let err = typed_handler
            .handle_dyn(&account_created_event())
            .await
            .unwrap_err();

        assert!(matches!(err, DispatchError::Decode(HookError::PayloadMismatch { .. })));
        assert!(!err.is_sender_fault());
        assert!(recorder.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn handler_failure_keeps_the_event_type() {
        let typed_handler = TypedHandler::<AccountCreated, _>::new(Failing);
        let err = typed_handler
            .handle_dyn(&account_created_event())
            .await
            .unwrap_err();

        match err {
            DispatchError::Handler { event_type, source } => {
                assert_eq!(event_type.as_str(), "account.created");
                assert_eq!(source.to_string(), "downstream unavailable");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
