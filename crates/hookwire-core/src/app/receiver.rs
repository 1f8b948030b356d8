//! Receiver - 配送 1 件の parse → dispatch
//!
//! HTTP サーバーなどの transport 層がリクエストボディを渡して呼び出します。
//! レスポンスコードの決定は transport 層の責務ですが、目安は次のとおりです。
//! - `Ok(_)`（Ignored を含む）: 成功を返す
//! - `Err(e)` で `e.is_sender_fault()`: 失敗を返し、送信側の再送に任せる
//! - それ以外の `Err`: サービス側の問題。運用ポリシーに従う

use std::sync::Arc;

use crate::domain::{Event, EventId, EventType};
use crate::typed::{Dispatch, DispatchError, HandlerRegistry};

/// 配送 1 件の処理結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub event_id: EventId,
    pub event_type: EventType,
    pub dispatch: Dispatch,
}

/// Cheap to clone; clones share the same handlers.
#[derive(Clone)]
pub struct Receiver {
    registry: Arc<HandlerRegistry>,
}

impl Receiver {
    pub fn new(registry: HandlerRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Parses a delivery body and dispatches it.
    pub async fn receive(&self, body: &[u8]) -> Result<Receipt, DispatchError> {
        let event = Event::from_slice(body)?;
        self.receive_event(&event).await
    }

    /// Dispatches an already parsed envelope.
    pub async fn receive_event(&self, event: &Event) -> Result<Receipt, DispatchError> {
        let dispatch = self.registry.dispatch(event).await?;
        if dispatch == Dispatch::Handled {
            tracing::debug!(
                event_id = %event.event_id(),
                event_type = %event.event_type(),
                "webhook event handled"
            );
        }
        Ok(Receipt {
            event_id: event.event_id().clone(),
            event_type: event.event_type().clone(),
            dispatch,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ReceiverBuilder;
    use crate::catalog::{AccountCreated, TransferCreated};
    use crate::domain::{AccountId, HookError, TransferId, TransferStatus};
    use crate::typed::handler::testing::{Failing, Recorder};
    use chrono::Utc;

    fn deliver<P: crate::typed::Payload>(payload: &P) -> Vec<u8> {
        Event::from_payload(EventId::generate(), payload, Utc::now())
            .unwrap()
            .to_vec()
            .unwrap()
    }

    #[tokio::test]
    async fn handles_registered_and_ignores_the_rest() {
        let accounts = Arc::new(Recorder::<AccountCreated>::new());
        let receiver = ReceiverBuilder::new()
            .register::<AccountCreated, _>(accounts.clone())
            .unwrap()
            .build()
            .unwrap();

        let account_created = AccountCreated {
            account_id: AccountId::generate(),
        };
        let receipt = receiver.receive(&deliver(&account_created)).await.unwrap();
        assert_eq!(receipt.dispatch, Dispatch::Handled);
        assert_eq!(receipt.event_type.as_str(), "account.created");

        let transfer_created = TransferCreated {
            account_id: account_created.account_id.clone(),
            transfer_id: TransferId::generate(),
            status: TransferStatus::Created,
        };
        let receipt = receiver.receive(&deliver(&transfer_created)).await.unwrap();
        assert_eq!(receipt.dispatch, Dispatch::Ignored);

        let unknown = br#"{"eventID":"e","eventType":"ticket.created","data":{},"createdOn":"2024-01-01T00:00:00Z"}"#;
        let receipt = receiver.receive(unknown).await.unwrap();
        assert_eq!(receipt.dispatch, Dispatch::Ignored);
        assert_eq!(receipt.event_id.as_str(), "e");

        assert_eq!(*accounts.seen.lock().unwrap(), vec![account_created]);
    }

    #[tokio::test]
    async fn invalid_envelope_is_the_senders_fault() {
        let receiver = ReceiverBuilder::new().build().unwrap();
        let err = receiver.receive(br#"{"eventID":123}"#).await.unwrap_err();
        assert!(matches!(err, DispatchError::Decode(HookError::InvalidEnvelope(_))));
        assert!(err.is_sender_fault());
    }

    #[tokio::test]
    async fn handler_failure_is_not_the_senders_fault() {
        let receiver = ReceiverBuilder::new()
            .register::<AccountCreated, _>(Failing)
            .unwrap()
            .build()
            .unwrap();
        let body = deliver(&AccountCreated {
            account_id: AccountId::generate(),
        });
        let err = receiver.receive(&body).await.unwrap_err();
        assert!(matches!(err, DispatchError::Handler { .. }));
        assert!(!err.is_sender_fault());
    }

    #[tokio::test]
    async fn concurrent_deliveries_share_one_receiver() {
        let accounts = Arc::new(Recorder::<AccountCreated>::new());
        let receiver = ReceiverBuilder::new()
            .register::<AccountCreated, _>(accounts.clone())
            .unwrap()
            .build()
            .unwrap();

        let mut tasks = Vec::new();
        for _ in 0..8 {
            let receiver = receiver.clone();
            let body = deliver(&AccountCreated {
                account_id: AccountId::generate(),
            });
            tasks.push(tokio::spawn(async move { receiver.receive(&body).await }));
        }
        for task in tasks {
            assert_eq!(task.await.unwrap().unwrap().dispatch, Dispatch::Handled);
        }
        assert_eq!(accounts.seen.lock().unwrap().len(), 8);
    }
}
