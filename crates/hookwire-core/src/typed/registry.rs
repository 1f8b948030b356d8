//! HandlerRegistry - eventType ごとの Handler の登録と dispatch
//!
//! # 学習ポイント
//! - HashMap での型消去された trait object の管理
//! - Generic methods での登録と型安全性
//! - Arc による共有所有権
//!
//! 登録されていない eventType はエラーではなく `Dispatch::Ignored` です。
//! これにより送信側が新しい種類を追加しても古い受信側は壊れません。

use super::handler::{DispatchError, DynHandler, Handler, TypedHandler};
use super::payload::Payload;
use crate::domain::Event;
use std::collections::HashMap;
use std::sync::Arc;

/// dispatch の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// 登録済みの Handler が payload を処理した
    Handled,
    /// この eventType の Handler はない（正常系）
    Ignored,
}

/// HandlerRegistry は型付き Handler を登録・管理
///
/// # 使用例
/// ```ignore
/// let mut registry = HandlerRegistry::new();
/// registry.register::<AccountCreated, _>(OnAccountCreated)?;
///
/// let event = Event::from_slice(&body)?;
/// match registry.dispatch(&event).await? {
///     Dispatch::Handled => {}
///     Dispatch::Ignored => {}
/// }
/// ```
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Arc<dyn DynHandler>>,
}

/// RegistryError は HandlerRegistry の操作エラー
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Handler for event type '{0}' is already registered")]
    AlreadyRegistered(String),
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    pub fn register<P: Payload, H: Handler<P> + 'static>(
        &mut self,
        handler: H,
    ) -> Result<(), RegistryError> {
        let event_type = P::EVENT_TYPE.to_string();
        if self.handlers.contains_key(&event_type) {
            return Err(RegistryError::AlreadyRegistered(event_type));
        }
        let typed_handler = TypedHandler::new(handler);
        self.handlers.insert(event_type, Arc::new(typed_handler));
        Ok(())
    }

    pub fn get(&self, event_type: &str) -> Option<Arc<dyn DynHandler>> {
        self.handlers.get(event_type).cloned()
    }

    pub fn contains(&self, event_type: &str) -> bool {
        self.handlers.contains_key(event_type)
    }

    /// Sorted so that logs and error messages are stable.
    pub fn registered_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.handlers.keys().cloned().collect();
        types.sort();
        types
    }

    /// Routes the event to the handler registered for its tag.
    pub async fn dispatch(&self, event: &Event) -> Result<Dispatch, DispatchError> {
        let Some(handler) = self.get(event.event_type().as_str()) else {
            return Ok(Dispatch::Ignored);
        };
        handler.handle_dyn(event).await?;
        Ok(Dispatch::Handled)
    }
}
