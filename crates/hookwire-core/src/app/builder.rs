//! ReceiverBuilder - Receiver の構築とワイヤリング
//!
//! # 学習ポイント
//! - Builder パターンの実装
//! - 起動時検証（Fail-fast 設計）
//! - 開発体験の改善（明確なエラーメッセージ）

use super::config::ReceiverConfig;
use super::receiver::Receiver;
use crate::typed::{Handler, HandlerRegistry, Payload, RegistryError};

/// ReceiverBuilder は webhook 受信側を構築
///
/// # 使用例
/// ```ignore
/// let receiver = ReceiverBuilder::new()
///     .register::<AccountCreated, _>(OnAccountCreated)?
///     .expect_events(&["account.created"])
///     .build()?;
/// ```
///
/// # Fail-fast 設計
/// - expect_events() で必須の eventType を登録
/// - build() 時に「期待集合 ⊆ 登録済み集合」をチェック
/// - 不足があれば BuildError を返す
///
/// 期待集合に含まれない eventType の配送は、従来どおり無視されます。
pub struct ReceiverBuilder {
    registry: HandlerRegistry,
    expected_events: Option<Vec<String>>,
}

/// BuildError は Receiver 構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Missing handlers for event types: {0:?}. These events were expected but not registered.")]
    MissingHandlers(Vec<String>),
}

impl ReceiverBuilder {
    pub fn new() -> Self {
        Self {
            registry: HandlerRegistry::new(),
            expected_events: None,
        }
    }

    /// Handler を登録
    pub fn register<P: Payload, H: Handler<P> + 'static>(
        mut self,
        handler: H,
    ) -> Result<Self, RegistryError> {
        self.registry.register::<P, H>(handler)?;
        Ok(self)
    }

    /// 必須の eventType のリストを設定
    pub fn expect_events(mut self, event_types: &[&str]) -> Self {
        self.expected_events = Some(event_types.iter().map(|t| t.to_string()).collect());
        self
    }

    /// 設定ファイルの内容を反映する（空リストは検証なしと同じ）
    pub fn with_config(mut self, config: &ReceiverConfig) -> Self {
        if !config.expected_events.is_empty() {
            self.expected_events = Some(config.expected_events.clone());
        }
        self
    }

    pub fn build(self) -> Result<Receiver, BuildError> {
        if let Some(expected_events) = &self.expected_events {
            let missing: Vec<String> = expected_events
                .iter()
                .filter(|t| !self.registry.contains(t))
                .cloned()
                .collect();
            if !missing.is_empty() {
                return Err(BuildError::MissingHandlers(missing));
            }
        }
        tracing::debug!(
            event_types = ?self.registry.registered_types(),
            "webhook receiver ready"
        );
        Ok(Receiver::new(self.registry))
    }
}

impl Default for ReceiverBuilder {
    fn default() -> Self {
        Self::new()
    }
}
