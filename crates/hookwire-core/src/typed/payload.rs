//! Payload trait - eventType と payload 型の対応
//!
//! # 学習ポイント
//! - Associated Constants (`const EVENT_TYPE`)
//! - Trait bounds の組み合わせ (Serialize + DeserializeOwned + Send + Sync + 'static)

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::EventType;

/// Payload は eventType と `data` の型を対応付ける
///
/// # 使用例
/// ```ignore
/// #[derive(Serialize, Deserialize)]
/// struct TicketCreated {
///     #[serde(rename = "ticketID")]
///     ticket_id: String,
/// }
///
/// impl Payload for TicketCreated {
///     const EVENT_TYPE: &'static str = "ticket.created";
/// }
/// ```
///
/// # Trait Bounds
/// - `Serialize`: 送信側ヘルパー・テストで envelope を組み立てるため
/// - `DeserializeOwned`: `RawValue` から所有型として復元するため
/// - `Send + Sync + 'static`: registry に型消去して格納するため
pub trait Payload: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// ワイヤ上の eventType（例: `transfer.created`）
    const EVENT_TYPE: &'static str;

    fn event_type() -> EventType {
        EventType::from_static(Self::EVENT_TYPE)
    }
}
