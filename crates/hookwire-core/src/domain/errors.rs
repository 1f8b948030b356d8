//! Errors - envelope / payload のエラー型と分類
//!
//! 未知の `eventType` はエラーではありません（ここには現れない）。

use thiserror::Error;

use super::event_type::EventType;

/// ErrorKind は呼び出し側がレスポンスを決めるための分類
///
/// - InvalidEnvelope: 送信側の問題。失敗ステータスを返し、送信側の再送に任せる
/// - PayloadMismatch: decoder の選択ミス、またはタグと中身が食い違う送信
/// - Encode: 送信側ヘルパーでの serialize 失敗
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidEnvelope,
    PayloadMismatch,
    Encode,
}

/// HookError は parse / decode の失敗
///
/// どちらも内部でリトライせず、そのまま呼び出し側に返します。
#[derive(Debug, Error)]
pub enum HookError {
    #[error("invalid webhook envelope: {0}")]
    InvalidEnvelope(#[source] serde_json::Error),

    #[error("event data does not match {expected} payload: {source}")]
    PayloadMismatch {
        expected: EventType,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode {event_type} payload: {source}")]
    Encode {
        event_type: EventType,
        #[source]
        source: serde_json::Error,
    },
}

impl HookError {
    pub(crate) fn invalid_envelope(msg: impl std::fmt::Display) -> Self {
        HookError::InvalidEnvelope(<serde_json::Error as serde::de::Error>::custom(msg))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            HookError::InvalidEnvelope(_) => ErrorKind::InvalidEnvelope,
            HookError::PayloadMismatch { .. } => ErrorKind::PayloadMismatch,
            HookError::Encode { .. } => ErrorKind::Encode,
        }
    }

    /// The delivery itself was unusable; the receiver should answer with a
    /// failure status so the sender redelivers per its own policy.
    pub fn is_sender_fault(&self) -> bool {
        matches!(self, HookError::InvalidEnvelope(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_errors() {
        let invalid = HookError::invalid_envelope("expected a JSON object");
        assert_eq!(invalid.kind(), ErrorKind::InvalidEnvelope);
        assert!(invalid.is_sender_fault());
        assert!(invalid.to_string().contains("expected a JSON object"));

        let source = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let mismatch = HookError::PayloadMismatch {
            expected: EventType::from_static("account.created"),
            source,
        };
        assert_eq!(mismatch.kind(), ErrorKind::PayloadMismatch);
        assert!(!mismatch.is_sender_fault());
        assert!(mismatch.to_string().starts_with("event data does not match account.created"));
    }
}
