//! PayloadCodec - `data` と Payload の相互変換
//!
//! decode は strict です。必須フィールドの欠落、型の合わない値、
//! 列挙にない status はすべて `PayloadMismatch` になります。
//! 未知のフィールドは無視します（payload 側の前方互換）。

use serde_json::value::RawValue;

use super::payload::Payload;
use crate::domain::HookError;

pub struct PayloadCodec;

impl PayloadCodec {
    pub fn decode<P: Payload>(data: &RawValue) -> Result<P, HookError> {
        serde_json::from_str(data.get()).map_err(|source| HookError::PayloadMismatch {
            expected: P::event_type(),
            source,
        })
    }

    pub fn encode<P: Payload>(payload: &P) -> Result<Box<RawValue>, HookError> {
        serde_json::value::to_raw_value(payload).map_err(|source| HookError::Encode {
            event_type: P::event_type(),
            source,
        })
    }
}
