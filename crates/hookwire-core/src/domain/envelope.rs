//! Event - webhook 1 回の配送で届く envelope
//!
//! # 二段階の decode
//! 1. `Event::from_slice` / `from_reader` で envelope だけを parse する。
//!    `data` は `RawValue` のまま保持し、中身は解釈しない
//! 2. 呼び出し側が `event_type()` を見て、対応する decoder を選ぶ
//!    （`catalog` の `account_created()` など、または `decode::<P>()`）
//!
//! これにより受信側は知らない種類の payload を理解する必要がありません。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use std::io::Read;
use std::str::FromStr;

use super::errors::HookError;
use super::event_type::EventType;
use super::ids::EventId;
use crate::typed::{Payload, PayloadCodec};

/// A parsed webhook envelope.
///
/// Immutable once parsed. `data` keeps the exact JSON text of the delivery;
/// typed payloads are decoded from it on demand and never cached here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "eventID")]
    event_id: EventId,
    #[serde(rename = "eventType")]
    event_type: EventType,
    data: Box<RawValue>,
    #[serde(rename = "createdOn")]
    created_on: DateTime<Utc>,
}

impl Event {
    pub fn new(
        event_id: EventId,
        event_type: EventType,
        data: Box<RawValue>,
        created_on: DateTime<Utc>,
    ) -> Self {
        Self {
            event_id,
            event_type,
            data,
            created_on,
        }
    }

    /// Builds an envelope around a catalog payload; the tag comes from `P`.
    pub fn from_payload<P: Payload>(
        event_id: EventId,
        payload: &P,
        created_on: DateTime<Utc>,
    ) -> Result<Self, HookError> {
        let data = PayloadCodec::encode(payload)?;
        Ok(Self::new(event_id, P::event_type(), data, created_on))
    }

    /// Parses one delivery body.
    ///
    /// Only the envelope is checked: the body must be a single JSON object
    /// with string `eventID`/`eventType`, an RFC3339 `createdOn` and some
    /// `data` value. Extra top-level fields are ignored and the tag is not
    /// looked up in the catalog.
    pub fn from_slice(body: &[u8]) -> Result<Self, HookError> {
        match body.iter().find(|b| !b.is_ascii_whitespace()) {
            Some(b'{') => {}
            Some(_) => return Err(HookError::invalid_envelope("expected a JSON object")),
            None => return Err(HookError::invalid_envelope("empty delivery body")),
        }
        serde_json::from_slice(body).map_err(HookError::InvalidEnvelope)
    }

    /// Reads the source to the end, then parses it like [`Event::from_slice`].
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, HookError> {
        let mut body = Vec::new();
        reader
            .read_to_end(&mut body)
            .map_err(|e| HookError::InvalidEnvelope(serde_json::Error::io(e)))?;
        Self::from_slice(&body)
    }

    pub fn event_id(&self) -> &EventId {
        &self.event_id
    }

    pub fn event_type(&self) -> &EventType {
        &self.event_type
    }

    /// The undecoded `data` value, exactly as received.
    pub fn data(&self) -> &RawValue {
        &self.data
    }

    pub fn created_on(&self) -> DateTime<Utc> {
        self.created_on
    }

    /// Decodes `data` as `P`.
    ///
    /// The envelope's tag is not compared with `P::EVENT_TYPE`; selecting the
    /// decoder that matches `event_type()` is the caller's job.
    pub fn decode<P: Payload>(&self) -> Result<P, HookError> {
        PayloadCodec::decode(&self.data)
    }

    /// Wire encoding of the envelope.
    pub fn to_vec(&self) -> Result<Vec<u8>, HookError> {
        serde_json::to_vec(self).map_err(|source| HookError::Encode {
            event_type: self.event_type.clone(),
            source,
        })
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.event_id == other.event_id
            && self.event_type == other.event_type
            && self.data.get() == other.data.get()
            && self.created_on == other.created_on
    }
}

impl Eq for Event {}

impl FromStr for Event {
    type Err = HookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(s.as_bytes())
    }
}
