use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, PaymentMethodId, SourceId, tags};
use crate::typed::Payload;

/// `paymentMethod.enabled`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodEnabled {
    #[serde(rename = "accountID")]
    pub account_id: AccountId,
    #[serde(rename = "paymentMethodID")]
    pub payment_method_id: PaymentMethodId,
    #[serde(rename = "sourceID")]
    pub source_id: SourceId,
}

impl Payload for PaymentMethodEnabled {
    const EVENT_TYPE: &'static str = tags::PAYMENT_METHOD_ENABLED;
}

/// `paymentMethod.disabled`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodDisabled {
    #[serde(rename = "accountID")]
    pub account_id: AccountId,
    #[serde(rename = "paymentMethodID")]
    pub payment_method_id: PaymentMethodId,
    #[serde(rename = "sourceID")]
    pub source_id: SourceId,
}

impl Payload for PaymentMethodDisabled {
    const EVENT_TYPE: &'static str = tags::PAYMENT_METHOD_DISABLED;
}
