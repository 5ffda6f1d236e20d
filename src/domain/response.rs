use std::collections::BTreeMap;

use crate::domain::value::Identifier;

/// Item-level result inside an otherwise successful response.
///
/// Providers put `{"error": "..."}` in place of a value when one item of a
/// batch fails while its siblings succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome<T> {
    Ok(T),
    Error { message: String },
}

impl<T> ItemOutcome<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub fn as_ok(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Error { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Ok(_) => None,
            Self::Error { message } => Some(message),
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Error { message } => Err(message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Balance {
    pub balance: String,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderCreated {
    pub order: Identifier,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub service: Identifier,
    pub name: String,
    pub kind: String,
    pub category: String,
    pub rate: String,
    pub min: String,
    pub max: String,
    pub dripfeed: bool,
    pub refill: bool,
    pub cancel: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderState {
    Pending,
    InProgress,
    Completed,
    Partial,
    Canceled,
    Processing,
    Fail,
    Error,
    /// State string this crate does not know about, kept as sent.
    Other(String),
}

impl OrderState {
    pub fn from_wire(value: &str) -> Self {
        match value {
            "Pending" => Self::Pending,
            "In progress" => Self::InProgress,
            "Completed" => Self::Completed,
            "Partial" => Self::Partial,
            "Canceled" => Self::Canceled,
            "Processing" => Self::Processing,
            "Fail" => Self::Fail,
            "Error" => Self::Error,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Whether the provider will not change this order any more.
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            Self::Completed | Self::Partial | Self::Canceled | Self::Fail | Self::Error
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderStatus {
    pub charge: Option<String>,
    pub start_count: Option<String>,
    pub status: OrderState,
    pub remains: Option<String>,
    pub currency: Option<String>,
}

/// `status` response: one order, or a map keyed by the requested ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusReport {
    Single(ItemOutcome<OrderStatus>),
    Batch(BTreeMap<Identifier, ItemOutcome<OrderStatus>>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefillCreated {
    pub order: Identifier,
    pub refill: ItemOutcome<Identifier>,
}

/// `refill` response: the new refill id for one order, or one entry per order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefillReport {
    Single(ItemOutcome<Identifier>),
    Batch(Vec<RefillCreated>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefillState {
    Pending,
    InProgress,
    Completed,
    Rejected,
    Error,
    Other(String),
}

impl RefillState {
    pub fn from_wire(value: &str) -> Self {
        match value {
            "Pending" => Self::Pending,
            "In progress" => Self::InProgress,
            "Completed" => Self::Completed,
            "Rejected" => Self::Rejected,
            "Error" => Self::Error,
            other => Self::Other(other.to_owned()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefillStatus {
    pub refill: Identifier,
    pub status: ItemOutcome<RefillState>,
}

/// `refill_status` response: one refill, or one entry per refill id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefillStatusReport {
    Single(ItemOutcome<RefillState>),
    Batch(Vec<RefillStatus>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelResult {
    pub order: Identifier,
    pub cancel: ItemOutcome<Identifier>,
}
