use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::domain::validation::ValidationError;
use crate::domain::value::Identifier;

pub const MAX_BATCH_IDS: usize = 100;

/// Action discriminator sent in every request body (`action`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Services,
    Balance,
    Add,
    Status,
    Refill,
    RefillStatus,
    Cancel,
}

impl Action {
    /// Body field name used by the provider (`action`).
    pub const FIELD: &'static str = "action";

    pub const ALL: [Action; 7] = [
        Action::Services,
        Action::Balance,
        Action::Add,
        Action::Status,
        Action::Refill,
        Action::RefillStatus,
        Action::Cancel,
    ];

    /// Wire value of this action.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Services => "services",
            Self::Balance => "balance",
            Self::Add => "add",
            Self::Status => "status",
            Self::Refill => "refill",
            Self::RefillStatus => "refill_status",
            Self::Cancel => "cancel",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an action string outside the known set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction(pub String);

impl fmt::Display for UnknownAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown action: {:?}", self.0)
    }
}

impl std::error::Error for UnknownAction {}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == value)
            .ok_or_else(|| UnknownAction(value.to_owned()))
    }
}

/// Ordered list of 1..=[`MAX_BATCH_IDS`] identifiers for batch-capable actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdBatch {
    ids: Vec<Identifier>,
}

impl IdBatch {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "identifiers";

    pub fn new(ids: Vec<Identifier>) -> Result<Self, ValidationError> {
        if ids.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if ids.len() > MAX_BATCH_IDS {
            return Err(ValidationError::BatchLimitExceeded {
                max: MAX_BATCH_IDS,
                actual: ids.len(),
            });
        }
        Ok(Self { ids })
    }

    pub fn one(id: impl Into<Identifier>) -> Self {
        Self {
            ids: vec![id.into()],
        }
    }

    pub fn ids(&self) -> &[Identifier] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The single identifier, when the batch holds exactly one.
    pub fn single(&self) -> Option<&Identifier> {
        match self.ids.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Comma-joined wire form (`1,2,3`).
    pub fn joined(&self) -> String {
        self.ids
            .iter()
            .map(Identifier::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Parameters of a new order (`action=add`).
///
/// Only `service` is required. Anything the provider accepts beyond the
/// common fields goes through [`NewOrder::extra`] and is sent verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub service: Identifier,
    pub link: Option<String>,
    pub quantity: Option<u64>,
    pub runs: Option<u64>,
    pub intervals: Option<u64>,
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl NewOrder {
    pub fn new(service: impl Into<Identifier>) -> Self {
        Self {
            service: service.into(),
            link: None,
            quantity: None,
            runs: None,
            intervals: None,
            extra: BTreeMap::new(),
        }
    }

    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn quantity(mut self, quantity: u64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn runs(mut self, runs: u64) -> Self {
        self.runs = Some(runs);
        self
    }

    pub fn intervals(mut self, intervals: u64) -> Self {
        self.intervals = Some(intervals);
        self
    }

    /// Add a provider-specific field (e.g. `comments`, `username`).
    pub fn extra(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }
}
