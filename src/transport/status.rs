use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use super::envelope::Params;
use super::wire::{TransportError, TransportItem, TransportText};
use crate::domain::{IdBatch, Identifier, OrderState, OrderStatus, StatusReport};

#[derive(Debug, Clone, Deserialize)]
struct OrderStatusJson {
    #[serde(default)]
    charge: Option<TransportText>,
    #[serde(default)]
    start_count: Option<TransportText>,
    status: String,
    #[serde(default)]
    remains: Option<TransportText>,
    #[serde(default)]
    currency: Option<String>,
}

impl From<OrderStatusJson> for OrderStatus {
    fn from(value: OrderStatusJson) -> Self {
        OrderStatus {
            charge: value.charge.map(TransportText::into_string),
            start_count: value.start_count.map(TransportText::into_string),
            status: OrderState::from_wire(&value.status),
            remains: value.remains.map(TransportText::into_string),
            currency: value.currency,
        }
    }
}

pub fn encode_status_params(request: &IdBatch) -> Params {
    let mut params = Params::new();
    match request.single() {
        Some(order) => {
            params.insert("order".to_owned(), order.to_json());
        }
        None => {
            params.insert("orders".to_owned(), request.joined().into());
        }
    }
    params
}

pub fn decode_status_json_response(
    request: &IdBatch,
    json: &str,
) -> Result<StatusReport, TransportError> {
    if request.single().is_some() {
        let parsed: TransportItem<OrderStatusJson> = serde_json::from_str(json)?;
        return Ok(StatusReport::Single(parsed.map_into(OrderStatus::from)));
    }

    let parsed: BTreeMap<String, TransportItem<OrderStatusJson>> = serde_json::from_str(json)?;
    let lookup = order_lookup_from_request(request);
    let orders = parsed
        .into_iter()
        .map(|(key, value)| {
            (
                match_order_key(&lookup, &key),
                value.map_into(OrderStatus::from),
            )
        })
        .collect();

    Ok(StatusReport::Batch(orders))
}

fn order_lookup_from_request(request: &IdBatch) -> HashMap<String, Identifier> {
    request
        .ids()
        .iter()
        .map(|id| (id.to_string(), id.clone()))
        .collect()
}

fn match_order_key(lookup: &HashMap<String, Identifier>, key: &str) -> Identifier {
    lookup
        .get(key.trim())
        .cloned()
        .unwrap_or_else(|| Identifier::from_wire(key))
}
