use serde::Deserialize;

use super::envelope::Params;
use super::wire::{TransportError, TransportFlag, TransportText};
use crate::domain::{Balance, NewOrder, OrderCreated, Service};

#[derive(Debug, Clone, Deserialize)]
struct BalanceJsonResponse {
    balance: TransportText,
    #[serde(default)]
    currency: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct OrderJsonResponse {
    order: TransportText,
}

#[derive(Debug, Clone, Deserialize)]
struct ServiceJson {
    service: TransportText,
    #[serde(default)]
    name: String,
    #[serde(default, rename = "type")]
    kind: String,
    #[serde(default)]
    category: String,
    rate: TransportText,
    min: TransportText,
    max: TransportText,
    #[serde(default)]
    dripfeed: Option<TransportFlag>,
    #[serde(default)]
    refill: Option<TransportFlag>,
    #[serde(default)]
    cancel: Option<TransportFlag>,
}

pub fn decode_balance_json_response(json: &str) -> Result<Balance, TransportError> {
    let parsed: BalanceJsonResponse = serde_json::from_str(json)?;
    Ok(Balance {
        balance: parsed.balance.into_string(),
        currency: parsed.currency.unwrap_or_default(),
    })
}

pub fn encode_order_params(order: &NewOrder) -> Params {
    let mut params = Params::new();
    params.insert("service".to_owned(), order.service.to_json());
    if let Some(link) = order.link.as_ref() {
        params.insert("link".to_owned(), link.as_str().into());
    }
    if let Some(quantity) = order.quantity {
        params.insert("quantity".to_owned(), quantity.into());
    }
    if let Some(runs) = order.runs {
        params.insert("runs".to_owned(), runs.into());
    }
    if let Some(intervals) = order.intervals {
        params.insert("intervals".to_owned(), intervals.into());
    }
    // Passthrough fields go last and win on name collisions.
    for (name, value) in &order.extra {
        params.insert(name.clone(), value.clone());
    }
    params
}

pub fn decode_order_json_response(json: &str) -> Result<OrderCreated, TransportError> {
    let parsed: OrderJsonResponse = serde_json::from_str(json)?;
    Ok(OrderCreated {
        order: parsed.order.into_identifier(),
    })
}

pub fn decode_services_json_response(json: &str) -> Result<Vec<Service>, TransportError> {
    let parsed: Vec<ServiceJson> = serde_json::from_str(json)?;
    Ok(parsed
        .into_iter()
        .map(|service| Service {
            service: service.service.into_identifier(),
            name: service.name,
            kind: service.kind,
            category: service.category,
            rate: service.rate.into_string(),
            min: service.min.into_string(),
            max: service.max.into_string(),
            dripfeed: service.dripfeed.is_some_and(TransportFlag::into_bool),
            refill: service.refill.is_some_and(TransportFlag::into_bool),
            cancel: service.cancel.is_some_and(TransportFlag::into_bool),
        })
        .collect())
}
