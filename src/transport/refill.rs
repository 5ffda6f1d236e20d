use serde::Deserialize;

use super::envelope::Params;
use super::wire::{TransportError, TransportItem, TransportText};
use crate::domain::{
    IdBatch, RefillCreated, RefillReport, RefillState, RefillStatus, RefillStatusReport,
};

#[derive(Debug, Clone, Deserialize)]
struct SingleRefillJsonResponse {
    refill: TransportItem<TransportText>,
}

#[derive(Debug, Clone, Deserialize)]
struct RefillCreatedJson {
    order: TransportText,
    refill: TransportItem<TransportText>,
}

#[derive(Debug, Clone, Deserialize)]
struct SingleRefillStatusJsonResponse {
    #[serde(default)]
    status: Option<TransportItem<String>>,
    #[serde(default)]
    refill: Option<TransportItem<TransportText>>,
}

#[derive(Debug, Clone, Deserialize)]
struct RefillStatusJson {
    refill: TransportText,
    status: TransportItem<String>,
}

pub fn encode_refill_params(request: &IdBatch) -> Params {
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

pub fn decode_refill_json_response(
    request: &IdBatch,
    json: &str,
) -> Result<RefillReport, TransportError> {
    if request.single().is_some() {
        let parsed: SingleRefillJsonResponse = serde_json::from_str(json)?;
        return Ok(RefillReport::Single(
            parsed.refill.map_into(TransportText::into_identifier),
        ));
    }

    let parsed: Vec<RefillCreatedJson> = serde_json::from_str(json)?;
    Ok(RefillReport::Batch(
        parsed
            .into_iter()
            .map(|item| RefillCreated {
                order: item.order.into_identifier(),
                refill: item.refill.map_into(TransportText::into_identifier),
            })
            .collect(),
    ))
}

pub fn encode_refill_status_params(request: &IdBatch) -> Params {
    let mut params = Params::new();
    match request.single() {
        Some(refill) => {
            params.insert("refill".to_owned(), refill.to_json());
        }
        None => {
            params.insert("refills".to_owned(), request.joined().into());
        }
    }
    params
}

pub fn decode_refill_status_json_response(
    request: &IdBatch,
    json: &str,
) -> Result<RefillStatusReport, TransportError> {
    if request.single().is_some() {
        let parsed: SingleRefillStatusJsonResponse = serde_json::from_str(json)?;
        // Providers answer either `{"status": ...}` or `{"refill": ...}` here.
        let outcome = match (parsed.status, parsed.refill) {
            (Some(status), _) => status.map_into(|state| RefillState::from_wire(&state)),
            (None, Some(refill)) => {
                refill.map_into(|state| RefillState::from_wire(&state.into_string()))
            }
            (None, None) => return Err(TransportError::MissingField { field: "status" }),
        };
        return Ok(RefillStatusReport::Single(outcome));
    }

    let parsed: Vec<RefillStatusJson> = serde_json::from_str(json)?;
    Ok(RefillStatusReport::Batch(
        parsed
            .into_iter()
            .map(|item| RefillStatus {
                refill: item.refill.into_identifier(),
                status: item.status.map_into(|state| RefillState::from_wire(&state)),
            })
            .collect(),
    ))
}
