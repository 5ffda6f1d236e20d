use serde::Deserialize;

use super::envelope::Params;
use super::wire::{TransportError, TransportItem, TransportText};
use crate::domain::{CancelResult, IdBatch};

#[derive(Debug, Clone, Deserialize)]
struct CancelJson {
    order: TransportText,
    cancel: TransportItem<TransportText>,
}

/// Cancel always uses the plural `orders` field, even for one id.
pub fn encode_cancel_params(request: &IdBatch) -> Params {
    let mut params = Params::new();
    params.insert("orders".to_owned(), request.joined().into());
    params
}

pub fn decode_cancel_json_response(json: &str) -> Result<Vec<CancelResult>, TransportError> {
    let parsed: Vec<CancelJson> = serde_json::from_str(json)?;
    Ok(parsed
        .into_iter()
        .map(|item| CancelResult {
            order: item.order.into_identifier(),
            cancel: item.cancel.map_into(TransportText::into_identifier),
        })
        .collect())
}
