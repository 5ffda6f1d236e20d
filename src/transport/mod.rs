//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod account;
mod cancel;
mod envelope;
mod refill;
mod status;
mod wire;

pub use account::{
    decode_balance_json_response, decode_order_json_response, decode_services_json_response,
    encode_order_params,
};
pub use cancel::{decode_cancel_json_response, encode_cancel_params};
pub use envelope::{Params, encode_envelope};
pub use refill::{
    decode_refill_json_response, decode_refill_status_json_response, encode_refill_params,
    encode_refill_status_params,
};
pub use status::{decode_status_json_response, encode_status_params};
pub use wire::{
    DEFAULT_ERROR_MESSAGE, TransportError, decode_error_message, error_message_or_default,
};
