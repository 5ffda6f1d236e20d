//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{Action, IdBatch, MAX_BATCH_IDS, NewOrder, UnknownAction};
pub use response::{
    Balance, CancelResult, ItemOutcome, OrderCreated, OrderState, OrderStatus, RefillCreated,
    RefillReport, RefillState, RefillStatus, RefillStatusReport, Service, StatusReport,
};
pub use validation::ValidationError;
pub use value::{ApiKey, Endpoint, Identifier};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_rejects_empty() {
        assert!(matches!(
            ApiKey::new("   "),
            Err(ValidationError::Empty {
                field: ApiKey::FIELD
            })
        ));
    }

    #[test]
    fn action_round_trips_through_wire_names() {
        for action in Action::ALL {
            assert_eq!(action.as_str().parse::<Action>(), Ok(action));
        }
        assert_eq!("refill_status".parse::<Action>(), Ok(Action::RefillStatus));
    }

    #[test]
    fn action_rejects_unknown_names() {
        let err = "delete".parse::<Action>().unwrap_err();
        assert_eq!(err, UnknownAction("delete".to_owned()));
        assert!("Balance".parse::<Action>().is_err());
    }

    #[test]
    fn id_batch_limit_is_enforced() {
        let ids = (0..=MAX_BATCH_IDS as u64)
            .map(Identifier::from)
            .collect::<Vec<_>>();
        let err = IdBatch::new(ids).unwrap_err();
        assert_eq!(
            err,
            ValidationError::BatchLimitExceeded {
                max: MAX_BATCH_IDS,
                actual: MAX_BATCH_IDS + 1
            }
        );

        let ids = (0..MAX_BATCH_IDS as u64)
            .map(Identifier::from)
            .collect::<Vec<_>>();
        assert_eq!(IdBatch::new(ids).unwrap().len(), MAX_BATCH_IDS);
    }

    #[test]
    fn id_batch_requires_non_empty() {
        assert!(matches!(
            IdBatch::new(Vec::new()),
            Err(ValidationError::Empty {
                field: IdBatch::FIELD
            })
        ));
    }

    #[test]
    fn id_batch_joins_in_order_without_padding() {
        let batch = IdBatch::new(vec![10_u64.into(), "x-7".into(), 20_u64.into()]).unwrap();
        assert_eq!(batch.joined(), "10,x-7,20");
        assert_eq!(batch.single(), None);

        let single = IdBatch::one(42_u64);
        assert_eq!(single.single(), Some(&Identifier::Number(42)));
        assert_eq!(single.joined(), "42");
    }

    #[test]
    fn new_order_builder_collects_fields() {
        let order = NewOrder::new(1_u64)
            .link("https://example.invalid/post")
            .quantity(100)
            .runs(2)
            .intervals(30)
            .extra("comments", "nice");
        assert_eq!(order.service, Identifier::Number(1));
        assert_eq!(order.quantity, Some(100));
        assert_eq!(order.intervals, Some(30));
        assert_eq!(
            order.extra.get("comments"),
            Some(&serde_json::Value::from("nice"))
        );
    }

    #[test]
    fn order_state_keeps_unknown_values() {
        assert_eq!(OrderState::from_wire("In progress"), OrderState::InProgress);
        assert_eq!(
            OrderState::from_wire("Queued"),
            OrderState::Other("Queued".to_owned())
        );
        assert!(OrderState::Partial.is_final());
        assert!(!OrderState::Pending.is_final());
    }

    #[test]
    fn item_outcome_helpers() {
        let ok: ItemOutcome<u32> = ItemOutcome::Ok(1);
        assert!(ok.is_ok());
        assert_eq!(ok.as_ok(), Some(&1));

        let failed: ItemOutcome<u32> = ItemOutcome::Error {
            message: "Incorrect order ID".to_owned(),
        };
        assert_eq!(failed.error_message(), Some("Incorrect order ID"));
        assert_eq!(failed.into_result(), Err("Incorrect order ID".to_owned()));
    }
}
