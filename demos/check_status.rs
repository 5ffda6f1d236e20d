mod common;

use smmv2::{ItemOutcome, StatusReport};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = common::init()?;
    let orders = common::ids_from_env("SMM_ORDER_IDS")?;

    match client.status(orders).await? {
        StatusReport::Single(ItemOutcome::Ok(status)) => println!("{status:?}"),
        StatusReport::Single(ItemOutcome::Error { message }) => println!("error: {message}"),
        StatusReport::Batch(statuses) => {
            for (order, status) in statuses {
                println!("{order}: {status:?}");
            }
        }
    }

    Ok(())
}
