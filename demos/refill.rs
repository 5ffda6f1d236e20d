mod common;

use smmv2::RefillReport;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = common::init()?;
    let orders = common::ids_from_env("SMM_ORDER_IDS")?;

    match client.refill(orders).await? {
        RefillReport::Single(refill) => println!("refill: {refill:?}"),
        RefillReport::Batch(items) => {
            for item in items {
                match item.refill.into_result() {
                    Ok(refill) => println!("{}: refill {refill}", item.order),
                    Err(message) => println!("{}: error: {message}", item.order),
                }
            }
        }
    }

    Ok(())
}
