mod common;

use smmv2::{Identifier, NewOrder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = common::init()?;
    let service = common::required_env("SMM_SERVICE_ID")?;
    let link = common::required_env("SMM_LINK")?;
    let quantity = common::required_env("SMM_QUANTITY")?.trim().parse::<u64>()?;

    let order = NewOrder::new(Identifier::from_wire(&service))
        .link(link)
        .quantity(quantity);
    let created = client.order(&order).await?;

    println!("order: {}", created.order);

    Ok(())
}
