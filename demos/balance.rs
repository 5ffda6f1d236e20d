mod common;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = common::init()?;
    let balance = client.balance().await?;

    println!("balance: {} {}", balance.balance, balance.currency);

    Ok(())
}
