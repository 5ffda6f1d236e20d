mod common;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = common::init()?;
    let services = client.services().await?;

    for service in services {
        println!(
            "{}\t{}\t{}\trate={} min={} max={} refill={} cancel={}",
            service.service,
            service.category,
            service.name,
            service.rate,
            service.min,
            service.max,
            service.refill,
            service.cancel
        );
    }

    Ok(())
}
