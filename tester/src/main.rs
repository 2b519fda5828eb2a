use anyhow::Result;
use clap::Parser;
use serde_json::json;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[arg(default_value = "http://localhost:1414")]
    base_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let client = reqwest::Client::new();

    let quote = json!({ "zone": "neighbor", "distance_km": 1.0 });

    let response = client
        .post(format!("{}/quote", args.base_url))
        .json(&quote)
        .send()
        .await?;

    println!("Quote status: {}", response.status());
    println!("{}\n", response.text().await?);

    let checkout = json!({
        "customer": "Maria",
        "zone": "far",
        "distance_km": 4.2,
        "address": {
            "street": "Rua das Laranjeiras",
            "number": "1200",
            "neighborhood": "Laranjeiras"
        },
        "items": [
            { "name": "Açaí 500ml", "quantity": 2, "unit_price": 25.0 },
            { "name": "Picolé de manga", "quantity": 1, "unit_price": 6.0 }
        ]
    });

    let response = client
        .post(format!("{}/checkout", args.base_url))
        .json(&checkout)
        .send()
        .await?;

    println!("Checkout status: {}", response.status());
    println!("{}", response.text().await?);

    Ok(())
}
