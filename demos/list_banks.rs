use anyhow::Context;
use paystack_rust::{apis::miscellaneous::ListBanksRequestBuilder, PaystackClient};

#[derive(serde::Deserialize, Debug)]
struct Config {
    secret_key: String,
    #[serde(default = "default_country")]
    country: String,
}

fn default_country() -> String {
    "nigeria".to_string()
}

impl Config {
    /// Reads `config.{toml,json,yaml}` if present, then `PAYSTACK_*` environment variables.
    fn read() -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("PAYSTACK"))
            .build()?
            .try_deserialize()
            .context("Failed to assemble the required configuration")
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::read()?;

    let paystack = PaystackClient::new(config.secret_key)?;

    // Walk all pages of banks using the cursor
    let mut request = ListBanksRequestBuilder::default()
        .country(config.country.as_str())
        .use_cursor(true)
        .per_page(50)
        .build()?;
    let mut total = 0;
    loop {
        let res = paystack.miscellaneous.list_banks(&request).await?;
        let next = res.meta.as_ref().and_then(|m| m.next.clone());

        for bank in res.into_data()? {
            tracing::info!(code = %bank.code, transfers = ?bank.supports_transfer, "{}", bank.name);
            total += 1;
        }

        match next {
            Some(cursor) => request.next = Some(cursor),
            None => break,
        }
    }

    tracing::info!("Found {} banks in {}", total, config.country);

    Ok(())
}

#[tokio::main]
async fn main() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Setting default subscriber failed");

    if let Err(e) = run().await {
        tracing::error!("Fatal error: {:?}", e);
        std::process::exit(1);
    }
}
