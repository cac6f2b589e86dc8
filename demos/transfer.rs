use anyhow::Context;
use paystack_rust::{
    apis::{
        common::Currency,
        transfer_recipients::{CreateRecipientRequestBuilder, RecipientType},
        transfers::{InitiateTransferRequestBuilder, TransferSource, TransferStatus},
    },
    PaystackClient,
};
use std::time::Duration;

#[derive(serde::Deserialize, Debug)]
struct Config {
    secret_key: String,
    account_number: String,
    bank_code: String,
    account_name: String,
    /// Amount in kobo.
    amount: u64,
}

impl Config {
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

    // Setup Paystack client with a request timeout
    let paystack = PaystackClient::builder(config.secret_key)?
        .with_http_client(
            reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()?,
        )
        .build()?;

    // Make sure the account exists before paying into it
    let account = paystack
        .verification
        .resolve_account(&config.account_number, &config.bank_code)
        .await?
        .into_data()?;
    tracing::info!("Resolved account {} to {}", account.account_number, account.account_name);

    let recipient = paystack
        .transfer_recipients
        .create(
            &CreateRecipientRequestBuilder::default()
                .recipient_type(RecipientType::Nuban)
                .name(config.account_name)
                .account_number(config.account_number)
                .bank_code(config.bank_code)
                .currency(Currency::Ngn)
                .build()?,
        )
        .await?
        .into_data()?;
    tracing::info!("Created recipient {}", recipient.recipient_code);

    let transfer = paystack
        .transfers
        .initiate(
            &InitiateTransferRequestBuilder::default()
                .source(TransferSource::Balance)
                .amount(config.amount)
                .recipient(recipient.recipient_code)
                .reason("Demo transfer")
                .build()?,
        )
        .await?
        .into_data()?;

    match transfer.status {
        TransferStatus::Otp => tracing::info!(
            "Transfer {} is waiting for the OTP sent to the business phone",
            transfer.transfer_code
        ),
        status => tracing::info!("Transfer {} is {:?}", transfer.transfer_code, status),
    }

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
