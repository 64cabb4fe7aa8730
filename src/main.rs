use clap::Parser;
use feegate::domain::entity::{Client, FinancialEntity};
use feegate::domain::fees::WithdrawalFee;
use feegate::domain::ports::CallbackChannelBox;
use feegate::domain::receipt::TransactionOutcome;
use feegate::infrastructure::console::ConsoleNotifier;
use feegate::infrastructure::webhook::{RejectingCallback, WebhookCallback};
use miette::Result;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Amount of the transaction to run
    #[arg(long, default_value = "1800.0")]
    amount: Decimal,

    /// Webhook endpoint receiving the transaction callback
    #[arg(
        long,
        env = "FEEGATE_CALLBACK_URL",
        default_value = "https://webhook.site/your-token"
    )]
    callback_url: String,

    /// Refuse the callback to exercise the rejection path
    #[arg(long)]
    fail_callback: bool,
}

impl Cli {
    fn callback(&self) -> CallbackChannelBox {
        if self.fail_callback {
            Box::new(RejectingCallback)
        } else {
            Box::new(WebhookCallback::new(self.callback_url.clone()))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| miette::miette!("{e}"))?;

    let cli = Cli::parse();

    let company = FinancialEntity::new(
        "123456789",
        Box::new(WithdrawalFee),
        cli.callback(),
        Box::new(ConsoleNotifier),
    );
    tracing::debug!(identifier = company.identifier(), "company entity ready");

    let mut client = Client::new(
        "987654321",
        Box::new(WithdrawalFee),
        cli.callback(),
        Box::new(ConsoleNotifier),
    );

    match client.perform_transaction(cli.amount).await {
        TransactionOutcome::Committed(receipt) => {
            tracing::debug!(fee = %receipt.fee, "transaction committed");
        }
        TransactionOutcome::Rejected { amount } => {
            println!("Callback failed. Transaction of {amount} not completed.");
        }
    }

    Ok(())
}
