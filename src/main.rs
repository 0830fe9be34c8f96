use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result, miette};
use rklink::callback::ResultNotification;
use rklink::config::MerchantConfig;
use rklink::link::{PaymentRequest, generate_payment_link};
use rklink::reader::OrderReader;
use rklink::writer::{LinkRecord, LinkWriter};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a payment redirect URL for a single invoice
    Link {
        /// Amount to charge, in rubles
        amount: Decimal,

        /// Merchant-assigned invoice number
        invoice_id: u32,

        /// Payment description shown to the payer
        description: String,

        /// Mark the payment as recurring (adds Recurring=1)
        #[arg(long)]
        recurring: bool,

        /// Extra Shp_* user parameter (repeatable)
        #[arg(long = "shp", value_name = "KEY=VALUE")]
        shp: Vec<String>,

        /// Print the full link record as JSON instead of the bare URL
        #[arg(long)]
        json: bool,
    },

    /// Generate links for every order in a CSV file
    Batch {
        /// Input orders CSV file (invoice_id, amount, description, recurring)
        input: PathBuf,
    },

    /// Verify a result-callback signature
    Verify {
        /// OutSum exactly as received from the gateway
        out_sum: String,

        /// InvId exactly as received from the gateway
        inv_id: String,

        /// SignatureValue received from the gateway
        signature: String,

        /// Shp_* user parameter echoed by the gateway (repeatable)
        #[arg(long = "shp", value_name = "KEY=VALUE")]
        shp: Vec<String>,
    },
}

fn main() -> Result<ExitCode> {
    dotenv::dotenv().ok();
    pretty_env_logger::init();

    let cli = Cli::parse();
    let config = MerchantConfig::from_env().into_diagnostic()?;

    match cli.command {
        Command::Link {
            amount,
            invoice_id,
            description,
            recurring,
            shp,
            json,
        } => {
            let mut request = PaymentRequest::new(amount, invoice_id, description);
            if recurring {
                request = request.recurring();
            }
            for pair in &shp {
                let (key, value) = split_shp_pair(pair)?;
                request = request.with_user_param(key, value);
            }

            let link = generate_payment_link(&config, &request).into_diagnostic()?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&link).into_diagnostic()?
                );
            } else {
                println!("{}", link.url);
            }
        }

        Command::Batch { input } => {
            let file = File::open(input).into_diagnostic()?;
            let reader = OrderReader::new(file);

            let stdout = io::stdout();
            let mut writer = LinkWriter::new(stdout.lock());
            for order_result in reader.orders() {
                match order_result {
                    Ok(order) => {
                        let mut request =
                            PaymentRequest::new(order.amount, order.invoice_id, order.description);
                        if order.recurring.unwrap_or(false) {
                            request = request.recurring();
                        }
                        match generate_payment_link(&config, &request) {
                            Ok(link) => {
                                writer
                                    .write_link(&LinkRecord::from_link(order.invoice_id, &link))
                                    .into_diagnostic()?;
                            }
                            Err(e) => {
                                eprintln!("Error generating link: {}", e);
                            }
                        }
                    }
                    Err(e) => {
                        eprintln!("Error reading order: {}", e);
                    }
                }
            }
            writer.flush().into_diagnostic()?;
        }

        Command::Verify {
            out_sum,
            inv_id,
            signature,
            shp,
        } => {
            let mut notification = ResultNotification::new(out_sum, inv_id, signature);
            for pair in &shp {
                let (key, value) = split_shp_pair(pair)?;
                notification = notification.with_user_param(key, value);
            }

            if notification.verify(&config.password2) {
                println!("{}", notification.success_response());
            } else {
                eprintln!("Signature mismatch");
                eprintln!("expected: {}", notification.expected_signature(&config.password2));
                eprintln!("received: {}", notification.signature);
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn split_shp_pair(pair: &str) -> Result<(&str, &str)> {
    pair.split_once('=')
        .ok_or_else(|| miette!("expected KEY=VALUE, got {pair:?}"))
}
