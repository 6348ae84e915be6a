use clap::Parser;
use miette::{IntoDiagnostic, Result};
use paygate::application::processor::PaymentProcessor;
use paygate::domain::ports::PaymentGatewayBox;
use paygate::error::PaymentError;
use paygate::infrastructure::in_memory::InMemoryGateway;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Emit each outcome as a JSON line instead of human-readable text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let gateway: PaymentGatewayBox = Box::new(InMemoryGateway::new());
    let processor = PaymentProcessor::new(gateway);

    charge(&processor, "user123", dec!(150.0), cli.json)?;
    charge(&processor, "user456", dec!(200.0), cli.json)?;
    charge(&processor, "user789", dec!(-50.0), cli.json)?;
    charge(&processor, "", dec!(100.0), cli.json)?;
    refund(&processor, "txn1", cli.json)?;
    refund(&processor, "nonexistent_txn", cli.json)?;
    check_status(&processor, "txn1", cli.json)?;
    check_status(&processor, "nonexistent_txn", cli.json)?;

    Ok(())
}

fn charge(processor: &PaymentProcessor, user_id: &str, amount: Decimal, json: bool) -> Result<()> {
    match processor.process_payment(user_id, amount) {
        Ok(result) => {
            if json {
                println!("{}", serde_json::to_string(&result).into_diagnostic()?);
            } else {
                println!(
                    "Payment result: Success={}, Transaction ID={}, Message={}",
                    result.success, result.transaction_id, result.message
                );
            }
            match processor.payment_status(&result.transaction_id) {
                Ok(status) => {
                    if json {
                        println!(
                            "{}",
                            json!({ "transaction_id": result.transaction_id, "status": status })
                        );
                    } else {
                        println!("Payment status: {status}");
                    }
                }
                Err(err) => report_error(&err, json),
            }
        }
        Err(err) => report_error(&err, json),
    }
    Ok(())
}

fn refund(processor: &PaymentProcessor, transaction_id: &str, json: bool) -> Result<()> {
    match processor.refund_payment(transaction_id) {
        Ok(result) => {
            if json {
                println!("{}", serde_json::to_string(&result).into_diagnostic()?);
            } else {
                println!(
                    "Refund result: Success={}, Transaction ID={}, Message={}",
                    result.success, result.transaction_id, result.message
                );
            }
        }
        Err(err) => report_error(&err, json),
    }
    Ok(())
}

fn check_status(processor: &PaymentProcessor, transaction_id: &str, json: bool) -> Result<()> {
    match processor.payment_status(transaction_id) {
        Ok(status) => {
            if json {
                println!(
                    "{}",
                    json!({ "transaction_id": transaction_id, "status": status })
                );
            } else {
                println!("Payment status for Transaction ID={transaction_id}: {status}");
            }
        }
        Err(err) => report_error(&err, json),
    }
    Ok(())
}

fn report_error(err: &PaymentError, json: bool) {
    if json {
        println!(
            "{}",
            json!({ "error": err.to_string(), "invalid_argument": err.is_invalid_argument() })
        );
    } else if err.is_invalid_argument() {
        println!("Invalid argument error: {err}");
    } else {
        println!("An error occurred: {err}");
    }
}
