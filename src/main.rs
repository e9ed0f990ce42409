use clap::Parser;
use miette::{IntoDiagnostic, Result};
use orderflow::notifier::ConsoleNotifier;
use orderflow::processor::OrderProcessor;
use orderflow::reader::OrderReader;
use orderflow::store::InMemoryStore;
use orderflow::writer::OrderWriter;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input orders CSV file
    input: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep stdout clean for the CSV output; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let mut processor = OrderProcessor::new(InMemoryStore::new(), ConsoleNotifier::new());

    // Process orders
    let file = File::open(cli.input).into_diagnostic()?;
    let reader = OrderReader::new(file);
    let mut orders = Vec::new();
    for order_result in reader.orders() {
        match order_result {
            Ok(mut order) => {
                if !processor.process_order(&mut order) {
                    eprintln!("Order {} was not processed", order.id);
                }
                orders.push(order);
            }
            Err(e) => {
                eprintln!("Error reading order: {}", e);
            }
        }
    }

    // Output final state
    let stdout = io::stdout();
    let mut writer = OrderWriter::new(stdout.lock());
    writer.write_orders(orders).into_diagnostic()?;

    Ok(())
}
