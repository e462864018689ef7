//! Prints the sample receipts to stdout.

use std::io;

use sales_tax::config::FixtureLoader;
use sales_tax::error::TaxResult;
use sales_tax::render::render_receipt;
use tracing::info;

fn main() -> TaxResult<()> {
    // Logs go to stderr so stdout only carries receipt text.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true)
        .init();

    let loader = FixtureLoader::embedded()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for receipt in loader.receipts() {
        info!(receipt = %receipt.name, "Processing receipt");
        let items = receipt.build_items()?;
        render_receipt(&items, &mut out)?;
    }

    Ok(())
}
