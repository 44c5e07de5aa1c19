//! # bubble-sort
//!
//! Bubble sort, performed by hand in the terminal.  Two neighbouring tiles
//! are highlighted at a time and you decide whether to swap them; the game
//! walks the passes, counts comparisons and rounds, and tells you when the
//! row is in order.
//!
//! Run with: `cargo run -p bubble-sort -- --count 6 --order desc`

mod app;
mod cli;
mod keymap;
mod logging;

use anyhow::Context;
use app::App;
use clap::Parser;
use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        logging::init(path, &cli.log_level)?;
    }

    let app = bubble_runtime::run_with::<App>(cli.settings(), cli.program_options())
        .await
        .context("terminal session failed")?;

    println!("{}", app.summary());
    Ok(())
}
