// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Load the page (stdin, file or URL)
// 3. Run the requested scrape action
// 4. Print the links in the requested format
// 5. Exit with proper code (0 = success, even with 0 links; 2 = error)
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};

use link_harvest::config::Config;
use link_harvest::dom::html::HtmlPage;
use link_harvest::export::{self, Format};
use link_harvest::normalize::Batch;
use link_harvest::scrape::{self, Action};
use link_harvest::{logging, source};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let config = Config::load(cli.config.as_deref())?;

    // Work out what to scrape and how, from the subcommand
    let (page_args, action) = match cli.command {
        Commands::All { page } => (page, Action::All),
        Commands::Social { page, domains } => {
            let domains = if domains.is_empty() {
                config.social_domains.clone()
            } else {
                domains
            };
            (page, Action::Social(domains))
        }
        Commands::Near { page, at } => (page, Action::Near(at)),
    };
    let format = page_args.format.unwrap_or(config.format);

    let page = source::load(&page_args.input, config.timeout())
        .await
        .with_context(|| format!("could not load {}", page_args.input))?;

    // An explicit --base-url wins over the URL we downloaded from
    let page_url = page_args.base_url.or(page.url);
    let document = HtmlPage::parse(&page.html, page_url.as_deref());
    if let Some(base) = document.base_url() {
        tracing::info!("resolving relative links against {}", base);
    }

    let batch = scrape::run(&document, &action).context("scrape failed")?;

    print_results(&batch, format)?;
    Ok(0)
}

// Prints the links on stdout and a short summary on stderr
fn print_results(batch: &Batch, format: Format) -> Result<()> {
    let output = export::render(&batch.records, format)?;
    if !output.is_empty() {
        println!("{}", output);
    }

    if batch.skipped > 0 {
        eprintln!("📋 {} links found ({} skipped as invalid)", batch.len(), batch.skipped);
    } else {
        eprintln!("📋 {} links found", batch.len());
    }
    Ok(())
}
