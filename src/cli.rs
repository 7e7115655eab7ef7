// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There is one subcommand per scrape action:
// - all:    every link on the page, each URL once
// - social: links to known platforms (YouTube, Bandcamp, ...)
// - near:   links around one element, picked with a CSS selector
//
// All of them take the same page/format options (PageArgs).
// =============================================================================

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use link_harvest::export::Format;

#[derive(Parser, Debug)]
#[command(
    name = "link-harvest",
    version,
    about = "Collect the links on a web page, cleaned of tracking junk",
    long_about = "link-harvest collects the links on a web page, unwraps redirect wrappers, \
                  strips tracking parameters (utm_*, fbclid, ...) and prints them as plain URLs, \
                  domain+path, CSV, TSV or JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// TOML config file (social domains, timeout, default format)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scrape every link on the page, each clean URL once
    ///
    /// Example: link-harvest all https://example.com --format csv
    All {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Scrape links to social and music platforms only
    ///
    /// Example: link-harvest social saved.html --domain bandcamp.com --domain youtube.com
    Social {
        #[command(flatten)]
        page: PageArgs,

        /// Platform domain to keep (repeatable); replaces the configured list
        #[arg(long = "domain")]
        domains: Vec<String>,
    },

    /// Scrape the links around one element of the page
    ///
    /// Example: link-harvest near page.html --at "#tracklist li:nth-child(3)"
    Near {
        #[command(flatten)]
        page: PageArgs,

        /// CSS selector for the element to start from (first match is used)
        #[arg(long)]
        at: String,
    },
}

#[derive(Args, Debug)]
pub struct PageArgs {
    /// Page to scrape: an http(s) URL, a saved HTML file, or - for stdin
    pub input: String,

    /// URL relative links are resolved against (defaults to the page URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Output format (defaults to the config file's, else urls)
    #[arg(long, value_enum)]
    pub format: Option<Format>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_near() {
        let cli = Cli::try_parse_from([
            "link-harvest",
            "near",
            "page.html",
            "--at",
            "#list",
            "--format",
            "domain-path",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Near { page, at } => {
                assert_eq!(page.input, "page.html");
                assert_eq!(page.format, Some(Format::DomainPath));
                assert_eq!(at, "#list");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_social_domains() {
        let cli = Cli::try_parse_from([
            "link-harvest",
            "social",
            "-",
            "--domain",
            "bandcamp.com",
            "--domain",
            "youtube.com",
        ])
        .unwrap();

        match cli.command {
            Commands::Social { page, domains } => {
                assert_eq!(page.input, "-");
                assert_eq!(domains, vec!["bandcamp.com", "youtube.com"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_near_requires_at() {
        assert!(Cli::try_parse_from(["link-harvest", "near", "page.html"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
