use crate::config::{self, Config};
use crate::logging;
use crate::search::{Operation, QueryOptions, SearchClient, StaticReferer};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand)]
enum Command {
    /// Run a search and print the response data as JSON
    Search {
        /// Operation (web, local, video, blogs, news, books, images, patent)
        operation: String,

        /// Search string
        query: String,

        /// Extra query parameter, e.g. `-o safe=active`
        #[arg(short = 'o', long = "option", value_parser = parse_option)]
        options: Vec<(String, String)>,

        /// Results per page, overrides the configured default
        #[arg(long)]
        rsz: Option<u32>,

        /// Referer header, overrides the configured one
        #[arg(long)]
        referer: Option<String>,

        /// Print JSON on a single line
        #[arg(long, action, default_value = "false")]
        compact: bool,
    },
    /// List the supported operations
    Operations {},
    /// Print the effective configuration
    Config {
        /// Print the config file path instead
        #[arg(long, action, default_value = "false")]
        show_path: bool,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (defaults to ~/.config/gsearch/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write debug logs to a file
    #[arg(long, global = true, action, default_value = "false")]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

pub fn run() -> Result<()> {
    let args = Cli::parse();

    let config_path = match args.config {
        Some(path) => path,
        None => config::config_path()?,
    };
    let created = !config_path.exists();
    let mut cfg = config::load_or_create_config_at(&config_path)?;
    cfg.debug |= args.debug;

    let _log_guard = logging::init(&cfg)?;
    if created {
        tracing::info!(path = %config_path.display(), "created default config");
    }

    match args.command {
        Command::Search {
            operation,
            query,
            options,
            rsz,
            referer,
            compact,
        } => {
            let mut options: QueryOptions = options.into_iter().collect();
            if let Some(rsz) = rsz {
                options.set("rsz", rsz);
            }
            let data = search(&cfg, &operation, &query, &options, referer)?;
            let out = if compact {
                serde_json::to_string(&data)?
            } else {
                serde_json::to_string_pretty(&data)?
            };
            println!("{out}");
        }
        Command::Operations {} => {
            for op in Operation::ALL {
                println!("{op}");
            }
        }
        Command::Config { show_path } => {
            if show_path {
                println!("{}", config_path.display());
            } else {
                print!("{}", toml::to_string_pretty(&cfg).context("Failed to serialize config")?);
            }
        }
    }

    Ok(())
}

fn search(
    cfg: &Config,
    operation: &str,
    query: &str,
    options: &QueryOptions,
    referer: Option<String>,
) -> Result<serde_json::Value> {
    let referer = referer.or_else(|| cfg.referer.clone());
    let client = SearchClient::new(cfg.client_config())
        .context("Failed to build HTTP client")?
        .with_referer(StaticReferer(referer));

    let data = client
        .dispatch(operation, query, options)
        .with_context(|| format!("{operation} search for {query:?} failed"))?;
    Ok(data)
}

/// Parse `NAME=VALUE`
fn parse_option(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{raw}`"))?;
    if name.is_empty() {
        return Err(format!("empty option name in `{raw}`"));
    }
    Ok((name.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_option() {
        assert_eq!(
            parse_option("safe=active").unwrap(),
            ("safe".to_string(), "active".to_string())
        );
        assert_eq!(
            parse_option("q=a=b").unwrap(),
            ("q".to_string(), "a=b".to_string())
        );
        assert!(parse_option("safe").is_err());
        assert!(parse_option("=x").is_err());
    }

    #[test]
    fn test_search_args() {
        let cli = Cli::try_parse_from([
            "gsearch", "search", "images", "cougar", "-o", "safe=active", "--rsz", "4",
        ])
        .unwrap();

        match cli.command {
            Command::Search {
                operation,
                query,
                options,
                rsz,
                ..
            } => {
                assert_eq!(operation, "images");
                assert_eq!(query, "cougar");
                assert_eq!(options, vec![("safe".to_string(), "active".to_string())]);
                assert_eq!(rsz, Some(4));
            }
            _ => panic!("expected search command"),
        }
    }
}
