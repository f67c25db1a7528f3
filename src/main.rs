use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use optimal_redirect::config::{ENV_DEV_HOST, ENV_WEB_ORIGIN};
use optimal_redirect::{
    extract_code, make_redirect_uri, AppEnvironment, PlatformRedirectBuilder, RedirectConfig,
};

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum EnvKind {
    Standalone,
    Development,
    Web,
}

/// OAuth redirect URI and callback helper for the optimal:// scheme
#[derive(Parser, Debug)]
#[command(name = "optimal-redirect")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "OAuth redirect URI and callback helper", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the redirect URI for an environment
    RedirectUri {
        /// Target environment (defaults to --config, then OPTIMAL_APP_ENV, then standalone)
        #[arg(long, value_enum)]
        env: Option<EnvKind>,

        /// TOML file with an [environment] table
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Development server host[:port]
        #[arg(long, env = ENV_DEV_HOST)]
        dev_host: Option<String>,

        /// Web origin, e.g. https://app.example.com
        #[arg(long, env = ENV_WEB_ORIGIN)]
        web_origin: Option<String>,
    },
    /// Print the authorization code from a callback URL
    Code {
        /// Full callback URL
        url: String,
    },
}

fn environment_for(
    env: Option<EnvKind>,
    config: Option<PathBuf>,
    dev_host: Option<String>,
    web_origin: Option<String>,
) -> Result<AppEnvironment> {
    let environment = match env {
        None => match config {
            Some(path) => RedirectConfig::from_toml_file(path)?.environment,
            None => RedirectConfig::from_env()?.environment,
        },
        Some(EnvKind::Standalone) => AppEnvironment::Standalone,
        Some(EnvKind::Development) => AppEnvironment::DevelopmentClient {
            host: dev_host.ok_or_else(|| anyhow!("--dev-host or {ENV_DEV_HOST} is required"))?,
        },
        Some(EnvKind::Web) => AppEnvironment::Web {
            origin: web_origin.ok_or_else(|| anyhow!("--web-origin or {ENV_WEB_ORIGIN} is required"))?,
        },
    };
    Ok(environment)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::RedirectUri { env, config, dev_host, web_origin } => {
            let environment = environment_for(env, config, dev_host, web_origin)?;
            let uri = make_redirect_uri(&PlatformRedirectBuilder::new(environment))?;
            println!("{uri}");
        }
        Command::Code { url } => match extract_code(&url)? {
            Some(code) => println!("{code}"),
            None => {
                eprintln!("no code parameter in {url}");
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
