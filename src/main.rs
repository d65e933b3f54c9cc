//! sops-acl - Inspect who can decrypt what in a SOPS secrets repository.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sops_acl::cli::output;
use sops_acl::cli::{execute, Cli};
use sops_acl::core::constants;
use sops_acl::error::{ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("sops_acl=debug")
        } else {
            EnvFilter::new("sops_acl=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Config(ConfigError::RootNotFound(_)) => {
                Some("pass --root <path> or set SOPS_ACL_ROOT")
            }
            Error::Config(ConfigError::Parse(_)) | Error::Config(ConfigError::InvalidValue { .. }) => {
                Some("check .sops-acl.toml or the file given with --config")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
