//! Run settings.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::cli::Cli;
use crate::disclosure::DisclosureConfig;
use crate::report::ReportFormat;
use crate::secrets::SecretString;

/// Input file used when none is given.
pub const DEFAULT_INPUT: &str = "usuarios.txt";

/// Environment variable holding the access secret by default.
pub const DEFAULT_SECRET_ENV: &str = "ADMIN_VIEW_PASSWORD";

/// Resolved settings for one run.
///
/// `Debug` output never contains the secret.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Record file to read.
    pub input: PathBuf,
    /// Variable the secret was read from.
    pub secret_env: String,
    /// Configured secret, if the variable was set and non-empty.
    pub secret: Option<SecretString>,
    /// Report format.
    pub format: ReportFormat,
}

impl Settings {
    /// Resolve settings from parsed arguments and the process environment.
    pub fn from_cli(cli: &Cli) -> Self {
        Self::with_lookup(cli, |name| std::env::var(name).ok())
    }

    /// Resolve settings using `lookup` for environment variables.
    ///
    /// # Example
    ///
    /// ```
    /// use clap::Parser;
    /// use safeview::cli::Cli;
    /// use safeview::config::Settings;
    ///
    /// let cli = Cli::parse_from(["safeview", "data.txt"]);
    /// let settings = Settings::with_lookup(&cli, |name| {
    ///     (name == "ADMIN_VIEW_PASSWORD").then(|| "s3cret".to_string())
    /// });
    /// assert!(settings.has_secret());
    /// assert!(!format!("{:?}", settings).contains("s3cret"));
    /// ```
    pub fn with_lookup<F>(cli: &Cli, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup(&cli.secret_env)
            .filter(|value| !value.is_empty())
            .map(SecretString::from);

        if secret.is_none() {
            warn!("{} is not set; only names can be shown", cli.secret_env);
        } else {
            debug!(variable = %cli.secret_env, "Secret configured");
        }

        Self {
            input: cli.file.clone(),
            secret_env: cli.secret_env.clone(),
            secret,
            format: cli.format,
        }
    }

    /// Whether a secret is configured.
    pub fn has_secret(&self) -> bool {
        self.secret.is_some()
    }

    /// Configuration for the disclosure gate.
    pub fn disclosure_config(&self) -> DisclosureConfig {
        match &self.secret {
            Some(secret) => DisclosureConfig::with_secret(secret.clone()),
            None => DisclosureConfig::disabled(),
        }
    }
}
