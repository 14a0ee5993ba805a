//! Run configuration.
//!
//! Settings come from command-line arguments plus one environment variable
//! holding the access secret (`ADMIN_VIEW_PASSWORD` unless `--secret-env`
//! names another). They are resolved once in [`Settings`] and passed down
//! explicitly; nothing below the command layer reads the environment.

pub mod settings;

pub use settings::{Settings, DEFAULT_INPUT, DEFAULT_SECRET_ENV};
