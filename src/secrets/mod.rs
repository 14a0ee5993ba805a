//! Secret handling.
//!
//! - [`SecretString`] - Holds a secret, redacts it from `Debug`, wipes it on drop
//! - [`constant_time_eq`] - Byte comparison that does not leak the mismatch position

pub mod secret;

pub use secret::{constant_time_eq, SecretString};
