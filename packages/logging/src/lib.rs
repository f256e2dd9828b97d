#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

#[cfg(feature = "macros")]
mod macros;

pub use log;
use thiserror::Error;
use userbox_env_utils::option_env;

#[cfg(debug_assertions)]
pub const DEFAULT_LOG_LEVEL: &str = "userbox=trace";
#[cfg(not(debug_assertions))]
pub const DEFAULT_LOG_LEVEL: &str = "userbox=info";

#[derive(Debug, Error)]
pub enum InitError {
    #[error(transparent)]
    SetLogger(#[from] log::SetLoggerError),
}

/// Resolves the log filter, preferring `USERBOX_LOG` over `RUST_LOG`.
#[must_use]
pub fn env_filter() -> String {
    option_env("USERBOX_LOG")
        .or_else(|| option_env("RUST_LOG"))
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

/// # Errors
///
/// * If a global logger has already been installed
pub fn init() -> Result<(), InitError> {
    let filter = env_filter();

    env_logger::Builder::new()
        .parse_filters(&filter)
        .format_timestamp_millis()
        .try_init()?;

    log::debug!("Initialized logging with filter '{filter}'");

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;

    fn clear() {
        unsafe {
            std::env::remove_var("USERBOX_LOG");
            std::env::remove_var("RUST_LOG");
        }
    }

    #[test_log::test]
    #[serial]
    fn env_filter_defaults_when_nothing_is_set() {
        clear();

        assert_eq!(env_filter(), DEFAULT_LOG_LEVEL);
    }

    #[test_log::test]
    #[serial]
    fn env_filter_prefers_userbox_log() {
        clear();
        unsafe {
            std::env::set_var("USERBOX_LOG", "userbox_users=debug");
            std::env::set_var("RUST_LOG", "warn");
        }

        assert_eq!(env_filter(), "userbox_users=debug");

        clear();
    }

    #[test_log::test]
    #[serial]
    fn env_filter_falls_back_to_rust_log() {
        clear();
        unsafe { std::env::set_var("RUST_LOG", "warn") };

        assert_eq!(env_filter(), "warn");

        clear();
    }
}
