#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error;

#[must_use]
pub fn default_env(name: &str, default: &str) -> String {
    option_env(name).unwrap_or_else(|| default.to_string())
}

#[must_use]
pub fn option_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|x| !x.is_empty())
}

#[derive(Error, Debug)]
pub enum DefaultEnvU16Error {
    #[error("Invalid value for {name}: {source}")]
    ParseInt {
        name: String,
        source: std::num::ParseIntError,
    },
}

/// # Errors
///
/// * If the variable is set but is not a valid `u16`
pub fn default_env_u16(name: &str, default: u16) -> Result<u16, DefaultEnvU16Error> {
    match option_env(name) {
        Some(value) => value
            .trim()
            .parse::<u16>()
            .map_err(|source| DefaultEnvU16Error::ParseInt {
                name: name.to_string(),
                source,
            }),
        None => Ok(default),
    }
}

#[derive(Error, Debug)]
pub enum OptionEnvUsizeError {
    #[error("Invalid value for {name}: {source}")]
    ParseInt {
        name: String,
        source: std::num::ParseIntError,
    },
}

/// # Errors
///
/// * If the variable is set but is not a valid `usize`
pub fn option_env_usize(name: &str) -> Result<Option<usize>, OptionEnvUsizeError> {
    option_env(name)
        .map(|value| {
            value
                .trim()
                .parse::<usize>()
                .map_err(|source| OptionEnvUsizeError::ParseInt {
                    name: name.to_string(),
                    source,
                })
        })
        .transpose()
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;

    fn set(name: &str, value: &str) {
        unsafe { std::env::set_var(name, value) };
    }

    fn unset(name: &str) {
        unsafe { std::env::remove_var(name) };
    }

    #[test_log::test]
    #[serial]
    fn default_env_returns_default_when_unset() {
        unset("USERBOX_TEST_DEFAULT_ENV");

        assert_eq!(default_env("USERBOX_TEST_DEFAULT_ENV", "fallback"), "fallback");
    }

    #[test_log::test]
    #[serial]
    fn default_env_returns_value_when_set() {
        set("USERBOX_TEST_DEFAULT_ENV", "127.0.0.1");

        assert_eq!(default_env("USERBOX_TEST_DEFAULT_ENV", "fallback"), "127.0.0.1");

        unset("USERBOX_TEST_DEFAULT_ENV");
    }

    #[test_log::test]
    #[serial]
    fn default_env_returns_default_when_empty() {
        set("USERBOX_TEST_DEFAULT_ENV", "");

        assert_eq!(default_env("USERBOX_TEST_DEFAULT_ENV", "fallback"), "fallback");

        unset("USERBOX_TEST_DEFAULT_ENV");
    }

    #[test_log::test]
    #[serial]
    fn option_env_treats_empty_as_unset() {
        set("USERBOX_TEST_OPTION_ENV", "");

        assert_eq!(option_env("USERBOX_TEST_OPTION_ENV"), None);

        unset("USERBOX_TEST_OPTION_ENV");
    }

    #[test_log::test]
    #[serial]
    fn default_env_u16_parses_value() {
        set("USERBOX_TEST_PORT", " 8080 ");

        assert_eq!(default_env_u16("USERBOX_TEST_PORT", 8000).unwrap(), 8080);

        unset("USERBOX_TEST_PORT");
    }

    #[test_log::test]
    #[serial]
    fn default_env_u16_falls_back_to_default() {
        unset("USERBOX_TEST_PORT");

        assert_eq!(default_env_u16("USERBOX_TEST_PORT", 8000).unwrap(), 8000);
    }

    #[test_log::test]
    #[serial]
    fn default_env_u16_rejects_out_of_range_value() {
        set("USERBOX_TEST_PORT", "70000");

        let err = default_env_u16("USERBOX_TEST_PORT", 8000).unwrap_err();
        assert!(err.to_string().contains("USERBOX_TEST_PORT"));

        unset("USERBOX_TEST_PORT");
    }

    #[test_log::test]
    #[serial]
    fn option_env_usize_is_none_when_unset() {
        unset("USERBOX_TEST_WORKERS");

        assert_eq!(option_env_usize("USERBOX_TEST_WORKERS").unwrap(), None);
    }

    #[test_log::test]
    #[serial]
    fn option_env_usize_parses_value() {
        set("USERBOX_TEST_WORKERS", "3");

        assert_eq!(option_env_usize("USERBOX_TEST_WORKERS").unwrap(), Some(3));

        unset("USERBOX_TEST_WORKERS");
    }
}
