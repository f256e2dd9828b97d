#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::io::{Error, ErrorKind};

use userbox_server::Config;
use userbox_users::Users;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = userbox_logging::init() {
        eprintln!("Failed to initialize logging: {e:?}");
    }

    let args: Vec<String> = std::env::args().collect();
    let config = Config::from_env(&args).map_err(|e| Error::new(ErrorKind::InvalidInput, e))?;

    userbox_logging::debug_or_trace!(
        ("Starting server on {}:{}", config.addr, config.port),
        ("Starting server with {config:?}")
    );

    userbox_server::run(&config, None, Users::default(), |_| ()).await
}
