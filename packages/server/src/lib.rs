//! HTTP server for `UserBox`.
//!
//! Serves the user management pages of [`userbox_admin_htmx`] backed by a
//! [`Users`] store that lives for the lifetime of the process.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod api;
pub mod config;

use std::net::TcpListener;

use actix_web::{App, Scope, dev::ServerHandle, middleware, web};
use userbox_middleware::api_logger::ApiLogger;
use userbox_users::Users;

pub use config::{Config, ConfigError};

/// Runs the server until it is stopped, serving `users`.
///
/// `on_startup` is called with the server handle once the server is bound,
/// and its result is returned after the server shuts down. When `listener`
/// is given it is used instead of binding `config.addr:config.port`.
///
/// # Errors
///
/// * If the server fails to bind
/// * If the server fails during execution
pub async fn run<T>(
    config: &Config,
    listener: Option<TcpListener>,
    users: Users,
    on_startup: impl FnOnce(ServerHandle) -> T + Send,
) -> std::io::Result<T> {
    let users = web::Data::new(users);

    let app = move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(ApiLogger)
            .app_data(users.clone())
            .service(api::health_endpoint)
            .service(api::root_endpoint)
            .service(userbox_admin_htmx::api::bind_services(Scope::new("")))
    };

    let mut http_server = actix_web::HttpServer::new(app);

    if let Some(workers) = config.workers {
        log::debug!("Running with {workers} Actix workers");
        http_server = http_server.workers(workers);
    }

    let http_server = if let Some(listener) = listener {
        http_server.listen(listener)?
    } else {
        http_server.bind((config.addr.as_str(), config.port))?
    };

    let addrs = http_server.addrs();
    let http_server = http_server.run();

    let resp = on_startup(http_server.handle());

    for addr in &addrs {
        log::info!("UserBox Server started on {addr}");
    }

    http_server.await?;

    log::debug!("Server shut down");

    Ok(resp)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test_log::test(actix_web::test)]
    async fn run_returns_startup_value_after_stop() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let config = Config {
            addr: "127.0.0.1".to_string(),
            port,
            workers: Some(1),
        };

        let resp = run(&config, Some(listener), Users::default(), |handle| {
            actix_web::rt::spawn(async move { handle.stop(true).await });
            port
        })
        .await
        .unwrap();

        assert_eq!(resp, port);
    }
}
