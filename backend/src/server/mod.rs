//! Server construction and middleware wiring.

mod config;
mod settings;
mod state_builders;

pub use config::ServerConfig;
pub use settings::ServerSettings;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};

use state_builders::build_http_state;
use vetsoft::Trace;
use vetsoft::inbound::http::health::{HealthState, live, ready};
use vetsoft::inbound::http::records::api_scope;

/// Bind and start the HTTP server.
///
/// Marks `health_state` ready once the listener is bound. The returned
/// [`Server`] must be awaited to serve requests.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = build_http_state(&config);
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(server_health_state.clone())
            .wrap(Trace)
            .service(api_scope(http_state.clone()))
            .service(ready)
            .service(live)
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
