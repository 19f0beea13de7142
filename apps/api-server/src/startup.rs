//! Server construction, shared by the binary and the integration tests.

use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use crate::handlers;
use crate::state::AppState;

/// Build a server on an already-bound listener. Binding to port 0 and
/// reading the address back is how tests get an isolated server.
///
/// The returned [`Server`] does nothing until awaited or spawned.
pub fn run(listener: TcpListener, state: AppState, workers: usize) -> std::io::Result<Server> {
    let data = web::Data::new(state);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(data.clone())
            .configure(handlers::configure_routes)
    })
    .workers(workers)
    .listen(listener)?
    .run();

    Ok(server)
}
