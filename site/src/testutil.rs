//! Throwaway HTTP servers standing in for the chain service and bot API.

use actix_web::{App, HttpServer, web};
use std::net::TcpListener;

/// Serve `configure` on a random local port. Must be called inside an actix runtime.
pub fn spawn_mock<F>(configure: F) -> String
where
    F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(move || App::new().configure(configure.clone()))
        .workers(1)
        .disable_signals()
        .listen(listener)
        .unwrap()
        .run();
    actix_web::rt::spawn(server);
    format!("http://{}", addr)
}

/// URL of a local port with nothing listening on it.
pub fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
