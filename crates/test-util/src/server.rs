// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Stand-in for the remote services the crates talk to over HTTP
use actix_web::dev::ServerHandle;
use actix_web::{web, App, HttpServer};
use std::net::SocketAddr;

/// An HTTP server listening on a random local port
pub struct TestServer {
    addr: SocketAddr,
    handle: ServerHandle,
}

impl TestServer {
    /// Start a server with the services registered by `configure`
    ///
    /// Must be called from within an actix system, e.g. an `#[actix_rt::test]`.
    pub fn start<F>(configure: F) -> Self
    where
        F: Fn(&mut web::ServiceConfig) + Clone + Send + 'static,
    {
        let server = HttpServer::new(move || App::new().configure(configure.clone()))
            .workers(1)
            .disable_signals()
            .bind(("127.0.0.1", 0))
            .expect("Failed to bind test server");

        let addr = server.addrs()[0];

        let server = server.run();
        let handle = server.handle();

        actix_rt::spawn(server);

        Self { addr, handle }
    }

    /// Base URL of the server, ends with a slash
    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}
