// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Core library of the *Wedding RSVP Controller*
//!
//! # Example
//!
//! ```no_run
//! use rsvp_controller_core::Controller;
//! use anyhow::Result;
//!
//! #[actix_web::main]
//! async fn main()  {
//!     rsvp_controller_core::try_or_exit(run()).await;
//! }
//!
//! async fn run() -> Result<()> {
//!    if let Some(controller) = Controller::create("Wedding RSVP Controller").await? {
//!         controller.run().await?;
//!     }
//!
//!     Ok(())
//! }
//! ```

use crate::reporting::ErrorReporter;
use crate::settings::Settings;
use crate::store::{NotionDatabase, RecordStore};
use crate::trace::ReducedSpanBuilder;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::web::Data;
use actix_web::{web, App, HttpServer, Scope};
use anyhow::{Context, Result};
use std::net::Ipv6Addr;
use std::sync::Arc;
use tokio::signal::ctrl_c;
use tracing_actix_web::TracingLogger;

#[cfg(not(doc))]
mod api;
#[cfg(doc)]
pub mod api;

mod cli;
mod trace;

pub mod mapper;
pub mod reporting;
pub mod settings;
pub mod store;

/// Upper limit for the size of a submitted form
const PAYLOAD_LIMIT: usize = 64 * 1024;

/// Wrapper of the main function. Correctly outputs the error to the logging utility or stderr.
pub async fn try_or_exit<T, F>(f: F) -> T
where
    F: std::future::Future<Output = Result<T>>,
{
    match f.await {
        Ok(ok) => ok,
        Err(err) => {
            if log::log_enabled!(log::Level::Error) {
                log::error!("Crashed with error: {:?}", err);
            } else {
                eprintln!("Crashed with error: {err:?}");
            }

            std::process::exit(-1);
        }
    }
}

/// Controller struct representation containing all fields required to drive the controller
pub struct Controller {
    /// Settings loaded on [Controller::create]
    pub startup_settings: Arc<Settings>,

    /// Where participants are written to
    pub store: Arc<dyn RecordStore>,

    /// Receives every failure of the participant endpoint
    pub reporter: Arc<dyn ErrorReporter>,
}

impl Controller {
    /// Tries to create a controller from CLI arguments and then the settings.
    ///
    /// This can return Ok(None) which would indicate that the controller executed a CLI
    /// subprogram (e.g. `check-config`) and must now exit.
    ///
    /// Otherwise it will return itself which can be modified and then run using [`Controller::run`]
    pub async fn create(program_name: &str) -> Result<Option<Self>> {
        let args = cli::parse_args()?;

        // Some args run commands by them self and thus should exit here
        if !args.controller_should_start() {
            return Ok(None);
        }

        let settings = Settings::load(&args.config)
            .with_context(|| format!("Failed to load config file {:?}", args.config))?;

        trace::init(&settings.logging)?;

        log::info!("Starting {}", program_name);

        Ok(Some(Self::init(settings)?))
    }

    #[tracing::instrument(skip(settings))]
    fn init(settings: Settings) -> Result<Self> {
        if settings.notion.database_id.is_none() {
            log::warn!("No notion database configured, participants cannot be stored");
        }

        let store = Arc::new(NotionDatabase::from_settings(&settings.notion));
        let reporter = reporting::from_settings(&settings.error_reporting)
            .context("Failed to create the error reporter")?;

        Ok(Self {
            startup_settings: Arc::new(settings),
            store,
            reporter,
        })
    }

    /// Runs the controller until a fatal error occurred or a shutdown is requested (e.g. SIGTERM).
    pub async fn run(self) -> Result<()> {
        let http_server = {
            let cors = self.startup_settings.http.cors.clone();
            let error_reporting = Data::new(self.startup_settings.error_reporting.clone());
            let store = Data::from(self.store);
            let reporter = Data::from(self.reporter);

            HttpServer::new(move || {
                let cors = setup_cors(&cors);

                App::new()
                    .wrap(TracingLogger::<ReducedSpanBuilder>::new())
                    .wrap(cors)
                    .app_data(web::PayloadConfig::new(PAYLOAD_LIMIT))
                    .app_data(store.clone())
                    .app_data(reporter.clone())
                    .app_data(error_reporting.clone())
                    .service(api_scope())
            })
        };

        let address = (Ipv6Addr::UNSPECIFIED, self.startup_settings.http.port);

        let http_server = http_server.bind(address).with_context(|| {
            format!("Failed to bind http server to {}:{}", address.0, address.1)
        })?;

        log::info!("Startup finished");

        let http_server = http_server.disable_signals().run();
        let http_server_handle = http_server.handle();

        actix_rt::spawn(http_server);

        ctrl_c()
            .await
            .context("Failed to listen for the termination signal")?;

        log::info!("Got termination signal, exiting");

        http_server_handle.stop(true).await;

        log::info!("HTTP server stopped, goodbye!");

        Ok(())
    }
}

fn api_scope() -> Scope {
    web::scope("/api").service(api::participants::add_participant)
}

fn setup_cors(settings: &settings::HttpCors) -> Cors {
    let mut cors = Cors::default();

    for origin in &settings.allowed_origin {
        cors = cors.allowed_origin(origin)
    }

    cors.allowed_header(header::CONTENT_TYPE)
        .allowed_methods(["POST"])
}
