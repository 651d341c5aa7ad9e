//! tipfax
//!
//! Connects to Astro, subscribes to the tips topic, and logs (and optionally
//! prints) every tip until the connection drops or Ctrl-C is pressed.

use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use tipfax_client::config::{self, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
use tipfax_client::dispatch::Dispatcher;
use tipfax_client::obs::{ClientMetrics, Observer, TracingObserver};
use tipfax_client::session::{Session, SessionOptions};
use tipfax_client::sink::EscPosSink;
use tipfax_client::transport::{WsConnector, WsTransport};
use tipfax_core::Credential;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    // ring provider for wss:// (ignore error if already installed)
    rustls::crypto::ring::default_provider()
        .install_default()
        .ok();

    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let cfg = match config::load_or_default(&path) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(%path, error = %e, "config load failed");
            return ExitCode::FAILURE;
        }
    };

    let observer: Arc<dyn Observer> = Arc::new(TracingObserver);
    let metrics = Arc::new(ClientMetrics::default());
    let mut dispatcher = Dispatcher::new(observer.clone()).with_metrics(metrics.clone());

    if let Some(printer) = &cfg.printer {
        match EscPosSink::open(&printer.device) {
            Ok(sink) => {
                tracing::info!(device = %printer.device, "receipt printer attached");
                dispatcher = dispatcher.with_sink(Box::new(sink));
            }
            Err(e) => {
                tracing::warn!(device = %printer.device, error = %e, "printer unavailable, tips will only be logged")
            }
        }
    }

    let token = Credential::from_env(&cfg.astro.token_env);
    let mut session: Session<WsTransport> =
        Session::new(SessionOptions::from_config(&cfg), token, observer);

    // no retry: without a connection there is nothing to do
    if session.connect(&WsConnector).await.is_err() {
        return ExitCode::FAILURE;
    }

    if let Err(e) = session.subscribe().await {
        tracing::error!(error = %e, kind = e.kind().as_str(), "subscribe failed");
        if let Err(e) = session.disconnect().await {
            tracing::warn!(error = %e, "disconnect failed");
        }
        return ExitCode::FAILURE;
    }

    let code = tokio::select! {
        res = session.listen(&mut dispatcher) => match res {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!(error = %e, kind = e.kind().as_str(), "listen stopped");
                ExitCode::FAILURE
            }
        },
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown requested");
            ExitCode::SUCCESS
        }
    };

    let _ = session.unsubscribe().await;
    if let Err(e) = session.disconnect().await {
        tracing::warn!(error = %e, "disconnect failed");
    }

    tracing::info!(metrics = %metrics.render(), "final metrics");
    code
}
