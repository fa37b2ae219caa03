use std::collections::HashMap;
use std::net::SocketAddr;
use serde_json::json;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use warp::http::Uri;
use warp::Filter;
use crate::config::constants::{sleep_duration_millis, MAX_FORM_BODY_BYTES, SERVER_SHUTDOWN_TIMEOUT_MS};
use crate::errors::{QuantiaError, QuantiaResult};
use crate::structs::login_form::LoginForm;
use crate::structs::register_form::RegisterForm;
use crate::ui::app_state::AppState;
use crate::ui::controllers::account_controller::{
    login_handler, login_page_handler, register_handler, register_page_handler,
};
use crate::ui::controllers::dashboard_controller::{api_analysis_handler, dashboard_handler};
use crate::ui::controllers::technical_analysis_controller::{
    api_technical_analysis_handler, technical_analysis_handler,
};

pub const HEALTH_MESSAGE: &str = "Quantia front end is up.";

pub struct WebServer {
    state: AppState,
    address: Option<SocketAddr>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    server_handle: Option<JoinHandle<()>>,
}

impl WebServer {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            address: None,
            shutdown_tx: None,
            server_handle: None,
        }
    }

    /// Binds `addr` and serves in the background. Port 0 picks a free port;
    /// the address actually bound is returned.
    pub fn start(&mut self, addr: SocketAddr) -> QuantiaResult<SocketAddr> {
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let (bound, server) = warp::serve(Self::routes(self.state.clone()))
            .try_bind_with_graceful_shutdown(addr, async {
                shutdown_rx.await.ok();
            })
            .map_err(|e| QuantiaError::system_error(&format!("binding web server to {}", addr), &e.to_string()))?;

        self.server_handle = Some(tokio::spawn(server));
        self.shutdown_tx = Some(shutdown_tx);
        self.address = Some(bound);

        log::info!("🌐 Web server listening on http://{}", bound);
        Ok(bound)
    }

    pub fn address(&self) -> Option<SocketAddr> {
        self.address
    }

    pub async fn shutdown(&mut self) -> QuantiaResult<()> {
        log::info!("🛑 Shutting down web server...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx.send(()).map_err(|_|
                QuantiaError::system_error("shutdown", "Failed to send shutdown signal")
            )?;
        }

        if let Some(handle) = self.server_handle.take() {
            if tokio::time::timeout(sleep_duration_millis(SERVER_SHUTDOWN_TIMEOUT_MS), handle).await.is_err() {
                log::warn!("⏰ Web server did not stop in time; in-flight requests were dropped");
            }
        }

        self.address = None;
        log::info!("✅ Web server shutdown complete");
        Ok(())
    }

    pub fn routes(state: AppState) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let state_filter = warp::any().map(move || state.clone());

        let root = warp::path::end()
            .and(warp::get())
            .map(|| warp::redirect::see_other(Uri::from_static("/account/login")));

        let health = warp::path!("health")
            .and(warp::get())
            .map(|| warp::reply::json(&json!({ "message": HEALTH_MESSAGE })));

        let login_page = warp::path!("account" / "login")
            .and(warp::get())
            .and_then(login_page_handler);

        let login = warp::path!("account" / "login")
            .and(warp::post())
            .and(warp::body::content_length_limit(MAX_FORM_BODY_BYTES))
            .and(warp::body::form::<LoginForm>())
            .and_then(login_handler);

        let register_page = warp::path!("account" / "register")
            .and(warp::get())
            .and_then(register_page_handler);

        let register = warp::path!("account" / "register")
            .and(warp::post())
            .and(warp::body::content_length_limit(MAX_FORM_BODY_BYTES))
            .and(warp::body::form::<RegisterForm>())
            .and_then(register_handler);

        let dashboard = warp::path!("dashboard")
            .and(warp::get())
            .and(warp::query::<HashMap<String, String>>())
            .and(state_filter.clone())
            .and_then(dashboard_handler);

        let technical_analysis = warp::path!("technical-analysis")
            .and(warp::get())
            .and_then(technical_analysis_handler);

        let api_analysis = warp::path!("api" / "analysis")
            .and(warp::get())
            .and(warp::query::<HashMap<String, String>>())
            .and(state_filter)
            .and_then(api_analysis_handler);

        let api_technical_analysis = warp::path!("api" / "technical-analysis")
            .and(warp::get())
            .and_then(api_technical_analysis_handler);

        root
            .or(health)
            .or(login_page)
            .or(login)
            .or(register_page)
            .or(register)
            .or(dashboard)
            .or(technical_analysis)
            .or(api_analysis)
            .or(api_technical_analysis)
            .with(warp::log("quantia::http"))
    }
}
