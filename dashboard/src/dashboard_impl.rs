//! Main dashboard server implementation
//!
//! Wires the shared dashboard state and the static file service into an axum
//! router and runs it until a shutdown signal arrives.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use shared::{Component, component_info, logging};

use crate::config::DashboardConfig;
use crate::error::{DashboardError, DashboardResult};
use crate::state::DashboardState;
use crate::traits::{DatasetLoader, StaticFileServer};
use crate::web::handlers::{api, static_files};

/// Dashboard server with injected static file service
pub struct DashboardServer<S>
where
    S: StaticFileServer,
{
    state: Arc<DashboardState>,
    static_server: Arc<S>,
}

impl<S> Clone for DashboardServer<S>
where
    S: StaticFileServer,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            static_server: Arc::clone(&self.static_server),
        }
    }
}

impl<S> DashboardServer<S>
where
    S: StaticFileServer + 'static,
{
    /// Create a dashboard over an already loaded state
    pub fn new(state: DashboardState, static_server: S) -> Self {
        Self {
            state: Arc::new(state),
            static_server: Arc::new(static_server),
        }
    }

    /// Load the dataset once and build the server around it
    ///
    /// A load failure (missing column, malformed row, unreadable file) is
    /// returned as-is; the dashboard never starts on partial data.
    pub async fn from_loader<L>(loader: &L, config: DashboardConfig, static_server: S) -> DashboardResult<Self>
    where
        L: DatasetLoader + ?Sized,
    {
        logging::log_progress(Component::Loader, "Loading dataset", &loader.source());

        let table = match loader.load().await {
            Ok(table) => table,
            Err(e) => {
                logging::log_error(Component::Loader, "Dataset load", &e);
                return Err(e);
            }
        };

        logging::log_success(
            Component::Loader,
            &format!("Dataset ready: {} records, {} rentals", table.len(), table.total_rentals()),
        );

        Ok(Self::new(DashboardState::new(table, config), static_server))
    }

    /// Build the axum router with all routes
    pub fn build_router(&self) -> Router {
        let api_routes = Router::new()
            .route("/api/years", get(api::get_years))
            .route("/api/monthly", get(api::get_monthly))
            .route("/api/hourly", get(api::get_hourly))
            .route("/api/time-buckets", get(api::get_time_buckets))
            .route("/api/temperature-buckets", get(api::get_temperature_buckets))
            .route("/api/dashboard", get(api::get_dashboard))
            .route("/health", get(api::health_check))
            .with_state(Arc::clone(&self.state));

        let static_routes = Router::new()
            .route("/", get(static_files::serve_index::<S>))
            .route("/static/*path", get(static_files::serve_static::<S>))
            .with_state(Arc::clone(&self.static_server));

        api_routes.merge(static_routes).layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .into_inner(),
        )
    }

    /// Serve until `shutdown` resolves
    pub async fn run<F>(&self, addr: SocketAddr, shutdown: F) -> DashboardResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| DashboardError::ServerStartup(format!("Failed to bind to {}: {}", addr, e)))?;

        component_info!(Component::Server, "🌐 Dashboard available at http://{}/", addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| DashboardError::ServerStartup(format!("Server error: {}", e)))?;

        Ok(())
    }

    /// Shared state for external access
    pub fn state(&self) -> &Arc<DashboardState> {
        &self.state
    }

    pub fn config(&self) -> &DashboardConfig {
        self.state.config()
    }
}
