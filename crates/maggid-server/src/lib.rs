mod cors;
mod health;

use std::net::SocketAddr;

use axum::Router;
use maggid_config::Config;
use tower_http::trace::TraceLayer;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the Gemini client or the CORS layer cannot be
    /// built from the configuration
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let listen_address = config.server.listen_address_or_default();
        let guidance = maggid_guidance::build_guidance(config)?;

        let mut app = Router::new();

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        // Guidance routes
        app = app.merge(maggid_guidance::endpoint_router(&config.server.route_prefix).with_state(guidance));

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        // CORS
        app = app.layer(cors::cors_layer(&config.server.cors)?);
        app = app.layer(axum::middleware::from_fn(cors::preflight_no_content));

        tracing::debug!(
            prefix = %config.server.route_prefix,
            health = config.server.health.enabled,
            "router assembled"
        );

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
