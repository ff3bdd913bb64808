//! SSR host for the documentation site.
//!
//! Serves the Leptos routes, the hydration bundle under `/pkg`, and static
//! assets (images) from the site root.

#[cfg(feature = "ssr")]
#[derive(Debug, thiserror::Error)]
enum ServeError {
    #[error("leptos configuration: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(err) = serve().await {
        tracing::error!(error = %err, "docnav server failed");
        std::process::exit(1);
    }
}

#[cfg(feature = "ssr")]
async fn serve() -> Result<(), ServeError> {
    use std::path::PathBuf;

    use axum::Router;
    use docnav::app::{App, shell};
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::services::ServeDir;
    use tower_http::trace::TraceLayer;

    let conf = get_configuration(None).map_err(|e| ServeError::Config(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(leptos_options);

    let app = leptos_router
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(ServeDir::new(&site_root_path))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "docnav listening");
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {}
