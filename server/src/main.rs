use leptos::prelude::*;

mod cache;
mod config;
mod errors;

use errors::Error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use leptos_axum::{generate_route_list, LeptosRoutes};

    env_logger::init();

    let settings = config::Settings::load()?;
    let addr = settings.leptos_options.site_addr;
    let leptos_options = settings.leptos_options.clone();
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(app::App);
    let app_fn = {
        let leptos_options = leptos_options.clone();
        move || app::shell(leptos_options.clone())
    };

    // Routes first, then the cache layer, then the fallback serving the bundles:
    let pages = axum::Router::new().leptos_routes(&leptos_options, routes, app_fn);
    let app = cache::with_cache_control(pages, settings.cache_max_age)
        .fallback(leptos_axum::file_and_error_handler::<LeptosOptions, _>(app::shell))
        .with_state(leptos_options.clone());

    log::info!(
        "listening in {:?} on http://{} (max-age={}s)",
        &leptos_options.env,
        &addr,
        settings.cache_max_age
    );
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|error| Error::Bind { error, addr })?;
    axum::serve(listener, app.into_make_service())
        .await
        .map_err(Error::Serve)?;

    Ok(())
}
