#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use animated_portfolio::app::*;
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower::ServiceBuilder;
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("animated_portfolio=info,tower_http=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();

    // fail at startup rather than on the first request
    let portfolio = animated_portfolio::content::portfolio();
    tracing::info!(
        name = %portfolio.profile.name,
        sections = portfolio.skills.len() + portfolio.experience.len() + portfolio.projects.len(),
        "portfolio content loaded"
    );

    let conf = get_configuration(None).expect("leptos configuration should be readable");
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(leptos_options);

    tracing::info!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("should be able to bind site address");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server should run until shutdown");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
