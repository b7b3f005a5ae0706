use dioxus::prelude::*;
use shared_types::{AppError, PortalConfig};
use shared_ui::theme::ThemeState;

mod login_state;
mod routes;
mod timer;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_portal_config();
        let config = server::config::portal_config();

        if config.features.telemetry {
            server::telemetry::init_telemetry();
        }
        server::health::record_start_time();

        let mut router = dioxus::server::router(App)
            .merge(server::rest::rest_router())
            .merge(server::health::health_router());

        if config.features.telemetry {
            router = router.layer(server::telemetry::OtelTraceLayer);
        }

        let router = router
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    // Set the X-Client-Platform header on all server function calls
    use_hook(|| {
        use dioxus::fullstack::{set_request_headers, HeaderMap, HeaderValue};

        let mut headers = HeaderMap::new();
        headers.insert(
            "x-client-platform",
            HeaderValue::from_static(client_platform()),
        );
        set_request_headers(headers);
    });

    // Fetch portal config once; the built-in defaults cover a failed fetch
    let config_resource =
        use_server_future(move || async move { server::api::get_portal_config().await })?;

    let config = match config_resource.read().as_ref().cloned() {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            tracing::warn!(
                "using default portal config: {}",
                AppError::friendly_message(&e.to_string())
            );
            PortalConfig::default()
        }
        None => PortalConfig::default(),
    };

    use_context_provider(|| config);
    use_context_provider(ThemeState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::theme::ThemeSeed {}
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "app-loading",
                    p { "Loading..." }
                }
            },
            Router::<Route> {}
        }
    }
}
