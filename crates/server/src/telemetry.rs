use axum::{body::Body, http::Request, response::Response};
use opentelemetry::{
    global,
    trace::{SpanKind, TraceContextExt, Tracer},
    Context, KeyValue,
};
use opentelemetry_otlp::{WithExportConfig, WithTonicConfig};
use std::{
    future::Future,
    pin::Pin,
    sync::OnceLock,
    task::{Context as TaskContext, Poll},
};
use tower::{Layer, Service};

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const TRACER_NAME: &str = "gymnazo-portal";

/// Keep the LoggerProvider alive for the process lifetime.
static LOGGER_PROVIDER: OnceLock<opentelemetry_sdk::logs::SdkLoggerProvider> = OnceLock::new();

/// Tokio runtime for the OTLP gRPC exporters. Tonic's `connect_lazy()`
/// calls `tokio::spawn`, which needs a runtime context that `dioxus::serve`
/// does not always propagate into its init closure.
static OTEL_RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();

/// Exporter settings read from the environment.
struct OtlpSettings {
    endpoint: String,
    service_name: String,
    environment: String,
    ingestion_key: Option<String>,
}

impl OtlpSettings {
    /// `None` when `OTEL_EXPORTER_OTLP_ENDPOINT` is unset.
    fn from_env() -> Option<Self> {
        let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT").ok()?;
        Some(Self {
            endpoint,
            service_name: std::env::var("OTEL_SERVICE_NAME")
                .unwrap_or_else(|_| TRACER_NAME.to_string()),
            environment: std::env::var("DEPLOY_ENV")
                .unwrap_or_else(|_| "development".to_string()),
            ingestion_key: std::env::var("OTEL_INGESTION_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
        })
    }

    fn uses_tls(&self) -> bool {
        self.endpoint.starts_with("https://")
    }

    fn metadata(&self) -> Result<opentelemetry_otlp::tonic_types::metadata::MetadataMap, String> {
        let mut metadata = opentelemetry_otlp::tonic_types::metadata::MetadataMap::new();
        if let Some(key) = &self.ingestion_key {
            let value = key
                .parse()
                .map_err(|e| format!("invalid OTEL_INGESTION_KEY: {e}"))?;
            metadata.insert("ingestion-key", value);
        }
        Ok(metadata)
    }
}

/// Set up the OpenTelemetry trace and log exporters.
///
/// Dioxus owns the `tracing` subscriber; this only registers the OTLP
/// tracer provider (fed by [`OtelTraceLayer`]) and bridges the `log` crate
/// to the OTLP log exporter.
///
/// Reads config from environment (`.env` is honoured):
///   - `OTEL_EXPORTER_OTLP_ENDPOINT`: collector gRPC address, e.g. `http://localhost:4317`
///   - `OTEL_SERVICE_NAME`: service name tag (default: `gymnazo-portal`)
///   - `OTEL_INGESTION_KEY`: access token sent as gRPC metadata (optional)
///   - `DEPLOY_ENV`: deployment environment tag (default: `development`)
///
/// Failures are logged and leave telemetry disabled; the portal keeps serving.
pub fn init_telemetry() {
    let _ = dotenvy::dotenv();

    let Some(settings) = OtlpSettings::from_env() else {
        tracing::info!("OTEL_EXPORTER_OTLP_ENDPOINT not set, skipping OTLP telemetry");
        return;
    };

    match install_exporters(&settings) {
        Ok(()) => tracing::info!(
            endpoint = %settings.endpoint,
            "telemetry initialized v{APP_VERSION}, traces + logs exporting"
        ),
        Err(e) => tracing::warn!("telemetry disabled: {e}"),
    }
}

fn install_exporters(settings: &OtlpSettings) -> Result<(), String> {
    let rt = match OTEL_RUNTIME.get() {
        Some(rt) => rt,
        None => {
            let rt = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .worker_threads(1)
                .build()
                .map_err(|e| format!("failed to create OTEL runtime: {e}"))?;
            OTEL_RUNTIME.get_or_init(|| rt)
        }
    };
    let _guard = rt.enter();

    let metadata = settings.metadata()?;

    let mut span_builder = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&settings.endpoint)
        .with_metadata(metadata.clone());
    if settings.uses_tls() {
        span_builder = span_builder.with_tls_config(
            opentelemetry_otlp::tonic_types::transport::ClientTlsConfig::new().with_native_roots(),
        );
    }
    let span_exporter = span_builder
        .build()
        .map_err(|e| format!("failed to create OTLP span exporter: {e}"))?;

    let resource = opentelemetry_sdk::Resource::builder()
        .with_service_name(settings.service_name.clone())
        .with_attribute(KeyValue::new("service.version", APP_VERSION))
        .with_attribute(KeyValue::new(
            "deployment.environment",
            settings.environment.clone(),
        ))
        .build();

    let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
        .with_batch_exporter(span_exporter)
        .with_resource(resource.clone())
        .build();
    global::set_tracer_provider(tracer_provider);

    let mut log_builder = opentelemetry_otlp::LogExporter::builder()
        .with_tonic()
        .with_endpoint(&settings.endpoint)
        .with_metadata(metadata);
    if settings.uses_tls() {
        log_builder = log_builder.with_tls_config(
            opentelemetry_otlp::tonic_types::transport::ClientTlsConfig::new().with_native_roots(),
        );
    }
    let log_exporter = log_builder
        .build()
        .map_err(|e| format!("failed to create OTLP log exporter: {e}"))?;

    let logger_provider = LOGGER_PROVIDER.get_or_init(|| {
        opentelemetry_sdk::logs::SdkLoggerProvider::builder()
            .with_batch_exporter(log_exporter)
            .with_resource(resource)
            .build()
    });

    // `log` records go to OTLP; `tracing` stays with the Dioxus subscriber.
    let bridge = opentelemetry_appender_log::OpenTelemetryLogBridge::new(logger_provider);
    match log::set_boxed_logger(Box::new(bridge)) {
        Ok(()) => log::set_max_level(log::LevelFilter::Info),
        Err(_) => tracing::warn!("log bridge skipped, a `log` logger is already set"),
    }
    Ok(())
}

/// Detect client platform from User-Agent and optional X-Client-Platform header.
///
/// The explicit header wins. Native Dioxus clients send no User-Agent and
/// report as "native" unless they set the header.
fn detect_platform(ua: &str, explicit: Option<&str>) -> &'static str {
    if let Some(p) = explicit {
        return match p {
            "desktop" => "desktop",
            "mobile" => "mobile",
            "web" => "web",
            _ => "unknown",
        };
    }

    if ua == "unknown" || ua.is_empty() {
        return "native";
    }
    if ua.contains("iPhone") || ua.contains("iPad") || ua.contains("Android") {
        "mobile"
    } else if ua.contains("Mozilla") || ua.contains("Chrome") || ua.contains("Safari") {
        "web"
    } else {
        "native"
    }
}

/// Page of the portal a request belongs to, for span naming.
fn portal_page(path: &str) -> &'static str {
    match path {
        "/" => "login",
        "/teacher-dashboard" => "teacher-dashboard",
        "/forgot-password" => "forgot-password",
        "/health" => "health",
        p if p.starts_with("/api/") => "api",
        _ => "other",
    }
}

/// Tower layer that creates an OpenTelemetry span for each HTTP request.
///
/// Captures: method, path, portal page, user-agent, client platform,
/// request ID and response status.
#[derive(Clone)]
pub struct OtelTraceLayer;

impl<S> Layer<S> for OtelTraceLayer {
    type Service = OtelTraceService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        OtelTraceService { inner }
    }
}

#[derive(Clone)]
pub struct OtelTraceService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for OtelTraceService<S>
where
    S: Service<Request<Body>, Response = Response> + Send + Clone + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let tracer = global::tracer(TRACER_NAME);
        let method = req.method().to_string();
        let path = req.uri().path().to_string();
        let page = portal_page(&path);

        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let user_agent = header("user-agent").unwrap_or_else(|| "unknown".to_string());
        let explicit_platform = header("x-client-platform");
        let client_platform = detect_platform(&user_agent, explicit_platform.as_deref());
        let request_id = header("x-request-id").unwrap_or_default();

        let attributes = vec![
            KeyValue::new("http.method", method.clone()),
            KeyValue::new("http.target", path),
            KeyValue::new("portal.page", page),
            KeyValue::new("http.user_agent", user_agent),
            KeyValue::new("client.platform", client_platform),
            KeyValue::new("http.request_id", request_id),
        ];

        let span = tracer
            .span_builder(format!("{method} {page}"))
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        let cx = Context::current_with_span(span);
        let mut inner = self.inner.clone();

        let guard = cx.clone().attach();
        let future = inner.call(req);
        drop(guard);

        Box::pin(async move {
            let response = future.await?;

            let span = cx.span();
            let status = response.status();
            span.set_attribute(KeyValue::new("http.status_code", status.as_u16() as i64));

            if status.is_server_error() {
                span.set_status(opentelemetry::trace::Status::error(status.to_string()));
            } else if status.is_client_error() {
                span.set_attribute(KeyValue::new("error.type", "client_error"));
            }

            Ok(response)
        })
    }
}
