use anyhow::{Context, Result};
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::header::{self, HeaderValue};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use serde::Deserialize;
use std::convert::Infallible;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::RelayConfig;
use crate::relay::Relay;

/// Methods announced in answers to CORS preflight requests
const ALLOWED_METHODS: &str = "DELETE, GET, HEAD, OPTIONS, PATCH, POST, PUT";

/// Body of `POST /`
#[derive(Deserialize, Debug)]
struct AskRequest {
    #[serde(default)]
    input: String,
}

struct State {
    relay: Relay,
    allow_origin: HeaderValue,
}

/// Bind to `config.bind` and serve until Ctrl-C
pub async fn serve(config: RelayConfig) -> Result<()> {
    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    run(listener, config, async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            log::error!("failed to listen for Ctrl-C: {}", err);
        }
    })
    .await
}

/// Serve connections from `listener` until `shutdown` resolves
pub async fn run<F>(listener: TcpListener, config: RelayConfig, shutdown: F) -> Result<()>
where
    F: Future<Output = ()>,
{
    let allow_origin = HeaderValue::from_str(&config.allow_origin)
        .with_context(|| format!("invalid allowed origin: {}", config.allow_origin))?;
    let state = Arc::new(State {
        relay: Relay::from_config(&config),
        allow_origin,
    });

    log::info!(
        "listening on http://{}",
        listener.local_addr().context("failed to read local address")?
    );
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                let (stream, peer) = accepted.context("failed to accept connection")?;
                let state = Arc::clone(&state);
                tokio::spawn(async move {
                    let service = service_fn(move |req| handle(Arc::clone(&state), req));
                    if let Err(err) = http1::Builder::new()
                        .serve_connection(TokioIo::new(stream), service)
                        .await
                    {
                        log::warn!("connection from {} failed: {}", peer, err);
                    }
                });
            }
            _ = &mut shutdown => {
                log::info!("shutting down");
                return Ok(());
            }
        }
    }
}

async fn handle(
    state: Arc<State>,
    req: Request<Incoming>,
) -> std::result::Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let mut response = match (&method, path.as_str()) {
        (&Method::OPTIONS, "/") => preflight(&req),
        (&Method::POST, "/") => ask(&state.relay, req).await,
        (_, "/") => error_response(StatusCode::METHOD_NOT_ALLOWED, "method not allowed"),
        _ => error_response(StatusCode::NOT_FOUND, "not found"),
    };

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        state.allow_origin.clone(),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    Ok(response)
}

fn preflight(req: &Request<Incoming>) -> Response<Full<Bytes>> {
    let allow_headers = req
        .headers()
        .get(header::ACCESS_CONTROL_REQUEST_HEADERS)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("*"));

    let mut response = Response::new(Full::new(Bytes::new()));
    *response.status_mut() = StatusCode::NO_CONTENT;
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, allow_headers);
    response
}

async fn ask(relay: &Relay, req: Request<Incoming>) -> Response<Full<Bytes>> {
    let body = match req.into_body().collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(err) => {
            log::warn!("failed to read request body: {}", err);
            return error_response(StatusCode::BAD_REQUEST, "failed to read request body");
        }
    };
    log::info!("received data: {}", String::from_utf8_lossy(&body));

    let AskRequest { input } = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            return error_response(StatusCode::BAD_REQUEST, &format!("invalid JSON body: {err}"))
        }
    };

    let report = relay.ask(&input).await;
    match serde_json::to_vec(&report) {
        Ok(json) => json_response(StatusCode::OK, json),
        Err(err) => {
            log::error!("failed to encode report: {}", err);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "failed to encode report")
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    let body = serde_json::json!({ "error": message }).to_string();
    json_response(status, body.into_bytes())
}

fn json_response(status: StatusCode, body: Vec<u8>) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from(body)));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}
