#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use stargaze::almanac::UsnoClient;
use stargaze::config::ServiceConfig;
use stargaze::ephemeris::AnalyticEphemeris;
use stargaze::http::{create_router, AppState};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Restores variables on unwind and serializes access to the process-global
/// environment, since tests run in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// USNO `rstt/oneday` body with the given `(phen, time)` sun entries.
pub fn sundata_body(entries: &[(&str, &str)]) -> Value {
    let sundata: Vec<Value> = entries
        .iter()
        .map(|(phen, time)| serde_json::json!({ "phen": phen, "time": time }))
        .collect();
    serde_json::json!({
        "apiversion": "4.0.1",
        "geometry": { "coordinates": [-92.33, 38.95], "type": "Point" },
        "properties": { "data": { "sundata": sundata } },
        "type": "Feature"
    })
}

/// Serve `entries` for `date` (YYYY-MM-DD).
pub async fn mount_day(server: &MockServer, date: &str, entries: &[(&str, &str)]) {
    Mock::given(method("GET"))
        .and(path("/api/rstt/oneday"))
        .and(query_param("date", date))
        .respond_with(ResponseTemplate::new(200).set_body_json(sundata_body(entries)))
        .mount(server)
        .await;
}

/// Answer every almanac request with `status`.
pub async fn mount_failure(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path("/api/rstt/oneday"))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Mid-January night in Columbia, MO: sunset 23:04, dark 23:33 to 12:46 UT.
pub async fn mount_winter_night(server: &MockServer) {
    mount_day(
        server,
        "2026-01-15",
        &[
            ("Begin Civil Twilight", "12:47"),
            ("Rise", "13:15"),
            ("Upper Transit", "18:09"),
            ("Set", "23:04"),
            ("End Civil Twilight", "23:33"),
        ],
    )
    .await;
    mount_day(
        server,
        "2026-01-16",
        &[
            ("Begin Civil Twilight", "12:46"),
            ("Rise", "13:14"),
            ("Upper Transit", "18:09"),
            ("Set", "23:05"),
            ("End Civil Twilight", "23:34"),
        ],
    )
    .await;
}

/// Router wired to an almanac at `base_url` and the analytic ephemeris.
pub fn app(base_url: &str) -> Router {
    let mut config = ServiceConfig::default();
    config.almanac.base_url = base_url.to_string();
    let client = UsnoClient::new(base_url, config.almanac.timeout()).expect("client");
    create_router(AppState::new(
        config,
        Arc::new(client),
        Arc::new(AnalyticEphemeris::new()),
    ))
}

/// Issue a GET and decode the JSON body.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}
