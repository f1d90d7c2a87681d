#![allow(dead_code)]

use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// In-process catalog server bound to an ephemeral port.
///
/// Serves `count` natures named `nature-1..=nature-{count}`, the stat `hp`,
/// a stat `glitch` whose body is not JSON, the pokémon `ditto`, a `slow`
/// nature that answers after `slow_delay`, and 500 for the pokémon `missingno`.
pub struct MockUpstream {
    addr: SocketAddr,
    hits: Arc<Mutex<HashMap<String, usize>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

#[derive(Clone)]
struct UpstreamState {
    natures: usize,
    slow_delay: Duration,
    hits: Arc<Mutex<HashMap<String, usize>>>,
}

impl UpstreamState {
    fn record(&self, uri: &Uri) {
        *self.hits.lock().unwrap().entry(uri.to_string()).or_insert(0) += 1;
    }
}

#[derive(Deserialize)]
struct PageQuery {
    offset: Option<usize>,
    limit: Option<usize>,
}

impl MockUpstream {
    pub async fn start(natures: usize) -> Self {
        Self::start_with_delay(natures, Duration::from_secs(5)).await
    }

    pub async fn start_with_delay(natures: usize, slow_delay: Duration) -> Self {
        let hits = Arc::new(Mutex::new(HashMap::new()));
        let state = UpstreamState {
            natures,
            slow_delay,
            hits: Arc::clone(&hits),
        };

        let app = Router::new()
            .route("/api/v2/nature", get(list_natures))
            .route("/api/v2/nature/{reference}", get(get_nature))
            .route("/api/v2/stat/{reference}", get(get_stat))
            .route("/api/v2/pokemon/{reference}", get(get_pokemon))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Self {
            addr,
            hits,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api/v2", self.addr)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Requests received for `path_and_query`, e.g. `/api/v2/nature/hardy`.
    pub fn hits(&self, path_and_query: &str) -> usize {
        self.hits
            .lock()
            .unwrap()
            .get(path_and_query)
            .copied()
            .unwrap_or(0)
    }

    pub fn total_hits(&self) -> usize {
        self.hits.lock().unwrap().values().sum()
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn nature_json(id: usize) -> serde_json::Value {
    json!({
        "id": id,
        "name": format!("nature-{id}"),
        "increased_stat": { "name": "attack", "url": "https://pokeapi.co/api/v2/stat/2/" },
        "decreased_stat": { "name": "defense", "url": "https://pokeapi.co/api/v2/stat/3/" },
        "pokeathlon_stat_changes": []
    })
}

async fn list_natures(
    State(state): State<UpstreamState>,
    uri: Uri,
    Query(page): Query<PageQuery>,
) -> Response {
    state.record(&uri);
    let offset = page.offset.unwrap_or(0);
    let limit = page.limit.unwrap_or(20);
    let end = (offset + limit).min(state.natures);

    let results: Vec<_> = (offset + 1..=end)
        .map(|id| {
            json!({
                "name": format!("nature-{id}"),
                "url": format!("https://pokeapi.co/api/v2/nature/{id}/"),
            })
        })
        .collect();

    Json(json!({
        "count": state.natures,
        "next": null,
        "previous": null,
        "results": results,
    }))
    .into_response()
}

async fn get_nature(
    State(state): State<UpstreamState>,
    uri: Uri,
    Path(reference): Path<String>,
) -> Response {
    state.record(&uri);

    if reference == "slow" {
        tokio::time::sleep(state.slow_delay).await;
        return Json(nature_json(0)).into_response();
    }

    let id = reference
        .strip_prefix("nature-")
        .unwrap_or(&reference)
        .parse::<usize>()
        .ok()
        .filter(|id| (1..=state.natures).contains(id));

    match id {
        Some(id) => Json(nature_json(id)).into_response(),
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

async fn get_stat(
    State(state): State<UpstreamState>,
    uri: Uri,
    Path(reference): Path<String>,
) -> Response {
    state.record(&uri);
    match reference.as_str() {
        "hp" | "1" => Json(json!({
            "id": 1,
            "name": "hp",
            "game_index": 1,
            "is_battle_only": false,
            "affecting_moves": { "increase": [], "decrease": [] },
            "characteristics": [{ "url": "https://pokeapi.co/api/v2/characteristic/1/" }],
            "move_damage_class": null
        }))
        .into_response(),
        "glitch" => (StatusCode::OK, "<html>definitely not json</html>").into_response(),
        _ => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

async fn get_pokemon(
    State(state): State<UpstreamState>,
    uri: Uri,
    Path(reference): Path<String>,
) -> Response {
    state.record(&uri);
    match reference.as_str() {
        "ditto" | "132" => Json(json!({
            "id": 132,
            "name": "ditto",
            "base_experience": 101,
            "height": 3,
            "weight": 40,
            "is_default": true,
            "order": 214,
            "abilities": [],
            "stats": [],
            "types": [{ "slot": 1, "type": { "name": "normal", "url": "https://pokeapi.co/api/v2/type/1/" } }]
        }))
        .into_response(),
        "missingno" => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        _ => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}
