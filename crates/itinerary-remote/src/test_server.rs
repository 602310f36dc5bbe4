use std::sync::Arc;
use std::sync::Mutex;

use axum::Json;
use axum::Router;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::delete;
use axum::routing::get;
use itinerary_configuration::RemoteConfiguration;
use serde_json::Value;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use url::Url;

#[derive(Default)]
struct TestServerState
{
    days: Vec<i64>,
    next_id: i64,
    failing: bool,
    delete_requests: Vec<String>,
}

type SharedState = Arc<Mutex<TestServerState>>;

/// Day store served by axum on an ephemeral port, for exercising the http
/// clients against real requests.
pub struct TestServer
{
    address: std::net::SocketAddr,
    state: SharedState,
    join_handle: JoinHandle<()>,
}

impl TestServer
{
    pub async fn start(days: &[i64]) -> TestServer
    {
        let state = Arc::new(Mutex::new(TestServerState {
            days: days.to_vec(),
            next_id: days.iter().copied().max().unwrap_or(0) + 1,
            failing: false,
            delete_requests: Vec::new(),
        }));

        let app = Router::new()
            .route("/api/days", get(list_days).post(create_day))
            .route("/api/days/{id}", delete(delete_day))
            .route("/api/attractions", get(attractions))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        let join_handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        TestServer {
            address,
            state,
            join_handle,
        }
    }

    pub fn remote_configuration(&self) -> RemoteConfiguration
    {
        let base_url = Url::parse(&format!("http://{}", self.address)).unwrap();
        let mut remote_configuration = RemoteConfiguration::new(base_url);
        remote_configuration.request_timeout_secs = 2;
        remote_configuration
    }

    /// The decoded ids of every delete the server received, in order.
    pub fn delete_requests(&self) -> Vec<String>
    {
        self.state.lock().unwrap().delete_requests.clone()
    }

    pub fn fail_requests(&self, failing: bool)
    {
        self.state.lock().unwrap().failing = failing;
    }
}

impl Drop for TestServer
{
    fn drop(&mut self)
    {
        self.join_handle.abort();
    }
}

fn day_json(id: i64, index: usize) -> Value
{
    json!({ "id": id, "number": index + 1, "restaurants": [], "activities": [] })
}

fn internal_error() -> Response
{
    (StatusCode::INTERNAL_SERVER_ERROR, "database is unavailable").into_response()
}

async fn list_days(State(state): State<SharedState>) -> Response
{
    let state = state.lock().unwrap();
    if state.failing {
        return internal_error();
    }
    let days = state
        .days
        .iter()
        .enumerate()
        .map(|(index, id)| day_json(*id, index))
        .collect::<Vec<_>>();
    Json(days).into_response()
}

async fn create_day(State(state): State<SharedState>) -> Response
{
    let mut state = state.lock().unwrap();
    if state.failing {
        return internal_error();
    }
    let id = state.next_id;
    state.next_id += 1;
    state.days.push(id);
    let created = day_json(id, state.days.len() - 1);
    (StatusCode::CREATED, Json(created)).into_response()
}

async fn delete_day(State(state): State<SharedState>, Path(id): Path<String>) -> Response
{
    let mut state = state.lock().unwrap();
    state.delete_requests.push(id.clone());
    if state.failing {
        return internal_error();
    }
    let position = id
        .parse::<i64>()
        .ok()
        .and_then(|id| state.days.iter().position(|day| *day == id));
    match position {
        Some(index) => {
            state.days.remove(index);
            StatusCode::NO_CONTENT.into_response()
        }
        None => (StatusCode::NOT_FOUND, format!("no day {}", id)).into_response(),
    }
}

async fn attractions() -> Json<Value>
{
    Json(json!({
        "hotels": [{ "id": 1, "name": "Andaz Wall Street", "place": { "address": "75 Wall St", "city": "New York", "location": [40.705, -74.008] } }],
        "restaurants": [{ "id": 1, "name": "Bouley" }],
        "activities": [{ "id": 1, "name": "Brooklyn Bridge" }, { "id": 2, "name": "Bowling" }]
    }))
}
