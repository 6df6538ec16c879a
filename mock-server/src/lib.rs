use std::{collections::BTreeSet, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::debug;
use uuid::Uuid;

pub const ICON_URL: &str = "https://api.chucknorris.io/img/avatar/chuck-norris.png";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    pub id: String,
    pub value: String,
    pub categories: Vec<String>,
    pub icon_url: String,
    pub url: String,
}

impl Joke {
    pub fn new(value: &str, categories: &[&str]) -> Self {
        let id = Uuid::new_v4().simple().to_string();
        Self {
            url: format!("https://api.chucknorris.io/jokes/{id}"),
            id,
            value: value.to_string(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            icon_url: ICON_URL.to_string(),
        }
    }
}

/// Body of a 404 for an unknown category.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NotFound {
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
}

pub type Jokes = Arc<Vec<Joke>>;

pub fn fixture() -> Vec<Joke> {
    vec![
        Joke::new("Chuck Norris can divide by zero.", &["science"]),
        Joke::new("Chuck Norris counted to infinity. Twice.", &["science"]),
        Joke::new("Chuck Norris writes code that optimizes itself.", &["dev"]),
        Joke::new("Chuck Norris can unit test an entire application with a single assert.", &["dev"]),
        Joke::new("Chuck Norris's pet dog guards the cat.", &["animal"]),
        Joke::new("Chuck Norris doesn't read books. He stares them down until he gets the information he wants.", &[]),
    ]
}

pub fn app() -> Router {
    app_with(fixture())
}

pub fn app_with(jokes: Vec<Joke>) -> Router {
    let jokes: Jokes = Arc::new(jokes);
    Router::new()
        .route("/jokes/random", get(random_joke))
        .route("/jokes/categories", get(categories))
        .route("/jokes/random/{category}", get(random_joke_in_category))
        .with_state(jokes)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn pick<'a>(candidates: &[&'a Joke]) -> Option<&'a Joke> {
    if candidates.is_empty() {
        return None;
    }
    let index = (Uuid::new_v4().as_u128() % candidates.len() as u128) as usize;
    Some(candidates[index])
}

fn not_found(path: String, message: String) -> (StatusCode, Json<NotFound>) {
    (
        StatusCode::NOT_FOUND,
        Json(NotFound {
            status: StatusCode::NOT_FOUND.as_u16(),
            error: "Not Found".to_string(),
            message,
            path,
        }),
    )
}

async fn random_joke(State(jokes): State<Jokes>) -> Result<Json<Joke>, (StatusCode, Json<NotFound>)> {
    let all: Vec<&Joke> = jokes.iter().collect();
    match pick(&all) {
        Some(joke) => Ok(Json(joke.clone())),
        None => Err(not_found("/jokes/random".to_string(), "No jokes loaded".to_string())),
    }
}

async fn categories(State(jokes): State<Jokes>) -> Json<Vec<String>> {
    let names: BTreeSet<&String> = jokes.iter().flat_map(|j| j.categories.iter()).collect();
    Json(names.into_iter().cloned().collect())
}

async fn random_joke_in_category(
    State(jokes): State<Jokes>,
    Path(category): Path<String>,
) -> Result<Json<Joke>, (StatusCode, Json<NotFound>)> {
    let matching: Vec<&Joke> = jokes.iter().filter(|j| j.categories.contains(&category)).collect();
    debug!(%category, matches = matching.len(), "category lookup");
    pick(&matching).cloned().map(Json).ok_or_else(|| {
        not_found(
            format!("/jokes/random/{category}"),
            format!("No jokes for category \"{category}\" found."),
        )
    })
}
