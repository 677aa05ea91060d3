use axum::{
    Json, Router, debug_handler,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use pokedex_aggregator::{
    Config, DetailComposer, DetailRecord, DetailSession, HttpUpstream, LogFormat, Page,
    PokedexError, RosterAggregator, RosterEntry, RosterFilter, Selection, Sprites, StyleTables,
    paginate,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

struct AppState {
    roster: Vec<RosterEntry>,
    composer: DetailComposer<HttpUpstream>,
    session: DetailSession,
    config: Config,
}

#[derive(Deserialize, Debug, Default)]
struct RosterQuery {
    q: Option<String>,
    types: Option<String>,
    weaknesses: Option<String>,
    page: Option<usize>,
}

impl RosterQuery {
    fn filter(&self) -> RosterFilter {
        RosterFilter {
            query: self.q.clone().unwrap_or_default(),
            types: split_list(self.types.as_deref()),
            weaknesses: split_list(self.weaknesses.as_deref()),
        }
    }
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
            .collect()
    })
    .unwrap_or_default()
}

fn load_config() -> Result<Config, PokedexError> {
    match std::env::var("POKEDEX_CONFIG") {
        Ok(path) => Config::from_file(&path),
        Err(_) => Config::embedded(),
    }
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "{}=debug,tower_http=debug,axum::rejection=trace",
            env!("CARGO_CRATE_NAME")
        )
        .into()
    });
    let (pretty, json) = match format {
        LogFormat::Pretty => (Some(tracing_subscriber::fmt::layer()), None),
        LogFormat::Json => (None, Some(tracing_subscriber::fmt::layer().json())),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(json)
        .init();
}

#[tokio::main]
async fn main() {
    let config = load_config();
    init_tracing(
        config
            .as_ref()
            .map(|c| c.server.log_format)
            .unwrap_or_default(),
    );

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let upstream = match HttpUpstream::new(&config.pokemon) {
        Ok(upstream) => upstream,
        Err(e) => {
            tracing::error!("Failed to create upstream client: {}", e);
            std::process::exit(1);
        }
    };
    let sprites = Sprites::new(&config.images);

    let aggregator = RosterAggregator::new(upstream.clone(), config.pokemon.clone(), sprites.clone());
    let roster = match aggregator.build_roster().await {
        Ok(roster) => roster,
        Err(e) => {
            tracing::error!("Failed to build roster: {}", e);
            std::process::exit(1);
        }
    };

    let composer = DetailComposer::new(
        upstream,
        config.pokemon.clone(),
        config.detail.clone(),
        sprites,
        StyleTables::default(),
    );

    let bind = config.server.bind.clone();
    let app_state = Arc::new(AppState {
        roster,
        composer,
        session: DetailSession::new(),
        config,
    });

    let app = Router::new()
        .route("/roster", get(get_roster_handler))
        .route("/random", get(get_random_pokemon_handler))
        .route("/pokemon/{id}", get(get_pokemon_handler))
        .route("/selection", get(get_selection_handler))
        .route("/selection/{id}", post(select_pokemon_handler))
        .with_state(app_state);

    let listener = match tokio::net::TcpListener::bind(&bind).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind to address {}: {}", bind, e);
            std::process::exit(1);
        }
    };

    match listener.local_addr() {
        Ok(addr) => tracing::info!("listening on {}", addr),
        Err(e) => tracing::warn!("listening on {} (local address unavailable: {})", bind, e),
    }

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

#[debug_handler]
async fn get_roster_handler(
    State(app_state): State<Arc<AppState>>,
    Query(query): Query<RosterQuery>,
) -> Json<Page<RosterEntry>> {
    let filter = query.filter();
    let matching: Vec<RosterEntry> = filter.apply(&app_state.roster).into_iter().cloned().collect();
    let page = paginate(
        &matching,
        query.page.unwrap_or(1),
        app_state.config.server.page_size,
    );
    tracing::debug!(
        "Roster page {} with {} of {} matching entries",
        page.page,
        page.items.len(),
        page.total
    );
    Json(page)
}

#[debug_handler]
async fn get_random_pokemon_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<DetailRecord>, PokedexError> {
    if app_state.roster.is_empty() {
        return Err(PokedexError::MissingData("roster is empty".to_string()));
    }
    let index = rand::random_range(0..app_state.roster.len());
    let id = app_state.roster[index].id;
    tracing::debug!("Random pick: Pokémon ID {}", id);

    let detail = app_state.composer.build_detail(id).await.map_err(|e| {
        tracing::error!("Failed to fetch Pokémon ID {}: {}", id, e);
        e
    })?;
    Ok(Json(detail))
}

#[debug_handler]
async fn get_pokemon_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<DetailRecord>, PokedexError> {
    let detail = app_state.composer.build_detail(id).await.map_err(|e| {
        tracing::error!("Failed to fetch Pokémon ID {}: {}", id, e);
        e
    })?;
    Ok(Json(detail))
}

#[debug_handler]
async fn select_pokemon_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Response, PokedexError> {
    let selection = app_state
        .composer
        .select(&app_state.session, id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to select Pokémon ID {}: {}", id, e);
            e
        })?;
    if selection == Selection::Superseded {
        tracing::debug!("Selection of Pokémon ID {} superseded", id);
    }
    Ok(selection_response(selection))
}

fn selection_response(selection: Selection) -> Response {
    match selection {
        Selection::Committed(detail) => (StatusCode::OK, Json(detail)).into_response(),
        Selection::Superseded => StatusCode::CONFLICT.into_response(),
    }
}

#[debug_handler]
async fn get_selection_handler(State(app_state): State<Arc<AppState>>) -> Response {
    match app_state.session.current() {
        Some(detail) => (StatusCode::OK, Json(detail)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
