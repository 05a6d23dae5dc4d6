//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_files::Files;
use actix_web::{
    delete, get, post,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use pick_bracket_web::{
    available_sizes, current_match, select_winner, start_bracket, Bracket, Catalog, Category,
    CategoryId, Contestant, ContestantId,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Unique identifier for a game session.
type GameId = Uuid;

/// One user's bracket run: the engine state plus the chosen category and
/// size so the run can be restarted with a fresh shuffle.
struct Game {
    id: GameId,
    category: Category,
    bracket_size: usize,
    bracket: Bracket,
}

/// Per-game entry: game data + last activity time (for auto-cleanup).
struct GameEntry {
    game: Game,
    last_activity: Instant,
}

/// In-memory state: many games by ID (sessioned). Entries are removed after
/// prolonged inactivity.
type AppState = Data<RwLock<HashMap<GameId, GameEntry>>>;

/// Inactivity threshold: games not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateGameBody {
    category_id: CategoryId,
    bracket_size: usize,
}

#[derive(Deserialize)]
struct PickBody {
    contestant_id: ContestantId,
}

/// Path segment: game id (e.g. /api/games/{id})
#[derive(Deserialize)]
struct GamePath {
    id: GameId,
}

/// A category plus the bracket sizes its pool can fill.
#[derive(Serialize)]
struct CategoryView {
    category: Category,
    available_sizes: Vec<usize>,
}

/// The current pair on display.
#[derive(Serialize)]
struct MatchView {
    left: Contestant,
    right: Contestant,
}

/// What the front end needs to render a game: labels, the current pair, and
/// the winner once decided. Engine internals stay server-side.
#[derive(Serialize)]
struct GameView {
    id: GameId,
    category: Category,
    bracket_size: usize,
    round_label: Option<String>,
    match_label: Option<String>,
    current_match: Option<MatchView>,
    finished: bool,
    winner: Option<Contestant>,
}

fn game_view(game: &Game) -> GameView {
    let b = &game.bracket;
    let pair = current_match(b).ok().map(|(left, right)| MatchView {
        left: left.clone(),
        right: right.clone(),
    });
    GameView {
        id: game.id,
        category: game.category.clone(),
        bracket_size: game.bracket_size,
        round_label: (!b.is_finished()).then(|| b.round_label()),
        match_label: (!b.is_finished()).then(|| b.match_label()),
        current_match: pair,
        finished: b.is_finished(),
        winner: b.winner().cloned(),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "pick-bracket-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// List categories with the bracket sizes each pool can fill.
#[get("/api/categories")]
async fn api_list_categories(catalog: Data<Catalog>) -> HttpResponse {
    let views: Vec<CategoryView> = catalog
        .categories()
        .iter()
        .map(|c| CategoryView {
            category: c.clone(),
            available_sizes: available_sizes(c.contestant_count),
        })
        .collect();
    HttpResponse::Ok().json(views)
}

/// Create a new game: fetch the category's pool, shuffle, and start the
/// bracket (returns the first match; client stores id for subsequent requests).
#[post("/api/games")]
async fn api_create_game(
    state: AppState,
    catalog: Data<Catalog>,
    body: Json<CreateGameBody>,
) -> HttpResponse {
    let category = match catalog.category(body.category_id) {
        Some(c) => c.clone(),
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No category" })),
    };
    let pool = catalog.contestants_for_category(body.category_id);

    let mut bracket = Bracket::new();
    if let Err(e) = start_bracket(&mut bracket, &pool, body.bracket_size, &mut rand::thread_rng()) {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }));
    }

    let game = Game {
        id: Uuid::new_v4(),
        category,
        bracket_size: bracket.bracket_size,
        bracket,
    };
    let view = game_view(&game);
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(
        game.id,
        GameEntry {
            game,
            last_activity: Instant::now(),
        },
    );
    HttpResponse::Ok().json(view)
}

/// Get a game by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/games/{id}")]
async fn api_get_game(state: AppState, path: Path<GamePath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(game_view(&entry.game))
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No game" })),
    }
}

/// Pick the winner of the current match and advance the bracket.
#[post("/api/games/{id}/pick")]
async fn api_pick(state: AppState, path: Path<GamePath>, body: Json<PickBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No game" })),
    };
    entry.last_activity = Instant::now();
    match select_winner(&mut entry.game.bracket, body.contestant_id) {
        Ok(_) => HttpResponse::Ok().json(game_view(&entry.game)),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Restart a game: same category and size, fresh shuffle.
#[post("/api/games/{id}/restart")]
async fn api_restart_game(
    state: AppState,
    catalog: Data<Catalog>,
    path: Path<GamePath>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No game" })),
    };
    entry.last_activity = Instant::now();
    let game = &mut entry.game;
    let pool = catalog.contestants_for_category(game.category.id);
    match start_bracket(
        &mut game.bracket,
        &pool,
        game.bracket_size,
        &mut rand::thread_rng(),
    ) {
        Ok(()) => HttpResponse::Ok().json(game_view(game)),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Delete a game (e.g. when the user goes back to the start screen).
#[delete("/api/games/{id}")]
async fn api_delete_game(state: AppState, path: Path<GamePath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.remove(&path.id) {
        Some(_) => HttpResponse::Ok().json(serde_json::json!({ "ok": true })),
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No game" })),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let catalog = Data::new(Catalog::sample());
    let state = Data::new(RwLock::new(HashMap::<GameId, GameEntry>::new()));

    // Background task: every 30 minutes, remove games inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive game(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(catalog.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_list_categories)
            .service(api_create_game)
            .service(api_get_game)
            .service(api_pick)
            .service(api_restart_game)
            .service(api_delete_game)
            .service(Files::new("/static", "static").show_files_listing())
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
