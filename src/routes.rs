use axum::{
    middleware,
    routing::{delete, get, post, put, MethodRouter},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::gatekeeper::{chains, Pipeline};
use crate::handlers::{self, todos, users};
use crate::middleware::{gate_middleware, RouteGate};
use crate::state::AppState;

/// Full application: routes plus the global layers enabled by configuration
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let mut app = router(state);
    if config.api.enable_request_logging {
        app = app.layer(TraceLayer::new_for_http());
    }
    if config.api.enable_cors {
        app = app.layer(CorsLayer::permissive());
    }
    app
}

/// Every route with its gate pipeline, without global layers
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .merge(user_routes(&state))
        .merge(todo_routes(&state))
        .with_state(state)
}

/// Put `pipeline` in front of the handler(s) of `method`
fn gated(method: MethodRouter<AppState>, state: &AppState, pipeline: Pipeline) -> MethodRouter<AppState> {
    let gate = RouteGate::new(state.gatekeeper(), pipeline, state.body_limit);
    method.layer(middleware::from_fn_with_state(gate, gate_middleware))
}

fn user_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            gated(get(users::list_users), state, chains::users_list())
                .merge(gated(post(users::create_user), state, chains::user_create())),
        )
        .route(
            "/users/:id",
            gated(get(users::show_user), state, chains::user_show())
                .merge(gated(put(users::update_user), state, chains::user_update()))
                .merge(gated(delete(users::delete_user), state, chains::user_delete())),
        )
        .route(
            "/users/:id/todos",
            gated(get(users::list_user_todos), state, chains::user_todos_list()),
        )
        .route(
            "/users/:id/todos/:toDoId",
            gated(get(users::show_user_todo), state, chains::user_todo_show()),
        )
}

fn todo_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/todos",
            gated(get(todos::list_todos), state, chains::todos_list())
                .merge(gated(post(todos::create_todo), state, chains::todo_create())),
        )
        .route(
            "/todos/:id",
            gated(get(todos::show_todo), state, chains::todo_show())
                .merge(gated(put(todos::update_todo), state, chains::todo_update()))
                .merge(gated(delete(todos::delete_todo), state, chains::todo_delete())),
        )
}
