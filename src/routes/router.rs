use axum::{
    extract::{MatchedPath, Request},
    http::Method,
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use axum::error_handling::HandleErrorLayer;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{self, CorsLayer},
    trace::TraceLayer,
};
use tracing::info_span;

use crate::core::error;
use crate::core::state::AppState;
use crate::routes::{admin, auth, cars, drivers};
use crate::utils;

pub(crate) fn routes(state: AppState) -> Router {
    // /auth/...
    let auth_router = Router::new()
        .route("/token", post(auth::login))
        .route("/register", post(auth::register));

    // /drivers/...
    let driver_router = Router::new()
        .route("/", get(drivers::get_me))
        .route("/phone", put(drivers::set_phone))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            utils::auth::authenticate,
        ));

    // /cars/...
    let car_router = Router::new()
        .route("/", get(cars::get_cars).post(cars::post_car))
        .route(
            "/{id}",
            get(cars::get_car).put(cars::put_car).delete(cars::delete_car),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            utils::auth::authenticate,
        ));

    // /admin/... — authenticate first, then the role gate
    let admin_router = Router::new()
        .route("/drivers", get(admin::list_drivers))
        .route(
            "/drivers/{id}",
            put(admin::update_driver).delete(admin::delete_driver),
        )
        .route("/cars/{id}", delete(admin::delete_car))
        .route_layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    utils::auth::authenticate,
                ))
                .layer(middleware::from_fn(utils::auth::require_admin)),
        );

    Router::new()
        .route("/", get(|| async { "motorpool" }))
        .nest("/auth", auth_router)
        .nest("/drivers", driver_router)
        .nest("/cars", car_router)
        .nest("/admin", admin_router)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                        let matched_path = request
                            .extensions()
                            .get::<MatchedPath>()
                            .map(MatchedPath::as_str);

                        info_span!(
                            "request",
                            method = ?request.method(),
                            matched_path,
                        )
                    }),
                )
                .layer(HandleErrorLayer::new(error::handle_middleware_errors))
                .buffer(128)
                .rate_limit(10, Duration::from_secs(1))
                .layer(
                    CorsLayer::new()
                        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                        .allow_origin(cors::Any),
                ),
        )
}
