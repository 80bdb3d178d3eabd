pub mod health;

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::layout::handlers as layout_handlers;
use crate::mutation::handlers as mutation_handlers;
use crate::refine::handlers as refine_handlers;
use crate::sessions::handlers as session_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Layout catalogue and section registry
        .route("/api/v1/layouts", get(layout_handlers::handle_list_layouts))
        .route(
            "/api/v1/sections",
            get(layout_handlers::handle_list_sections),
        )
        // Document sessions
        .route(
            "/api/v1/sessions",
            post(session_handlers::handle_create_session),
        )
        .route(
            "/api/v1/sessions/:id",
            get(session_handlers::handle_get_session),
        )
        // Mutations
        .route(
            "/api/v1/sessions/:id/personal",
            put(mutation_handlers::handle_replace_personal),
        )
        .route(
            "/api/v1/sessions/:id/entries",
            post(mutation_handlers::handle_append_entry),
        )
        .route(
            "/api/v1/sessions/:id/entries/:section/:index",
            patch(mutation_handlers::handle_update_entry)
                .delete(mutation_handlers::handle_remove_entry),
        )
        .route(
            "/api/v1/sessions/:id/order",
            post(mutation_handlers::handle_reorder_section),
        )
        .route(
            "/api/v1/sessions/:id/details",
            post(mutation_handlers::handle_append_detail)
                .put(mutation_handlers::handle_set_detail)
                .delete(mutation_handlers::handle_remove_detail),
        )
        // Rendering
        .route(
            "/api/v1/sessions/:id/render/:layout",
            get(layout_handlers::handle_render),
        )
        // Refinement
        .route(
            "/api/v1/sessions/:id/polish",
            post(refine_handlers::handle_polish_detail),
        )
        .route(
            "/api/v1/sessions/:id/star",
            post(refine_handlers::handle_apply_star),
        )
        .route(
            "/api/v1/refine/star",
            post(refine_handlers::handle_compose_star),
        )
        .route(
            "/api/v1/refine/star-rewrite",
            post(refine_handlers::handle_star_rewrite),
        )
        .route(
            "/api/v1/refine/tech-stack",
            post(refine_handlers::handle_tech_stack),
        )
        .with_state(state)
}
