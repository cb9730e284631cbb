use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    handler::{
        delete_note_handler, get_notes_handler, login_user_handler, method_not_allowed_handler,
        post_note_handler, signup_handler,
    },
    AppState,
};

pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/signup", post(signup_handler))
        .route("/login", post(login_user_handler))
        .route(
            "/notes",
            get(get_notes_handler)
                .head(method_not_allowed_handler)
                .post(post_note_handler)
                .delete(delete_note_handler)
                .fallback(method_not_allowed_handler),
        )
        .with_state(app_state)
}
