use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::{info, warn};

use crate::{
    error::{AppError, StoreError},
    model::User,
    request::*,
    response::*,
    AppState,
};

pub async fn signup_handler(
    State(data): State<Arc<AppState>>,
    JsonBody(body): JsonBody<SignupUser>,
) -> Result<impl IntoResponse, AppError> {
    let user = User {
        name: body.name,
        email: body.email,
        password: body.password,
    };
    let email = user.email.clone();

    let registered = {
        let mut store = data.store.lock();
        store.register(user).map(|_| store.user_count())
    };
    match registered {
        Ok(users) => {
            info!(%email, users, "user registered");
            Ok(StatusCode::OK)
        }
        Err(e) => {
            warn!(%email, "signup rejected: {}", e);
            Err(e.into())
        }
    }
}

pub async fn login_user_handler(
    State(data): State<Arc<AppState>>,
    JsonBody(body): JsonBody<LoginUser>,
) -> Result<impl IntoResponse, AppError> {
    let authenticated = {
        let mut store = data.store.lock();
        store
            .authenticate(&body.email, &body.password)
            .map(|sid| (sid, store.session_count()))
    };
    match authenticated {
        Ok((sid, sessions)) => {
            info!(email = %body.email, sessions, "session created");
            Ok(Json(LoginResponse { sid }))
        }
        Err(e) => {
            warn!(email = %body.email, "login rejected: {}", e);
            Err(e.into())
        }
    }
}

pub async fn get_notes_handler(
    State(data): State<Arc<AppState>>,
    query: Option<Query<ListNotes>>,
) -> Result<impl IntoResponse, AppError> {
    let sid = query.and_then(|Query(q)| q.sid).unwrap_or_default();

    let notes = {
        let store = data.store.lock();
        store
            .validate_session(&sid)
            .map(|email| store.list_notes(&email))
    };
    let notes = notes.map_err(rejected)?;
    Ok(Json(NotesResponse { notes }))
}

pub async fn post_note_handler(
    State(data): State<Arc<AppState>>,
    JsonBody(body): JsonBody<PostNote>,
) -> Result<impl IntoResponse, AppError> {
    let created = {
        let mut store = data.store.lock();
        store
            .validate_session(&body.sid)
            .map(|email| (store.create_note(&email, body.note), email))
    };
    let (id, email) = created.map_err(rejected)?;
    info!(%email, id, "note created");
    Ok(Json(CreatedNote { id }))
}

pub async fn delete_note_handler(
    State(data): State<Arc<AppState>>,
    JsonBody(body): JsonBody<DeleteNote>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = {
        let mut store = data.store.lock();
        store.validate_session(&body.sid).map(|email| {
            store.delete_note(&email, body.id);
            email
        })
    };
    let email = deleted.map_err(rejected)?;
    info!(%email, id = body.id, "note deleted");
    Ok(StatusCode::OK)
}

pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed
}

fn rejected(e: StoreError) -> AppError {
    warn!("rejected note request: {}", e);
    AppError::from(e)
}
