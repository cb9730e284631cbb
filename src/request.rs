use axum::{async_trait, body::Bytes, extract::FromRequest, http::Request};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{Map, Value};

use crate::{error::AppError, model::NoteId};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignupUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginUser {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ListNotes {
    pub sid: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PostNote {
    pub sid: String,
    pub note: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeleteNote {
    pub sid: String,
    pub id: NoteId,
}

/// JSON body extractor that ignores the Content-Type header and reports any
/// decoding failure as [`AppError::MalformedInput`].
///
/// Object keys match field names case-insensitively and absent fields take
/// their default value, so only non-JSON bodies or mistyped fields fail.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, B, T> FromRequest<S, B> for JsonBody<T>
where
    T: DeserializeOwned,
    Bytes: FromRequest<S, B>,
    B: Send + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<B>, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| AppError::MalformedInput)?;
        let value: Value = serde_json::from_slice(&bytes).map_err(|_| AppError::MalformedInput)?;
        serde_json::from_value(fold_keys(value))
            .map(JsonBody)
            .map_err(|_| AppError::MalformedInput)
    }
}

/// Lowercases top-level object keys. An exactly lowercase key wins over a
/// differently cased duplicate.
fn fold_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let (exact, folded): (Vec<_>, Vec<_>) = map
                .into_iter()
                .partition(|(key, _)| *key == key.to_lowercase());
            let mut keys = Map::new();
            for (key, value) in folded.into_iter().chain(exact) {
                keys.insert(key.to_lowercase(), value);
            }
            Value::Object(keys)
        }
        other => other,
    }
}
