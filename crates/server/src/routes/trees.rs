use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use common::types::Message;
use models::{Tree, TreeInput};

use crate::errors::ApiError;
use crate::routes::ServerState;

/// `POST /trees` — store the record under the body's id.
/// An existing record under the same id is overwritten silently, and
/// missing body fields are persisted as null rather than rejected.
pub async fn create_tree(
    State(state): State<ServerState>,
    Json(tree): Json<Tree>,
) -> Result<Json<Message>, ApiError> {
    let id = tree.key_id().to_string();
    let species = tree.species_label().to_string();
    state.trees.set(&id, tree).await?;
    Ok(Json(Message::new(format!("We just added a {} tree!", species))))
}

/// `GET /trees/:id` — the stored record, or 404 with a message body.
pub async fn get_tree(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    match state.trees.get(&id).await? {
        Some(tree) => Ok(Json(tree).into_response()),
        None => Ok((StatusCode::NOT_FOUND, Json(Message::new("Tree not found"))).into_response()),
    }
}

/// `PUT /trees/:id` — unconditional upsert; the id comes from the path,
/// never the body. Creates the record if it did not exist.
pub async fn update_tree(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(input): Json<TreeInput>,
) -> Result<Json<Message>, ApiError> {
    let tree = input.into_tree(id.clone());
    let location = tree.location_label().to_string();
    state.trees.set(&id, tree).await?;
    Ok(Json(Message::new(format!("Tree has relocated to {}!", location))))
}

/// `DELETE /trees/:id` — unconditional delete, 200 whether or not the
/// record existed.
pub async fn delete_tree(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, ApiError> {
    state.trees.delete(&id).await?;
    Ok(Json(Message::new(format!("Tree {} has been cut down!", id))))
}
