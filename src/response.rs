use serde::Serialize;

use crate::model::{Note, NoteId};

#[derive(Serialize, Debug)]
pub struct LoginResponse {
    pub sid: String,
}

#[derive(Serialize, Debug)]
pub struct NotesResponse {
    pub notes: Vec<Note>,
}

#[derive(Serialize, Debug)]
pub struct CreatedNote {
    pub id: NoteId,
}
