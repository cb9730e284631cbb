//! In-memory store for users, sessions and notes.
//!
//! Every operation takes `&mut self`; callers share the store behind the
//! single mutex in [`crate::AppState`] and hold the guard for the whole
//! operation.

use std::collections::HashMap;

use crate::{
    error::StoreError,
    model::{Note, NoteId, Session, User},
};

#[derive(Debug, Default)]
pub struct NoteStore {
    users: HashMap<String, User>,
    sessions: HashMap<String, Session>,
    notes: HashMap<String, Vec<Note>>,
    next_note_id: NoteId,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, user: User) -> Result<(), StoreError> {
        if self.users.contains_key(&user.email) {
            return Err(StoreError::AlreadyExists);
        }
        self.users.insert(user.email.clone(), user);
        Ok(())
    }

    /// Checks the credentials and mints a session token.
    ///
    /// Tokens are `session_<n>` where `n` is the current note counter, so two
    /// logins with no note created in between get the same token.
    pub fn authenticate(&mut self, email: &str, password: &str) -> Result<String, StoreError> {
        let user = match self.users.get(email) {
            Some(user) if user.password == password => user,
            _ => return Err(StoreError::InvalidCredentials),
        };

        let sid = format!("session_{}", self.next_note_id);
        let session = Session {
            user_email: user.email.clone(),
        };
        self.sessions.insert(sid.clone(), session);
        Ok(sid)
    }

    pub fn validate_session(&self, sid: &str) -> Result<String, StoreError> {
        self.sessions
            .get(sid)
            .map(|session| session.user_email.clone())
            .ok_or(StoreError::Unauthorized)
    }

    pub fn list_notes(&self, email: &str) -> Vec<Note> {
        self.notes.get(email).cloned().unwrap_or_default()
    }

    pub fn create_note(&mut self, email: &str, text: String) -> NoteId {
        let id = self.next_note_id;
        self.next_note_id += 1;
        self.notes
            .entry(email.to_owned())
            .or_default()
            .push(Note { id, note: text });
        id
    }

    /// Removes the note with `id` from the user's list. Unknown ids are ignored.
    pub fn delete_note(&mut self, email: &str, id: NoteId) {
        if let Some(notes) = self.notes.get_mut(email) {
            notes.retain(|note| note.id != id);
        }
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str, password: &str) -> User {
        User {
            name: "Test".to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn store_with_user(email: &str, password: &str) -> NoteStore {
        let mut store = NoteStore::new();
        store.register(user(email, password)).unwrap();
        store
    }

    #[test]
    fn test_register_twice_is_rejected() {
        let mut store = NoteStore::new();
        assert!(store.register(user("a@x.com", "p")).is_ok());
        assert_eq!(
            store.register(user("a@x.com", "other")),
            Err(StoreError::AlreadyExists)
        );
        assert_eq!(store.user_count(), 1);
    }

    #[test]
    fn test_authenticate_issues_valid_session() {
        let mut store = store_with_user("a@x.com", "p");
        let sid = store.authenticate("a@x.com", "p").unwrap();
        assert_eq!(sid, "session_0");
        assert_eq!(store.validate_session(&sid).unwrap(), "a@x.com");
    }

    #[test]
    fn test_authenticate_rejects_bad_credentials() {
        let mut store = store_with_user("a@x.com", "p");
        assert_eq!(
            store.authenticate("a@x.com", "wrong"),
            Err(StoreError::InvalidCredentials)
        );
        assert_eq!(
            store.authenticate("nobody@x.com", "p"),
            Err(StoreError::InvalidCredentials)
        );
        assert_eq!(store.session_count(), 0);
    }

    #[test]
    fn test_session_token_follows_note_counter() {
        let mut store = store_with_user("a@x.com", "p");
        let first = store.authenticate("a@x.com", "p").unwrap();
        store.create_note("a@x.com", "one".to_string());
        store.create_note("a@x.com", "two".to_string());
        let second = store.authenticate("a@x.com", "p").unwrap();
        assert_eq!(first, "session_0");
        assert_eq!(second, "session_2");
        assert_eq!(store.session_count(), 2);
    }

    #[test]
    fn test_back_to_back_logins_share_a_token() {
        let mut store = NoteStore::new();
        store.register(user("a@x.com", "p")).unwrap();
        store.register(user("b@x.com", "q")).unwrap();

        let first = store.authenticate("a@x.com", "p").unwrap();
        let second = store.authenticate("b@x.com", "q").unwrap();
        assert_eq!(first, "session_0");
        assert_eq!(second, "session_0");
        assert_eq!(store.validate_session("session_0").unwrap(), "b@x.com");
        assert_eq!(store.session_count(), 1);
    }

    #[test]
    fn test_unknown_session_is_unauthorized() {
        let store = NoteStore::new();
        assert_eq!(
            store.validate_session("session_0"),
            Err(StoreError::Unauthorized)
        );
        assert_eq!(store.validate_session(""), Err(StoreError::Unauthorized));
    }

    #[test]
    fn test_note_ids_are_global_and_increasing() {
        let mut store = NoteStore::new();
        store.register(user("a@x.com", "p")).unwrap();
        store.register(user("b@x.com", "p")).unwrap();

        let a = store.create_note("a@x.com", "from a".to_string());
        let b = store.create_note("b@x.com", "from b".to_string());
        assert_eq!(b, a + 1);

        store.delete_note("b@x.com", b);
        let c = store.create_note("b@x.com", "again".to_string());
        assert_eq!(c, b + 1);
    }

    #[test]
    fn test_list_notes_in_creation_order() {
        let mut store = store_with_user("a@x.com", "p");
        assert!(store.list_notes("a@x.com").is_empty());

        store.create_note("a@x.com", "first".to_string());
        store.create_note("a@x.com", "second".to_string());
        store.create_note("a@x.com", "third".to_string());
        store.delete_note("a@x.com", 1);

        let notes = store.list_notes("a@x.com");
        assert_eq!(
            notes,
            vec![
                Note {
                    id: 0,
                    note: "first".to_string(),
                },
                Note {
                    id: 2,
                    note: "third".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_delete_is_scoped_and_idempotent() {
        let mut store = NoteStore::new();
        store.register(user("a@x.com", "p")).unwrap();
        store.register(user("b@x.com", "p")).unwrap();
        let id = store.create_note("a@x.com", "mine".to_string());

        // another user cannot remove it
        store.delete_note("b@x.com", id);
        assert_eq!(store.list_notes("a@x.com").len(), 1);

        store.delete_note("a@x.com", id);
        store.delete_note("a@x.com", id);
        store.delete_note("a@x.com", 42);
        assert!(store.list_notes("a@x.com").is_empty());
    }
}
