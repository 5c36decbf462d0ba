use crate::gql::{Message, MessageInput};
use async_graphql::ID;
use futures::lock::Mutex;
use slab::Slab;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

// In-memory "database": lives as long as the function instance does

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no message exists with id {0}")]
    NotFound(String),
}

#[derive(Default)]
pub struct Db {
    messages: Slab<Message>,
    keys: HashMap<String, usize>,
}

pub type Storage = Arc<Mutex<Db>>;

impl Db {
    /// A store holding the single record every fresh instance starts with.
    pub fn seeded() -> Self {
        let mut db = Self::default();
        db.create(MessageInput::new(
            Some("good morning".to_string()),
            Some("dina".to_string()),
        ));
        db
    }

    pub fn into_storage(self) -> Storage {
        Arc::new(Mutex::new(self))
    }

    pub fn create(&mut self, input: MessageInput) -> Message {
        let key = Uuid::new_v4().to_string();
        let entry = self.messages.vacant_entry();
        self.keys.insert(key.clone(), entry.key());
        log::debug!("created message {}", key);
        let message = Message::new(ID::from(key), input.content, input.author);
        entry.insert(message.clone());
        message
    }

    pub fn get(&self, id: &str) -> Result<Message, StoreError> {
        self.keys
            .get(id)
            .and_then(|&key| self.messages.get(key))
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Overwrites both fields with `input`, so an omitted field becomes null.
    pub fn update(&mut self, id: &str, input: MessageInput) -> Result<Message, StoreError> {
        let key = *self
            .keys
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let message = self
            .messages
            .get_mut(key)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        message.content = input.content;
        message.author = input.author;
        log::debug!("updated message {}", id);
        Ok(message.clone())
    }

    /// Every record, oldest first. Nothing is ever removed, so slab order is
    /// insertion order.
    pub fn list(&self) -> Vec<Message> {
        self.messages.iter().map(|(_, m)| m).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
