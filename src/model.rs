use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Data model representing a Todo item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub deadline: DateTime<Utc>,
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

impl Todo {
    pub fn new(title: String, deadline: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            deadline,
            done: false,
            created_at: Utc::now(),
        }
    }
}

// Data model representing a registered user and the todos it owns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub pro: bool,
    pub todos: Vec<Todo>,
}

impl User {
    pub fn new(name: String, username: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            username,
            pro: false,
            todos: Vec::new(),
        }
    }
}

/// Identity resolved from the `username` header by the account guard.
///
/// Handlers only ever see the caller through this value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub(crate) user_id: Uuid,
    pub(crate) username: String,
}

/// A todo resolved by the todo guard, addressed through its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoRef {
    pub(crate) user_id: Uuid,
    pub(crate) todo_id: Uuid,
}

/// Result of the user-by-id guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoundUser(pub(crate) Uuid);
