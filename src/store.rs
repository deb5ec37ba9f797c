// In-memory user registry; callers synchronize access through `AppState`

use chrono::{DateTime, Utc};
use uuid::{fmt::Hyphenated, Uuid};

use crate::{
    error::AppError,
    model::{Account, Todo, TodoRef, User},
};

/// Todos a non-pro user may hold at once.
pub const FREE_TODO_LIMIT: usize = 10;

#[derive(Debug, Default)]
pub struct UserRegistry {
    users: Vec<User>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_user(&mut self, name: String, username: String) -> Result<User, AppError> {
        if self.users.iter().any(|user| user.username == username) {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }

        let user = User::new(name, username);
        tracing::info!(user_id = %user.id, username = %user.username, "user created");
        self.users.push(user.clone());
        Ok(user)
    }

    /// Looks a user up by its path-supplied id. Only the canonical lowercase
    /// hyphenated form matches; anything else is simply an unknown user.
    pub fn find_user_by_id(&self, id: &str) -> Result<&User, AppError> {
        canonical_id(id)
            .and_then(|id| self.user(id))
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    pub fn upgrade_to_pro(&mut self, user_id: Uuid) -> Result<User, AppError> {
        let user = self.user_mut(user_id)?;
        if user.pro {
            return Err(AppError::InvalidState(
                "Pro plan is already activated".to_string(),
            ));
        }

        user.pro = true;
        tracing::info!(user_id = %user.id, "pro plan activated");
        Ok(user.clone())
    }

    /// Resolves a claimed username into an [`Account`].
    pub fn account(&self, username: &str) -> Result<Account, AppError> {
        self.users
            .iter()
            .find(|user| user.username == username)
            .map(|user| Account {
                user_id: user.id,
                username: user.username.clone(),
            })
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Fails with `QuotaExceeded` when the user may not create another todo.
    pub fn check_todo_quota(&self, user_id: Uuid) -> Result<(), AppError> {
        let user = self.user_by_id(user_id)?;
        if !user.pro && user.todos.len() >= FREE_TODO_LIMIT {
            return Err(AppError::QuotaExceeded("User todos are full".to_string()));
        }
        Ok(())
    }

    pub fn list_todos(&self, user_id: Uuid) -> Result<&[Todo], AppError> {
        Ok(&self.user_by_id(user_id)?.todos)
    }

    pub fn create_todo(
        &mut self,
        user_id: Uuid,
        title: String,
        deadline: DateTime<Utc>,
    ) -> Result<Todo, AppError> {
        self.check_todo_quota(user_id)?;

        let user = self.user_mut(user_id)?;
        let todo = Todo::new(title, deadline);
        tracing::debug!(user_id = %user.id, todo_id = %todo.id, "todo created");
        user.todos.push(todo.clone());
        Ok(todo)
    }

    /// Resolves a path-supplied todo id under the user claiming `username`.
    ///
    /// The username is checked first, then the id format, then existence.
    /// Only the hyphenated form is well-formed; ids are matched exactly, so
    /// an uppercase spelling of a stored id is not found.
    pub fn resolve_todo(&self, username: &str, id: &str) -> Result<TodoRef, AppError> {
        let account = self.account(username)?;

        if !is_hyphenated(id) {
            return Err(AppError::InvalidArgument("Invalid todo id".to_string()));
        }
        let todo_id = canonical_id(id).ok_or_else(todo_not_found)?;

        self.todo(TodoRef {
            user_id: account.user_id,
            todo_id,
        })
        .map(|todo| TodoRef {
            user_id: account.user_id,
            todo_id: todo.id,
        })
    }

    pub fn todo(&self, todo_ref: TodoRef) -> Result<&Todo, AppError> {
        self.user_by_id(todo_ref.user_id)?
            .todos
            .iter()
            .find(|todo| todo.id == todo_ref.todo_id)
            .ok_or_else(todo_not_found)
    }

    pub fn update_todo(
        &mut self,
        todo_ref: TodoRef,
        title: String,
        deadline: DateTime<Utc>,
    ) -> Result<Todo, AppError> {
        let todo = self.todo_mut(todo_ref)?;
        todo.title = title;
        todo.deadline = deadline;
        Ok(todo.clone())
    }

    /// Open -> Done. Applying it to a done todo is a no-op.
    pub fn mark_done(&mut self, todo_ref: TodoRef) -> Result<Todo, AppError> {
        let todo = self.todo_mut(todo_ref)?;
        todo.done = true;
        Ok(todo.clone())
    }

    pub fn delete_todo(&mut self, todo_ref: TodoRef) -> Result<(), AppError> {
        let user = self.user_mut(todo_ref.user_id)?;
        let index = user
            .todos
            .iter()
            .position(|todo| todo.id == todo_ref.todo_id)
            .ok_or_else(todo_not_found)?;

        user.todos.remove(index);
        tracing::debug!(user_id = %user.id, todo_id = %todo_ref.todo_id, "todo deleted");
        Ok(())
    }

    fn user(&self, id: Uuid) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn user_by_id(&self, id: Uuid) -> Result<&User, AppError> {
        self.user(id)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    fn user_mut(&mut self, id: Uuid) -> Result<&mut User, AppError> {
        self.users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    fn todo_mut(&mut self, todo_ref: TodoRef) -> Result<&mut Todo, AppError> {
        self.user_mut(todo_ref.user_id)?
            .todos
            .iter_mut()
            .find(|todo| todo.id == todo_ref.todo_id)
            .ok_or_else(todo_not_found)
    }
}

fn is_hyphenated(id: &str) -> bool {
    id.len() == Hyphenated::LENGTH && Uuid::try_parse(id).is_ok()
}

fn canonical_id(id: &str) -> Option<Uuid> {
    Uuid::try_parse(id)
        .ok()
        .filter(|parsed| parsed.hyphenated().to_string() == id)
}

fn todo_not_found() -> AppError {
    AppError::NotFound("Todo not found".to_string())
}
