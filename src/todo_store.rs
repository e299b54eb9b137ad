use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::Todo;

/// Lookup failure for a todo id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoNotFound(pub i64);

impl fmt::Display for TodoNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Todo with the ID {} not found", self.0)
    }
}

impl std::error::Error for TodoNotFound {}

struct TodoList {
    todos: Vec<Todo>,
    next_id: i64,
}

impl TodoList {
    fn position(&self, id: i64) -> Result<usize, TodoNotFound> {
        self.todos
            .iter()
            .position(|todo| todo.id == Some(id))
            .ok_or(TodoNotFound(id))
    }
}

/// Shareable in-memory todo store for use across async handlers
///
/// The list and the id counter sit behind one lock, held for the whole of
/// each operation. Iteration order is insertion order; `update` moves the
/// updated todo to the end.
#[derive(Clone)]
pub struct TodoStore {
    inner: Arc<RwLock<TodoList>>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(TodoList {
                todos: Vec::new(),
                next_id: 1,
            })),
        }
    }

    pub async fn list_all(&self) -> Vec<Todo> {
        self.inner.read().await.todos.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.todos.len()
    }

    /// Store a new todo under the next free id and return it
    pub async fn create(&self, summary: String, description: String) -> Todo {
        let mut list = self.inner.write().await;
        let id = list.next_id;
        list.next_id += 1;

        let todo = Todo::with_id(id, summary, description);
        list.todos.push(todo.clone());
        todo
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Todo, TodoNotFound> {
        let list = self.inner.read().await;
        let index = list.position(id)?;
        Ok(list.todos[index].clone())
    }

    /// Replace summary and description of an existing todo, keeping its id
    pub async fn update(
        &self,
        id: i64,
        summary: String,
        description: String,
    ) -> Result<Todo, TodoNotFound> {
        let mut list = self.inner.write().await;
        let index = list.position(id)?;
        list.todos.remove(index);

        let todo = Todo::with_id(id, summary, description);
        list.todos.push(todo.clone());
        Ok(todo)
    }

    pub async fn delete(&self, id: i64) -> Result<(), TodoNotFound> {
        let mut list = self.inner.write().await;
        let index = list.position(id)?;
        list.todos.remove(index);
        Ok(())
    }
}
