use crate::counters::CounterState;
use crate::todo_store::TodoStore;

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    pub todos: TodoStore,
    pub counters: CounterState,
}

impl AppState {
    /// Fresh, empty stores
    pub fn new() -> Self {
        Self::default()
    }
}
