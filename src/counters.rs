use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::CounterPair;

/// Holder for the process-wide counter pair
#[derive(Clone, Default)]
pub struct CounterState {
    current: Arc<RwLock<CounterPair>>,
}

impl CounterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self) -> CounterPair {
        *self.current.read().await
    }

    pub async fn replace(&self, pair: CounterPair) -> CounterPair {
        let mut current = self.current.write().await;
        *current = pair;
        *current
    }
}
