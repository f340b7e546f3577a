use async_trait::async_trait;

use super::domain::{Counter, CounterName};
use crate::errors::ServiceError;

/// Repository abstraction for counter persistence.
/// Every call is its own unit of work; mutations must be atomic per name.
#[async_trait]
pub trait CounterRepository: Send + Sync {
    async fn get_or_create(&self, name: &CounterName) -> Result<Counter, ServiceError>;
    async fn add(&self, name: &CounterName, delta: i64) -> Result<Counter, ServiceError>;
    async fn set(&self, name: &CounterName, value: i64) -> Result<Counter, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use uuid::Uuid;

    #[derive(Default)]
    pub struct MockCounterRepository {
        counters: Mutex<HashMap<String, Counter>>, // key: counter name
    }

    impl MockCounterRepository {
        pub fn len(&self) -> usize { self.counters.lock().unwrap().len() }

        pub fn is_empty(&self) -> bool { self.len() == 0 }

        /// Drop every counter, like `reset_db` for the SQL store.
        pub fn clear(&self) { self.counters.lock().unwrap().clear(); }
    }

    fn new_counter(name: &CounterName, value: i64) -> Counter {
        let now = Utc::now().into();
        Counter { id: Uuid::new_v4(), name: name.to_string(), value, created_at: now, updated_at: now }
    }

    #[async_trait]
    impl CounterRepository for MockCounterRepository {
        async fn get_or_create(&self, name: &CounterName) -> Result<Counter, ServiceError> {
            let mut counters = self.counters.lock().unwrap();
            let c = counters
                .entry(name.to_string())
                .or_insert_with(|| new_counter(name, 0));
            Ok(c.clone())
        }

        async fn add(&self, name: &CounterName, delta: i64) -> Result<Counter, ServiceError> {
            let mut counters = self.counters.lock().unwrap();
            match counters.get_mut(name.as_str()) {
                Some(c) => {
                    c.value = c
                        .value
                        .checked_add(delta)
                        .ok_or_else(|| ServiceError::Validation(format!("counter {name} would overflow")))?;
                    c.updated_at = Utc::now().into();
                    Ok(c.clone())
                }
                None => {
                    let c = new_counter(name, delta);
                    counters.insert(name.to_string(), c.clone());
                    Ok(c)
                }
            }
        }

        async fn set(&self, name: &CounterName, value: i64) -> Result<Counter, ServiceError> {
            let mut counters = self.counters.lock().unwrap();
            match counters.get_mut(name.as_str()) {
                Some(c) => {
                    c.value = value;
                    c.updated_at = Utc::now().into();
                    Ok(c.clone())
                }
                None => {
                    let c = new_counter(name, value);
                    counters.insert(name.to_string(), c.clone());
                    Ok(c)
                }
            }
        }
    }
}
