use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{Counter, CounterName};
use super::repository::CounterRepository;
use crate::errors::ServiceError;

/// Counter business service independent of web framework
pub struct CounterService<R: CounterRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: CounterRepository + ?Sized> Clone for CounterService<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}

impl<R: CounterRepository + ?Sized> CounterService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Existing record, or a fresh one with value 0.
    pub async fn get_or_create(&self, name: &CounterName) -> Result<Counter, ServiceError> {
        self.repo.get_or_create(name).await
    }

    /// Current value; an unknown name reads as 0.
    ///
    /// # Examples
    /// ```
    /// use service::counter::{CounterName, CounterService, repository::mock::MockCounterRepository};
    /// use std::sync::Arc;
    /// let svc = CounterService::new(Arc::new(MockCounterRepository::default()));
    /// let value = tokio_test::block_on(svc.get_value(&CounterName::default())).unwrap();
    /// assert_eq!(value, 0);
    /// ```
    pub async fn get_value(&self, name: &CounterName) -> Result<i64, ServiceError> {
        Ok(self.repo.get_or_create(name).await?.value)
    }

    /// Add one and return the new value.
    ///
    /// # Examples
    /// ```
    /// use service::counter::{CounterName, CounterService, repository::mock::MockCounterRepository};
    /// use std::sync::Arc;
    /// let svc = CounterService::new(Arc::new(MockCounterRepository::default()));
    /// let name = CounterName::new("clicks").unwrap();
    /// assert_eq!(tokio_test::block_on(svc.increment(&name)).unwrap(), 1);
    /// assert_eq!(tokio_test::block_on(svc.increment(&name)).unwrap(), 2);
    /// ```
    #[instrument(skip(self), fields(name = %name))]
    pub async fn increment(&self, name: &CounterName) -> Result<i64, ServiceError> {
        let c = self.repo.add(name, 1).await?;
        info!(value = c.value, "counter_incremented");
        Ok(c.value)
    }

    /// Subtract one and return the new value.
    #[instrument(skip(self), fields(name = %name))]
    pub async fn decrement(&self, name: &CounterName) -> Result<i64, ServiceError> {
        let c = self.repo.add(name, -1).await?;
        info!(value = c.value, "counter_decremented");
        Ok(c.value)
    }

    /// Set back to 0.
    #[instrument(skip(self), fields(name = %name))]
    pub async fn reset(&self, name: &CounterName) -> Result<i64, ServiceError> {
        let c = self.repo.set(name, 0).await?;
        info!(value = c.value, "counter_reset");
        Ok(c.value)
    }
}
