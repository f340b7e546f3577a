use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::counter::repo::seaorm::SeaOrmCounterRepository;
use service::counter::repository::CounterRepository;
use service::counter::CounterService;

#[derive(Clone)]
pub struct AppState {
    pub counters: CounterService<dyn CounterRepository>,
}

impl AppState {
    pub fn new(repo: Arc<dyn CounterRepository>) -> Self {
        Self { counters: CounterService::new(repo) }
    }

    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmCounterRepository { db }))
    }
}
