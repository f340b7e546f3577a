pub mod routes;
pub mod startup;
pub mod errors;
pub mod metrics;
pub mod page;
pub mod state;

pub use startup::run;
