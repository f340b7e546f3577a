//! Counter module: three-layer architecture (domain, repository, service).
//!
//! The free functions in [`ops`] are the storage-facing operations; the
//! repository and service wrap them for callers that want a trait seam.

pub mod domain;
pub mod ops;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{Counter, CounterName};
pub use ops::{decrement, get_or_create, get_value, increment, reset};
pub use self::service::CounterService;
