//! Service layer providing the counter operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Each operation owns exactly one storage transaction.

pub mod errors;
pub mod counter;
pub mod runtime;
#[cfg(test)]
pub mod test_support;
