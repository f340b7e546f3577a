pub mod errors;
pub mod db;
pub mod counter;

#[cfg(test)]
mod tests;
