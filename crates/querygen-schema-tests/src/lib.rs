//! Fixture schemas and end-to-end tests for the querygen pipeline.

pub mod schema;

#[cfg(test)]
mod test;

pub use querygen::prelude;
