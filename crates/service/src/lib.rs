//! Service layer providing the cafe directory operations on top of models.
//! - `db`: one function per store call against SeaORM.
//! - `cafe`: repository seam plus `CafeService`, which applies the API key and
//!   not-found policies.

pub mod errors;
pub mod pagination;
pub mod runtime;
#[cfg(test)]
pub mod test_support;
pub mod db;
pub mod cafe;
