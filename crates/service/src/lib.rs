//! Service layer for the people directory.
//! - Keeps validation and lookup rules out of the HTTP handlers.
//! - Exposes the directory behind the `PeopleStore` trait so callers share one instance.

pub mod errors;
pub mod storage;
pub mod people;
