//! People directory: an in-memory keyed store of person records.

pub mod domain;
pub mod store;
pub mod directory;

pub use directory::PersonDirectory;
pub use domain::{Person, PersonInput};
pub use store::PeopleStore;
