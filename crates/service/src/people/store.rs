use async_trait::async_trait;

use crate::errors::ServiceError;
use crate::people::domain::{Person, PersonInput};

/// Trait abstraction for the person directory.
/// The HTTP layer depends on this rather than on a concrete store.
#[async_trait]
pub trait PeopleStore: Send + Sync {
    /// Every record, ascending by `person_id`.
    async fn list_all(&self) -> Vec<Person>;
    async fn get(&self, person_id: &str) -> Result<Person, ServiceError>;
    /// Insert a new record; returns the stored record.
    async fn create(&self, input: PersonInput) -> Result<Person, ServiceError>;
    /// Replace the first name of an existing record.
    async fn update(&self, person_id: &str, input: PersonInput) -> Result<Person, ServiceError>;
    async fn delete(&self, person_id: &str) -> Result<(), ServiceError>;
    async fn len(&self) -> usize;
}
