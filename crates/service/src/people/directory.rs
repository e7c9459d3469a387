use std::sync::Arc;

use tracing::{debug, info};

use crate::errors::ServiceError;
use crate::people::domain::{seed_people, Person, PersonInput};
use crate::people::store::PeopleStore;
use crate::storage::memory_map_store::MemoryMapStore;

/// In-memory directory of people keyed by last name.
#[derive(Clone)]
pub struct PersonDirectory {
    store: MemoryMapStore<String, Person>,
}

impl PersonDirectory {
    /// Directory with no records.
    pub fn empty() -> Arc<Self> {
        Arc::new(Self { store: MemoryMapStore::new() })
    }

    /// Directory holding the three fixed starting records.
    pub fn seeded() -> Arc<Self> {
        Self::with_people(seed_people())
    }

    pub fn with_people<I>(people: I) -> Arc<Self>
    where
        I: IntoIterator<Item = Person>,
    {
        let entries = people.into_iter().map(|p| (p.person_id.clone(), p));
        Arc::new(Self { store: MemoryMapStore::from_entries(entries) })
    }

    pub async fn list_all(&self) -> Vec<Person> {
        self.store.list_sorted().await
    }

    pub async fn get(&self, person_id: &str) -> Result<Person, ServiceError> {
        self.store
            .get(&person_id.to_string())
            .await
            .ok_or_else(|| ServiceError::person_not_found(person_id))
    }

    pub async fn create(&self, input: PersonInput) -> Result<Person, ServiceError> {
        let person_id = match input.person_id {
            Some(id) if !id.trim().is_empty() => id,
            _ => return Err(ServiceError::InvalidInput("person_id is required".into())),
        };
        let created = self
            .store
            .update_map(|map| {
                if map.contains_key(&person_id) {
                    return Err(ServiceError::person_exists(&person_id));
                }
                let person = Person::new(person_id.clone(), input.fname);
                map.insert(person_id.clone(), person.clone());
                Ok(person)
            })
            .await?;
        info!(person_id = %created.person_id, "person created");
        Ok(created)
    }

    pub async fn update(&self, person_id: &str, input: PersonInput) -> Result<Person, ServiceError> {
        let updated = self
            .store
            .update_map(|map| {
                let person = map
                    .get_mut(person_id)
                    .ok_or_else(|| ServiceError::person_not_found(person_id))?;
                person.rename(input.fname);
                Ok(person.clone())
            })
            .await?;
        debug!(person_id = %person_id, fname = ?updated.first_name, "person updated");
        Ok(updated)
    }

    pub async fn delete(&self, person_id: &str) -> Result<(), ServiceError> {
        self.store
            .update_map(|map| {
                map.remove(person_id)
                    .map(|_| ())
                    .ok_or_else(|| ServiceError::person_not_found(person_id))
            })
            .await?;
        info!(person_id = %person_id, "person deleted");
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.store.len().await
    }

    pub async fn is_empty(&self) -> bool {
        self.store.is_empty().await
    }
}

#[async_trait::async_trait]
impl PeopleStore for PersonDirectory {
    async fn list_all(&self) -> Vec<Person> { self.list_all().await }
    async fn get(&self, person_id: &str) -> Result<Person, ServiceError> { self.get(person_id).await }
    async fn create(&self, input: PersonInput) -> Result<Person, ServiceError> { self.create(input).await }
    async fn update(&self, person_id: &str, input: PersonInput) -> Result<Person, ServiceError> { self.update(person_id, input).await }
    async fn delete(&self, person_id: &str) -> Result<(), ServiceError> { self.delete(person_id).await }
    async fn len(&self) -> usize { self.len().await }
}
