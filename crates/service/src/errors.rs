use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    AlreadyExists(String),
    #[error("{0}")]
    InvalidInput(String),
}

impl ServiceError {
    pub fn person_not_found(person_id: &str) -> Self {
        Self::NotFound(format!("Person with last name {person_id} not found"))
    }

    pub fn person_exists(person_id: &str) -> Self {
        Self::AlreadyExists(format!("Person with last name {person_id} already exists"))
    }
}
