use chrono::Local;
use serde::{Deserialize, Serialize};

/// Format of `Person::last_modified`, local clock, second precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time rendered with [`TIMESTAMP_FORMAT`].
pub fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// A single entry of the directory, keyed by `person_id` (a last name).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    pub person_id: String,
    #[serde(rename = "fname")]
    pub first_name: Option<String>,
    #[serde(rename = "timestamp")]
    pub last_modified: String,
}

impl Person {
    pub fn new(person_id: impl Into<String>, first_name: Option<String>) -> Self {
        Self {
            person_id: person_id.into(),
            first_name,
            last_modified: timestamp(),
        }
    }

    /// Overwrite the first name and refresh the timestamp.
    pub fn rename(&mut self, first_name: Option<String>) {
        self.first_name = first_name;
        self.last_modified = timestamp();
    }
}

/// Request body for create and update. Both fields may be absent.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct PersonInput {
    #[serde(default)]
    pub person_id: Option<String>,
    #[serde(default)]
    pub fname: Option<String>,
}

impl PersonInput {
    pub fn new(person_id: impl Into<String>, fname: impl Into<String>) -> Self {
        Self { person_id: Some(person_id.into()), fname: Some(fname.into()) }
    }

    pub fn with_fname(fname: impl Into<String>) -> Self {
        Self { person_id: None, fname: Some(fname.into()) }
    }
}

/// Records the directory starts with.
pub fn seed_people() -> Vec<Person> {
    [("Farrell", "Doug"), ("Brockman", "Kent"), ("Easter", "Bunny")]
        .into_iter()
        .map(|(id, fname)| Person::new(id, Some(fname.to_string())))
        .collect()
}
