use diesel::{deserialize::Queryable, prelude::Insertable};
use serde::{Deserialize, Serialize};

use crate::database::schema::students;

/// Student account details.
#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Insertable)]
#[diesel(table_name = students)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    pub course: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl Student {
    /// Public view of the record; the password hash never leaves the server.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "name": self.name,
            "email": self.email,
            "course": self.course,
        })
    }
}

/// Validated student details, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub course: String,
    pub password: String,
}
