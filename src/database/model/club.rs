use diesel::{deserialize::Queryable, prelude::Insertable};
use serde::{Deserialize, Serialize};

use crate::database::schema::clubs;

/// Club account details.
#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Insertable)]
#[diesel(table_name = clubs)]
pub struct Club {
    pub id: String,
    pub name: String,
    pub email: String,
    pub description: Option<String>,
    #[serde(skip_serializing)]
    pub password: String,
}

impl Club {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "name": self.name,
            "email": self.email,
            "description": self.description.as_deref().unwrap_or_default(),
        })
    }
}

/// Validated club details, ready to be persisted.
///
/// A blank description is carried as `None` and stored as `NULL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClub {
    pub name: String,
    pub email: String,
    pub description: Option<String>,
    pub password: String,
}
