use serde::{Deserialize, Serialize};

/// Which record the signup form is collecting. Doubles as the tab selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EntityKind {
    #[default]
    Student,
    Club,
}

impl EntityKind {
    pub const ALL: [EntityKind; 2] = [EntityKind::Student, EntityKind::Club];

    pub fn from_tab_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(EntityKind::Student),
            1 => Some(EntityKind::Club),
            _ => None,
        }
    }

    pub fn tab_index(self) -> usize {
        match self {
            EntityKind::Student => 0,
            EntityKind::Club => 1,
        }
    }

    /// Relative to the API base URL.
    pub fn signup_path(self) -> &'static str {
        match self {
            EntityKind::Student => "api/students/signup",
            EntityKind::Club => "api/clubs/signup",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            EntityKind::Student => "Student registration successful!",
            EntityKind::Club => "Club registration successful!",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            EntityKind::Student => "Sign Up as Student",
            EntityKind::Club => "Sign Up as Club",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Student => f.write_str("student"),
            EntityKind::Club => f.write_str("club"),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("{kind} form has no field named {field:?}")]
    UnknownField { kind: EntityKind, field: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDraft {
    pub name: String,
    pub email: String,
    pub course: String,
    pub password: String,
}

impl StudentDraft {
    pub const FIELDS: [&'static str; 4] = ["name", "email", "course", "password"];

    pub fn set_field(&mut self, field: &str, value: String) -> Result<(), DraftError> {
        let slot = match field {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "course" => &mut self.course,
            "password" => &mut self.password,
            _ => {
                return Err(DraftError::UnknownField {
                    kind: EntityKind::Student,
                    field: field.to_string(),
                })
            }
        };
        *slot = value;

        Ok(())
    }

    /// Every field is required.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.course, &self.password]
            .iter()
            .all(|value| !value.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubDraft {
    pub name: String,
    pub email: String,
    pub description: String,
    pub password: String,
}

impl ClubDraft {
    pub const FIELDS: [&'static str; 4] = ["name", "email", "description", "password"];

    pub fn set_field(&mut self, field: &str, value: String) -> Result<(), DraftError> {
        let slot = match field {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "description" => &mut self.description,
            "password" => &mut self.password,
            _ => {
                return Err(DraftError::UnknownField {
                    kind: EntityKind::Club,
                    field: field.to_string(),
                })
            }
        };
        *slot = value;

        Ok(())
    }

    /// The description is optional; everything else is required.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.password]
            .iter()
            .all(|value| !value.is_empty())
    }
}

/// A snapshot of one draft, serialized as the flat record the server expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Draft {
    Student(StudentDraft),
    Club(ClubDraft),
}

impl Draft {
    pub fn kind(&self) -> EntityKind {
        match self {
            Draft::Student(_) => EntityKind::Student,
            Draft::Club(_) => EntityKind::Club,
        }
    }
}
