use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A stored contact as exposed to callers of the service.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Opaque identifier generated at creation, never reused.
    pub id: String,
    pub name: String,
    pub cellphone: String,
    pub favorite: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to create a contact. The id, timestamps and the
/// `favorite` default are filled in by the repository.
#[derive(Clone, Debug, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub cellphone: String,
}

impl NewContact {
    #[must_use]
    pub fn new(name: impl Into<String>, cellphone: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            cellphone: cellphone.into().trim().to_string(),
        }
    }
}

/// Field-level merge applied to an existing contact. `None` fields keep
/// their prior values.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct UpdateContact {
    pub name: Option<String>,
    pub cellphone: Option<String>,
    pub favorite: Option<bool>,
}

impl UpdateContact {
    #[must_use]
    pub fn new(name: Option<String>, cellphone: Option<String>) -> Self {
        Self {
            name: name
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            cellphone: cellphone
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            favorite: None,
        }
    }

    /// Merge touching only the `favorite` flag.
    #[must_use]
    pub fn favorite(favorite: bool) -> Self {
        Self {
            favorite: Some(favorite),
            ..Self::default()
        }
    }
}
