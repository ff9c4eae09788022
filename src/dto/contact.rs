//! Request DTOs consumed by the contacts API endpoints.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::contact::{NewContact, UpdateContact};
use crate::repository::{ContactListQuery, DEFAULT_ITEMS_PER_PAGE};

/// Requires at least two "real" words (three or more letters). Words must
/// be letters only; after the first word, anything shorter than three
/// letters has to be a known connector ("Maria da Silva").
fn validate_full_name(name: &str) -> Result<(), ValidationError> {
    const CONNECTORS: [&str; 6] = ["da", "de", "do", "das", "dos", "e"];

    let invalid = || {
        ValidationError::new("full_name").with_message(
            "Name should have at least two words with 3+ letters each; \
             short connectors are allowed."
                .into(),
        )
    };

    let mut real_words = 0;

    for (position, word) in name.split_whitespace().enumerate() {
        if !word.chars().all(char::is_alphabetic) {
            return Err(invalid());
        }

        if word.chars().count() >= 3 {
            real_words += 1;
        } else if position > 0 && !CONNECTORS.contains(&word.to_lowercase().as_str()) {
            return Err(invalid());
        }
    }

    if real_words >= 2 { Ok(()) } else { Err(invalid()) }
}

#[derive(Debug, Deserialize, Validate)]
/// Payload for creating a contact.
pub struct CreateContactRequest {
    #[validate(custom(function = validate_full_name))]
    pub name: String,
    #[validate(length(min = 1))]
    pub cellphone: String,
}

#[derive(Debug, Deserialize, Validate)]
/// Payload for merging fields into an existing contact.
pub struct UpdateContactRequest {
    #[validate(custom(function = validate_full_name))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub cellphone: Option<String>,
}

#[derive(Debug, Deserialize)]
/// Payload for toggling the favorite flag. An omitted flag means "mark as
/// favorite"; unsetting takes an explicit `false`.
pub struct UpdateFavoriteRequest {
    pub favorite: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
/// Query parameters accepted by the contact list endpoint.
pub struct ContactsQuery {
    /// Optional case-insensitive substring filter on the name.
    pub name: Option<String>,
    /// Optional case-insensitive substring filter on the cellphone.
    pub cellphone: Option<String>,
    /// Optional page number, 1-based.
    pub page: Option<usize>,
    /// Optional page size, capped by the repository layer.
    pub limit: Option<usize>,
}

impl From<CreateContactRequest> for NewContact {
    fn from(request: CreateContactRequest) -> Self {
        NewContact::new(request.name, request.cellphone)
    }
}

impl From<UpdateContactRequest> for UpdateContact {
    fn from(request: UpdateContactRequest) -> Self {
        UpdateContact::new(request.name, request.cellphone)
    }
}

impl From<ContactsQuery> for ContactListQuery {
    fn from(params: ContactsQuery) -> Self {
        let mut query = ContactListQuery::new().paginate(
            params.page.unwrap_or(1),
            params.limit.unwrap_or(DEFAULT_ITEMS_PER_PAGE),
        );

        if let Some(name) = params
            .name
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
        {
            query = query.name(name);
        }

        if let Some(cellphone) = params
            .cellphone
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
        {
            query = query.cellphone(cellphone);
        }

        query
    }
}
