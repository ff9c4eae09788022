use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::contact::{Contact as DomainContact, UpdateContact as DomainUpdateContact};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::contacts)]
/// Diesel model for [`crate::domain::contact::Contact`].
pub struct Contact {
    pub id: String,
    pub name: String,
    pub cellphone: String,
    pub favorite: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::contacts)]
/// Insertable form of [`Contact`].
pub struct NewContact<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub cellphone: &'a str,
    pub favorite: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::contacts)]
/// Changeset applied when merging fields into a [`Contact`] record.
/// `None` fields are skipped by Diesel, which gives the partial-update
/// semantics; `updated_at` is always present so even an empty merge
/// refreshes the row.
pub struct UpdateContact<'a> {
    pub name: Option<&'a str>,
    pub cellphone: Option<&'a str>,
    pub favorite: Option<bool>,
    pub updated_at: NaiveDateTime,
}

impl From<Contact> for DomainContact {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            name: contact.name,
            cellphone: contact.cellphone,
            favorite: contact.favorite,
            created_at: contact.created_at,
            updated_at: contact.updated_at,
        }
    }
}

impl<'a> UpdateContact<'a> {
    pub fn new(updates: &'a DomainUpdateContact, updated_at: NaiveDateTime) -> Self {
        Self {
            name: updates.name.as_deref(),
            cellphone: updates.cellphone.as_deref(),
            favorite: updates.favorite,
            updated_at,
        }
    }
}
