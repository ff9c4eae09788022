use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    domain::contact::{Contact, NewContact, UpdateContact},
    repository::{ContactListQuery, ContactReader, ContactWriter, DieselRepository},
    repository::errors::RepositoryResult,
};

impl ContactReader for DieselRepository {
    fn get_contact_by_id(&self, id: &str) -> RepositoryResult<Option<Contact>> {
        use crate::models::contact::Contact as DbContact;
        use crate::schema::contacts;

        let mut conn = self.pool().get()?;
        let contact = contacts::table
            .find(id)
            .first::<DbContact>(&mut conn)
            .optional()?;

        Ok(contact.map(Into::into))
    }

    fn list_contacts(&self, query: ContactListQuery) -> RepositoryResult<(usize, Vec<Contact>)> {
        use crate::models::contact::Contact as DbContact;
        use crate::schema::contacts;

        let mut conn = self.pool().get()?;

        let mut items = contacts::table.into_boxed();
        let mut count = contacts::table.into_boxed();

        // SQLite LIKE is case-insensitive for ASCII, which matches the
        // contains semantics the filters require.
        if let Some(name) = &query.name {
            let pattern = format!("%{name}%");
            items = items.filter(contacts::name.like(pattern.clone()));
            count = count.filter(contacts::name.like(pattern));
        }

        if let Some(cellphone) = &query.cellphone {
            let pattern = format!("%{cellphone}%");
            items = items.filter(contacts::cellphone.like(pattern.clone()));
            count = count.filter(contacts::cellphone.like(pattern));
        }

        let total: i64 = count.count().get_result(&mut conn)?;

        let contacts = items
            .order(contacts::name.asc())
            .offset(query.pagination.offset())
            .limit(query.pagination.limit())
            .load::<DbContact>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Contact>>();

        Ok((total as usize, contacts))
    }
}

impl ContactWriter for DieselRepository {
    fn create_contact(&self, new_contact: &NewContact) -> RepositoryResult<Contact> {
        use crate::models::contact::{Contact as DbContact, NewContact as DbNewContact};
        use crate::schema::contacts;

        let mut conn = self.pool().get()?;
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().naive_utc();

        let record = DbNewContact {
            id: &id,
            name: &new_contact.name,
            cellphone: &new_contact.cellphone,
            favorite: false,
            created_at: now,
            updated_at: now,
        };

        let created = diesel::insert_into(contacts::table)
            .values(&record)
            .get_result::<DbContact>(&mut conn)?;

        Ok(created.into())
    }

    fn update_contact(
        &self,
        id: &str,
        updates: &UpdateContact,
    ) -> RepositoryResult<Option<Contact>> {
        use crate::models::contact::{Contact as DbContact, UpdateContact as DbUpdateContact};
        use crate::schema::contacts;

        let mut conn = self.pool().get()?;
        let changes = DbUpdateContact::new(updates, Utc::now().naive_utc());

        let updated = diesel::update(contacts::table.find(id))
            .set(&changes)
            .get_result::<DbContact>(&mut conn)
            .optional()?;

        Ok(updated.map(Into::into))
    }

    fn delete_contact(&self, id: &str) -> RepositoryResult<usize> {
        use crate::schema::contacts;

        let mut conn = self.pool().get()?;
        let affected = diesel::delete(contacts::table.find(id)).execute(&mut conn)?;

        Ok(affected)
    }
}
