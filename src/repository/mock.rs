//! Mock repository implementation for isolating services in tests.

use mockall::mock;

use crate::domain::contact::{Contact, NewContact, UpdateContact};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ContactListQuery, ContactReader, ContactWriter};

mock! {
    pub Repository {}

    impl ContactReader for Repository {
        fn get_contact_by_id(&self, id: &str) -> RepositoryResult<Option<Contact>>;
        fn list_contacts(&self, query: ContactListQuery) -> RepositoryResult<(usize, Vec<Contact>)>;
    }

    impl ContactWriter for Repository {
        fn create_contact(&self, new_contact: &NewContact) -> RepositoryResult<Contact>;
        fn update_contact(
            &self,
            id: &str,
            updates: &UpdateContact,
        ) -> RepositoryResult<Option<Contact>>;
        fn delete_contact(&self, id: &str) -> RepositoryResult<usize>;
    }
}
