use crate::{
    db::DbPool,
    domain::contact::{Contact, NewContact, UpdateContact},
    repository::errors::RepositoryResult,
};

pub mod contact;
pub mod errors;
#[cfg(test)]
pub mod mock;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 30;
pub const MAX_ITEMS_PER_PAGE: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Normalizes raw paging input: the page is at least 1 and the page
    /// size is clamped to `1..=MAX_ITEMS_PER_PAGE`.
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_ITEMS_PER_PAGE),
        }
    }

    /// Rows to skip before the requested page. Saturates instead of
    /// overflowing: `page` comes straight from the query string and has no
    /// upper bound.
    pub fn offset(&self) -> i64 {
        let offset = self.page.saturating_sub(1).saturating_mul(self.per_page);
        i64::try_from(offset).unwrap_or(i64::MAX)
    }

    pub fn limit(&self) -> i64 {
        self.per_page as i64
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

/// Filter and paging arguments for listing contacts. Both filters are
/// case-insensitive substring matches combined with AND; an absent filter
/// imposes no constraint. Results are always ordered by name ascending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactListQuery {
    pub name: Option<String>,
    pub cellphone: Option<String>,
    pub pagination: Pagination,
}

impl ContactListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn cellphone(mut self, cellphone: impl Into<String>) -> Self {
        self.cellphone = Some(cellphone.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Pagination::new(page, per_page);
        self
    }
}

pub trait ContactReader {
    fn get_contact_by_id(&self, id: &str) -> RepositoryResult<Option<Contact>>;
    fn list_contacts(&self, query: ContactListQuery) -> RepositoryResult<(usize, Vec<Contact>)>;
}

pub trait ContactWriter {
    fn create_contact(&self, new_contact: &NewContact) -> RepositoryResult<Contact>;
    /// Merges the provided fields into the record, returning `None` when no
    /// record matches the id.
    fn update_contact(
        &self,
        id: &str,
        updates: &UpdateContact,
    ) -> RepositoryResult<Option<Contact>>;
    /// Returns the number of deleted rows.
    fn delete_contact(&self, id: &str) -> RepositoryResult<usize>;
}

/// Diesel-backed implementation of the repository traits, shared across
/// request handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }
}
