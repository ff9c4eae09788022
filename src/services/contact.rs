use crate::domain::contact::{Contact, NewContact, UpdateContact};
use crate::pagination::Paginated;
use crate::repository::{ContactListQuery, ContactReader, ContactWriter};
use crate::services::{ServiceError, ServiceResult};

/// Persists a new contact and returns it with its generated id and
/// timestamps.
pub fn create_contact<R>(repo: &R, new_contact: &NewContact) -> ServiceResult<Contact>
where
    R: ContactWriter + ?Sized,
{
    repo.create_contact(new_contact)
        .map_err(|e| ServiceError::classify(e, "Error to create contact"))
}

/// Returns the page of contacts matching the query together with the
/// pagination metadata.
pub fn list_contacts<R>(repo: &R, query: ContactListQuery) -> ServiceResult<Paginated<Contact>>
where
    R: ContactReader + ?Sized,
{
    let pagination = query.pagination.clone();

    let (total, contacts) = repo
        .list_contacts(query)
        .map_err(|e| ServiceError::classify(e, "Error to find contacts"))?;

    Ok(Paginated::new(
        contacts,
        pagination.page,
        pagination.per_page,
        total,
    ))
}

/// Fetches a contact by its identifier.
pub fn get_contact_by_id<R>(repo: &R, id: &str) -> ServiceResult<Contact>
where
    R: ContactReader + ?Sized,
{
    repo.get_contact_by_id(id)
        .map_err(|e| ServiceError::classify(e, "Error to find contact"))?
        .ok_or_else(|| ServiceError::contact_not_found(id))
}

/// Merges the provided fields into an existing contact. Absent fields keep
/// their prior values; `updated_at` is refreshed either way.
pub fn update_contact<R>(repo: &R, id: &str, updates: &UpdateContact) -> ServiceResult<Contact>
where
    R: ContactWriter + ?Sized,
{
    repo.update_contact(id, updates)
        .map_err(|e| ServiceError::classify(e, "Error to update contact"))?
        .ok_or_else(|| ServiceError::contact_not_found(id))
}

/// Sets the favorite flag. An omitted flag marks the contact as favorite;
/// unsetting requires an explicit `false`.
pub fn update_favorite<R>(repo: &R, id: &str, favorite: Option<bool>) -> ServiceResult<Contact>
where
    R: ContactWriter + ?Sized,
{
    let updates = UpdateContact::favorite(favorite.unwrap_or(true));

    repo.update_contact(id, &updates)
        .map_err(|e| ServiceError::classify(e, "Error to update favorite"))?
        .ok_or_else(|| ServiceError::contact_not_found(id))
}

/// Hard-deletes a contact by id.
pub fn remove_contact<R>(repo: &R, id: &str) -> ServiceResult<()>
where
    R: ContactWriter + ?Sized,
{
    let affected = repo
        .delete_contact(id)
        .map_err(|e| ServiceError::classify(e, "Error to remove contact"))?;

    if affected == 0 {
        return Err(ServiceError::contact_not_found(id));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn sample_contact(id: &str, name: &str) -> Contact {
        let now = Utc::now().naive_utc();
        Contact {
            id: id.to_string(),
            name: name.to_string(),
            cellphone: "11999999999".to_string(),
            favorite: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn create_returns_stored_contact() {
        let mut repo = MockRepository::new();
        repo.expect_create_contact()
            .withf(|new_contact| new_contact.name == "Bruno Santos")
            .returning(|new_contact| {
                let mut contact = sample_contact("id-1", &new_contact.name);
                contact.cellphone = new_contact.cellphone.clone();
                Ok(contact)
            });

        let created =
            create_contact(&repo, &NewContact::new("Bruno Santos", "11999999999")).unwrap();
        assert_eq!(created.id, "id-1");
        assert!(!created.favorite);
        assert_eq!(created.created_at, created.updated_at);
    }

    #[test]
    fn create_duplicate_cellphone_is_a_conflict() {
        let mut repo = MockRepository::new();
        repo.expect_create_contact().returning(|_| {
            Err(RepositoryError::UniqueViolation(
                "UNIQUE constraint failed: contacts.cellphone".into(),
            ))
        });

        let err = create_contact(&repo, &NewContact::new("Bruno Santos", "11999999999"))
            .unwrap_err();
        assert_eq!(
            err,
            ServiceError::Conflict("Error to create contact: duplicate entry".into())
        );
    }

    #[test]
    fn create_other_failures_are_internal() {
        let mut repo = MockRepository::new();
        repo.expect_create_contact()
            .returning(|_| Err(RepositoryError::ConnectionError("pool exhausted".into())));

        let err = create_contact(&repo, &NewContact::new("Bruno Santos", "11999999999"))
            .unwrap_err();
        assert_eq!(
            err,
            ServiceError::Internal("Error to create contact: internal server error".into())
        );
    }

    #[test]
    fn list_wraps_rows_in_envelope() {
        let mut repo = MockRepository::new();
        repo.expect_list_contacts()
            .withf(|query| {
                query.name.as_deref() == Some("bru")
                    && query.cellphone.as_deref() == Some("1199")
                    && query.pagination.offset() == 5
                    && query.pagination.limit() == 5
            })
            .returning(|_| {
                Ok((
                    12,
                    vec![
                        sample_contact("id-1", "Bruna Alves"),
                        sample_contact("id-2", "Bruno Santos"),
                    ],
                ))
            });

        let query = ContactListQuery::new()
            .name("bru")
            .cellphone("1199")
            .paginate(2, 5);
        let result = list_contacts(&repo, query).unwrap();

        assert_eq!(result.page, 2);
        assert_eq!(result.limit, 5);
        assert_eq!(result.total, 12);
        assert_eq!(result.total_pages, 3);
        assert_eq!(result.data.len(), 2);
    }

    #[test]
    fn list_empty_set_reports_one_page() {
        let mut repo = MockRepository::new();
        repo.expect_list_contacts().returning(|_| Ok((0, vec![])));

        let result = list_contacts(&repo, ContactListQuery::new()).unwrap();
        assert_eq!(result.page, 1);
        assert_eq!(result.limit, 30);
        assert_eq!(result.total, 0);
        assert_eq!(result.total_pages, 1);
        assert!(result.data.is_empty());
    }

    #[test]
    fn get_missing_contact_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_contact_by_id()
            .withf(|id| id == "missing")
            .returning(|_| Ok(None));

        let err = get_contact_by_id(&repo, "missing").unwrap_err();
        assert_eq!(
            err,
            ServiceError::NotFound("Contact with id \"missing\" not found".into())
        );
    }

    #[test]
    fn get_existing_contact_passes_through() {
        let mut repo = MockRepository::new();
        repo.expect_get_contact_by_id()
            .returning(|id| Ok(Some(sample_contact(id, "Bruno Santos"))));

        let contact = get_contact_by_id(&repo, "id-1").unwrap();
        assert_eq!(contact.id, "id-1");
    }

    #[test]
    fn get_storage_failure_is_internal() {
        let mut repo = MockRepository::new();
        repo.expect_get_contact_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError("disk I/O error".into())));

        let err = get_contact_by_id(&repo, "id-1").unwrap_err();
        assert_eq!(
            err,
            ServiceError::Internal("Error to find contact: internal server error".into())
        );
    }

    #[test]
    fn update_missing_contact_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_update_contact()
            .times(1)
            .returning(|_, _| Ok(None));

        let err = update_contact(&repo, "missing", &UpdateContact::default()).unwrap_err();
        assert_eq!(
            err,
            ServiceError::NotFound("Contact with id \"missing\" not found".into())
        );
    }

    #[test]
    fn update_merges_only_provided_fields() {
        let mut repo = MockRepository::new();
        repo.expect_update_contact()
            .withf(|id, updates| {
                id == "id-1"
                    && updates.name.as_deref() == Some("Novo Nome")
                    && updates.cellphone.is_none()
                    && updates.favorite.is_none()
            })
            .returning(|id, updates| {
                let mut contact = sample_contact(id, updates.name.as_deref().unwrap());
                contact.updated_at += chrono::Duration::seconds(1);
                Ok(Some(contact))
            });

        let updates = UpdateContact::new(Some("Novo Nome".into()), None);
        let updated = update_contact(&repo, "id-1", &updates).unwrap();
        assert_eq!(updated.name, "Novo Nome");
        assert!(updated.updated_at > updated.created_at);
    }

    #[test]
    fn favorite_defaults_to_true_when_omitted() {
        let mut repo = MockRepository::new();
        repo.expect_update_contact()
            .withf(|_, updates| {
                updates.favorite == Some(true)
                    && updates.name.is_none()
                    && updates.cellphone.is_none()
            })
            .returning(|id, _| {
                let mut contact = sample_contact(id, "Bruno Santos");
                contact.favorite = true;
                Ok(Some(contact))
            });

        let contact = update_favorite(&repo, "id-1", None).unwrap();
        assert!(contact.favorite);
    }

    #[test]
    fn explicit_false_unsets_favorite() {
        let mut repo = MockRepository::new();
        repo.expect_update_contact()
            .withf(|_, updates| updates.favorite == Some(false))
            .returning(|id, _| Ok(Some(sample_contact(id, "Bruno Santos"))));

        let contact = update_favorite(&repo, "id-1", Some(false)).unwrap();
        assert!(!contact.favorite);
    }

    #[test]
    fn favorite_errors_use_their_own_context() {
        let mut repo = MockRepository::new();
        repo.expect_update_contact()
            .returning(|_, _| Err(RepositoryError::Unexpected("boom".into())));

        let err = update_favorite(&repo, "id-1", None).unwrap_err();
        assert_eq!(
            err,
            ServiceError::Internal("Error to update favorite: internal server error".into())
        );
    }

    #[test]
    fn remove_succeeds_silently() {
        let mut repo = MockRepository::new();
        repo.expect_delete_contact()
            .withf(|id| id == "id-1")
            .returning(|_| Ok(1));

        assert_eq!(remove_contact(&repo, "id-1"), Ok(()));
    }

    #[test]
    fn remove_with_zero_affected_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_delete_contact().returning(|_| Ok(0));

        let err = remove_contact(&repo, "missing").unwrap_err();
        assert_eq!(
            err,
            ServiceError::NotFound("Contact with id \"missing\" not found".into())
        );
    }

    #[test]
    fn remove_storage_failure_is_internal() {
        let mut repo = MockRepository::new();
        repo.expect_delete_contact()
            .returning(|_| Err(RepositoryError::DatabaseError("locked".into())));

        let err = remove_contact(&repo, "id-1").unwrap_err();
        assert_eq!(
            err,
            ServiceError::Internal("Error to remove contact: internal server error".into())
        );
    }
}
