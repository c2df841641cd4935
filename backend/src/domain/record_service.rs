//! Record service implementing the driving ports.
//!
//! One generic service covers all five record types: validation lives on
//! the [`Record`] implementations and storage behind [`RecordRepository`].

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{RecordCommand, RecordQuery, RecordRepository};
use crate::domain::{FieldErrors, FormFields, Record, RecordError, RecordId, Stored};

/// Validates submissions and persists the ones that pass.
pub struct RecordService<R, P> {
    repository: Arc<P>,
    _record: PhantomData<fn() -> R>,
}

impl<R, P> Clone for RecordService<R, P> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            _record: PhantomData,
        }
    }
}

impl<R, P> RecordService<R, P> {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<P>) -> Self {
        Self {
            repository,
            _record: PhantomData,
        }
    }
}

impl<R, P> RecordService<R, P>
where
    R: Record,
    P: RecordRepository<R>,
{
    fn rejected(errors: FieldErrors) -> RecordError {
        debug!(
            kind = %R::KIND,
            fields = ?errors.fields().collect::<Vec<_>>(),
            "submission rejected"
        );
        RecordError::Invalid(errors)
    }

    async fn current(&self, id: RecordId) -> Result<Stored<R>, RecordError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| RecordError::not_found(R::KIND, id))
    }
}

#[async_trait]
impl<R, P> RecordCommand<R> for RecordService<R, P>
where
    R: Record,
    P: RecordRepository<R>,
{
    async fn save(&self, form: &FormFields) -> Result<Stored<R>, RecordError> {
        let record = R::from_form(form).map_err(Self::rejected)?;
        let stored = self.repository.insert(&record).await?;
        info!(kind = %R::KIND, id = %stored.id(), "record created");
        Ok(stored)
    }

    async fn update(&self, id: RecordId, partial: &FormFields) -> Result<Stored<R>, RecordError> {
        let current = self.current(id).await?;
        let merged = current.record().merge(partial).map_err(Self::rejected)?;
        if !self.repository.update(id, &merged).await? {
            return Err(RecordError::not_found(R::KIND, id));
        }
        info!(kind = %R::KIND, %id, "record updated");
        Ok(Stored::new(id, merged))
    }

    async fn delete(&self, id: RecordId) -> Result<(), RecordError> {
        if !self.repository.delete(id).await? {
            return Err(RecordError::not_found(R::KIND, id));
        }
        info!(kind = %R::KIND, %id, "record deleted");
        Ok(())
    }
}

#[async_trait]
impl<R, P> RecordQuery<R> for RecordService<R, P>
where
    R: Record,
    P: RecordRepository<R>,
{
    async fn fetch(&self, id: RecordId) -> Result<Stored<R>, RecordError> {
        self.current(id).await
    }

    async fn list(&self) -> Result<Vec<Stored<R>>, RecordError> {
        Ok(self.repository.list().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::messages;
    use crate::domain::ports::{MockRecordRepository, RecordRepositoryError};
    use crate::domain::{Medicine, Product};
    use rstest::rstest;

    fn id(raw: i64) -> RecordId {
        RecordId::new(raw).expect("valid id")
    }

    fn paracetamol() -> Medicine {
        Medicine::from_form(&FormFields::from_iter([
            ("name", "Paracetamol"),
            ("description", "Analgesico"),
            ("dose", "5"),
        ]))
        .expect("valid medicine")
    }

    fn service<R: Record>(
        repo: MockRecordRepository<R>,
    ) -> RecordService<R, MockRecordRepository<R>> {
        RecordService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn save_persists_valid_submission() {
        let mut repo = MockRecordRepository::<Medicine>::new();
        repo.expect_insert()
            .times(1)
            .returning(|record| Ok(Stored::new(RecordId::new(1).expect("id"), record.clone())));

        let stored = service(repo)
            .save(&paracetamol().to_form())
            .await
            .expect("saved");

        assert_eq!(stored.id(), id(1));
        assert_eq!(stored.record(), &paracetamol());
    }

    #[tokio::test]
    async fn save_does_not_touch_store_when_invalid() {
        let mut repo = MockRecordRepository::<Product>::new();
        repo.expect_insert().times(0);

        let error = service(repo)
            .save(&FormFields::from_iter([
                ("name", "Producto 1"),
                ("type", "Alimento"),
                ("price", "-100.0"),
            ]))
            .await
            .expect_err("invalid price");

        let errors = error.field_errors().expect("field errors");
        assert_eq!(errors.get("price"), Some(messages::PRICE_NOT_POSITIVE));
    }

    #[tokio::test]
    async fn update_persists_merged_record() {
        let mut repo = MockRecordRepository::<Medicine>::new();
        repo.expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(Stored::new(id, paracetamol()))));
        repo.expect_update()
            .withf(|_, record| record.dose().get() == 9 && record.name() == "Paracetamol")
            .times(1)
            .returning(|_, _| Ok(true));

        let stored = service(repo)
            .update(id(1), &FormFields::from_iter([("dose", "9")]))
            .await
            .expect("updated");

        assert_eq!(stored.record().dose().get(), 9);
        assert_eq!(stored.record().description(), "Analgesico");
    }

    #[tokio::test]
    async fn update_with_invalid_merge_leaves_store_untouched() {
        let mut repo = MockRecordRepository::<Medicine>::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(Stored::new(id, paracetamol()))));
        repo.expect_update().times(0);

        let error = service(repo)
            .update(id(1), &FormFields::from_iter([("dose", "15")]))
            .await
            .expect_err("dose out of range");

        assert!(matches!(error, RecordError::Invalid(ref errors) if errors.contains("dose")));
    }

    #[tokio::test]
    async fn update_of_unknown_record_is_not_found() {
        let mut repo = MockRecordRepository::<Medicine>::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_update().times(0);

        let error = service(repo)
            .update(id(100), &FormFields::from_iter([("dose", "9")]))
            .await
            .expect_err("missing");

        assert!(matches!(error, RecordError::NotFound { id: missing, .. } if missing == id(100)));
    }

    #[rstest]
    #[case(Ok(false), true)]
    #[case(Ok(true), false)]
    #[tokio::test]
    async fn delete_reports_missing_records(
        #[case] outcome: Result<bool, RecordRepositoryError>,
        #[case] expect_not_found: bool,
    ) {
        let mut repo = MockRecordRepository::<Medicine>::new();
        repo.expect_delete().times(1).return_once(move |_| outcome);

        let result = service(repo).delete(id(4)).await;

        assert_eq!(matches!(result, Err(RecordError::NotFound { .. })), expect_not_found);
    }

    #[tokio::test]
    async fn repository_failures_propagate() {
        let mut repo = MockRecordRepository::<Medicine>::new();
        repo.expect_list()
            .returning(|| Err(RecordRepositoryError::connection("refused")));

        let error = service(repo).list().await.expect_err("store down");

        assert!(matches!(error, RecordError::Repository(_)));
    }
}
