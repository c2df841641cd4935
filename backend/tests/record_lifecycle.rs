//! Save/update/delete behaviour of the record service over the in-memory
//! store, exercised through the public API only.

use std::sync::Arc;

use rstest::rstest;
use vetsoft::domain::ports::{RecordCommand, RecordQuery};
use vetsoft::domain::{
    Client, FormFields, Medicine, Product, Provider, Record, RecordError, RecordId,
    RecordService, Specialty, Vet, messages, validate_client, validate_medicine,
    validate_product, validate_provider, validate_vet,
};
use vetsoft::outbound::memory::InMemoryRecordRepository;

type Service<R> = RecordService<R, InMemoryRecordRepository<R>>;

fn service<R: Record>() -> Service<R> {
    RecordService::new(Arc::new(InMemoryRecordRepository::new()))
}

fn form<const N: usize>(pairs: [(&str, &str); N]) -> FormFields {
    FormFields::from_iter(pairs)
}

fn id(raw: i64) -> RecordId {
    RecordId::new(raw).expect("positive id")
}

#[rstest]
#[case::client(validate_client(&form([
    ("name", "Juan Sebastian Veron"),
    ("phone", "54221555232"),
    ("email", "brujita75@vetsoft.com"),
])))]
#[case::vet(validate_vet(&form([
    ("name", "Ana Perez"),
    ("phone", "221555232"),
    ("email", "ana@clinica.com"),
    ("specialty", "Oncología"),
])))]
#[case::medicine(validate_medicine(&form([
    ("name", "Amoxicilina"),
    ("description", "Antibiotico"),
    ("dose", "10"),
])))]
#[case::product(validate_product(&form([
    ("name", "Collar"),
    ("type", "Accesorio"),
    ("price", "0.01"),
])))]
#[case::provider(validate_provider(&form([
    ("name", "Distribuidora Sur"),
    ("email", "ventas@sur.com"),
    ("address", "Calle 1 234"),
])))]
fn valid_submissions_produce_no_errors(#[case] errors: vetsoft::domain::FieldErrors) {
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

#[rstest]
#[case::client(validate_client(&FormFields::new()), &["name", "phone", "email"][..])]
#[case::vet(validate_vet(&FormFields::new()), &["name", "phone", "email"][..])]
#[case::medicine(validate_medicine(&FormFields::new()), &["name", "description", "dose"][..])]
#[case::product(validate_product(&FormFields::new()), &["name", "type", "price"][..])]
#[case::provider(validate_provider(&FormFields::new()), &["name", "email", "address"][..])]
fn empty_submissions_flag_every_required_field(
    #[case] errors: vetsoft::domain::FieldErrors,
    #[case] required: &[&str],
) {
    let flagged: Vec<_> = errors.fields().collect();
    assert_eq!(flagged, {
        let mut sorted = required.to_vec();
        sorted.sort_unstable();
        sorted
    });
}

#[tokio::test]
async fn client_lifecycle() {
    let clients = service::<Client>();

    let stored = clients
        .save(&form([
            ("name", "Juan Sebastian Veron"),
            ("phone", "54221555232"),
            ("email", "brujita75@vetsoft.com"),
            ("address", "13 y 44"),
        ]))
        .await
        .expect("valid client");
    assert_eq!(stored.id(), id(1));

    let updated = clients
        .update(stored.id(), &form([("name", "Guido Carrillo"), ("phone", "")]))
        .await
        .expect("valid update");
    assert_eq!(updated.record().name(), "Guido Carrillo");
    assert_eq!(updated.record().phone(), "54221555232");
    assert_eq!(updated.record().address(), Some("13 y 44"));

    clients.delete(stored.id()).await.expect("deleted");
    assert!(clients.list().await.expect("list").is_empty());
}

#[tokio::test]
async fn invalid_update_leaves_stored_record_unchanged() {
    let clients = service::<Client>();
    let stored = clients
        .save(&form([
            ("name", "Juan Sebastian Veron"),
            ("phone", "54221555232"),
            ("email", "brujita75@vetsoft.com"),
        ]))
        .await
        .expect("valid client");

    let error = clients
        .update(stored.id(), &form([("phone", "221555232"), ("name", "Juan 2")]))
        .await
        .expect_err("invalid update");

    let errors = error.field_errors().expect("validation failure");
    assert_eq!(errors.get("phone"), Some(messages::PHONE_MISSING_PREFIX));
    assert_eq!(errors.get("name"), Some(messages::NAME_LETTERS_ONLY));
    let current = clients.fetch(stored.id()).await.expect("still stored");
    assert_eq!(current.record(), stored.record());
}

#[rstest]
#[case("0", messages::DOSE_OUT_OF_RANGE)]
#[case("11", messages::DOSE_OUT_OF_RANGE)]
#[case("cinco", messages::DOSE_NOT_NUMERIC)]
#[case("2.5", messages::DOSE_NOT_NUMERIC)]
#[tokio::test]
async fn medicine_with_bad_dose_is_not_saved(#[case] dose: &str, #[case] message: &str) {
    let medicines = service::<Medicine>();

    let error = medicines
        .save(&form([
            ("name", "Paracetamol"),
            ("description", "Analgesico"),
            ("dose", dose),
        ]))
        .await
        .expect_err("bad dose");

    assert_eq!(error.field_errors().and_then(|e| e.get("dose")), Some(message));
    assert!(medicines.list().await.expect("list").is_empty());
}

#[rstest]
#[case("0", messages::PRICE_NOT_POSITIVE)]
#[case("-100.0", messages::PRICE_NOT_POSITIVE)]
#[case("barato", messages::PRICE_NOT_NUMERIC)]
#[case("NaN", messages::PRICE_NOT_NUMERIC)]
#[tokio::test]
async fn product_with_bad_price_is_not_saved(#[case] price: &str, #[case] message: &str) {
    let products = service::<Product>();

    let error = products
        .save(&form([("name", "Collar"), ("type", "Accesorio"), ("price", price)]))
        .await
        .expect_err("bad price");

    assert_eq!(error.field_errors().and_then(|e| e.get("price")), Some(message));
}

#[tokio::test]
async fn product_price_update_requires_positive_value() {
    let products = service::<Product>();
    let stored = products
        .save(&form([("name", "Collar"), ("type", "Accesorio"), ("price", "100")]))
        .await
        .expect("valid product");

    let rejected = products.update(stored.id(), &form([("price", "-1")])).await;
    let accepted = products
        .update(stored.id(), &form([("price", "250.75")]))
        .await
        .expect("valid price");

    assert!(matches!(rejected, Err(RecordError::Invalid(_))));
    assert_eq!(accepted.record().price().get(), 250.75);
}

#[tokio::test]
async fn vet_specialty_defaults_and_updates() {
    let vets = service::<Vet>();
    let stored = vets
        .save(&form([
            ("name", "Ana Perez"),
            ("phone", "221555232"),
            ("email", "ana@clinica.com"),
        ]))
        .await
        .expect("valid vet");
    assert_eq!(stored.record().specialty(), Specialty::None);

    let updated = vets
        .update(stored.id(), &form([("specialty", "Neurología")]))
        .await
        .expect("known specialty");
    assert_eq!(updated.record().specialty(), Specialty::Neurology);

    let error = vets
        .update(stored.id(), &form([("specialty", "Astrología")]))
        .await
        .expect_err("unknown specialty");
    assert_eq!(
        error.field_errors().and_then(|e| e.get("specialty")),
        Some(messages::SPECIALTY_INVALID)
    );
}

#[tokio::test]
async fn unknown_identifiers_are_not_found() {
    let providers = service::<Provider>();
    let missing = id(42);

    let fetched = providers.fetch(missing).await;
    let updated = providers.update(missing, &form([("name", "Otro")])).await;
    let deleted = providers.delete(missing).await;

    for result in [fetched.map(|_| ()), updated.map(|_| ()), deleted] {
        assert!(matches!(result, Err(RecordError::NotFound { id, .. }) if id == missing));
    }
}
