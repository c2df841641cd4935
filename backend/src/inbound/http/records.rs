//! Record endpoints.
//!
//! ```text
//! GET    /api/v1/{collection}         list
//! POST   /api/v1/{collection}         save, 303 to the collection
//! GET    /api/v1/{collection}/{id}    fetch
//! PATCH  /api/v1/{collection}/{id}    update, 303 to the collection
//! DELETE /api/v1/{collection}/{id}    delete, 303 to the collection
//! GET    /api/v1/vets/specialties     specialty choices
//! ```
//!
//! Requests carry `application/x-www-form-urlencoded` field values;
//! responses are JSON. Handlers are generic over [`Record`], so each
//! collection is mounted by instantiating them for its record type.

use actix_web::http::header;
use actix_web::{HttpResponse, HttpResponseBuilder, Scope, web};
use serde::Serialize;

use crate::domain::{Error, FormFields, Record, RecordId, RecordKind, Specialty, Stored, Vet};

use super::ApiResult;
use super::state::{HttpState, RecordPorts};

/// Path prefix shared by every record collection.
pub const API_PREFIX: &str = "/api/v1";

/// Absolute path of a record collection, used as the redirect target.
pub fn collection_path(kind: RecordKind) -> String {
    format!("{API_PREFIX}/{}", kind.collection())
}

fn parse_id<R: Record>(raw: &str) -> ApiResult<RecordId> {
    raw.parse().map_err(|_| {
        Error::not_found(format!("{} {raw} not found", R::KIND))
            .with_details(serde_json::json!({ "kind": R::KIND, "id": raw }))
    })
}

fn see_other<R: Record>() -> HttpResponseBuilder {
    let mut builder = HttpResponse::SeeOther();
    builder.insert_header((header::LOCATION, collection_path(R::KIND)));
    builder
}

/// Malformed form bodies become domain `invalid_request` errors.
fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("malformed form submission: {err}")).into()
    })
}

/// List every stored record of the collection.
pub async fn list_records<R: Record>(
    ports: web::Data<RecordPorts<R>>,
) -> ApiResult<web::Json<Vec<Stored<R>>>> {
    Ok(web::Json(ports.query.list().await?))
}

/// Fetch one record.
pub async fn get_record<R: Record>(
    ports: web::Data<RecordPorts<R>>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Stored<R>>> {
    let id = parse_id::<R>(&path)?;
    Ok(web::Json(ports.query.fetch(id).await?))
}

/// Validate and store a new record.
pub async fn create_record<R: Record>(
    ports: web::Data<RecordPorts<R>>,
    form: web::Form<FormFields>,
) -> ApiResult<HttpResponse> {
    let stored = ports.command.save(&form).await?;
    Ok(see_other::<R>().json(stored))
}

/// Merge the non-empty submitted fields into a record.
pub async fn update_record<R: Record>(
    ports: web::Data<RecordPorts<R>>,
    path: web::Path<String>,
    form: web::Form<FormFields>,
) -> ApiResult<HttpResponse> {
    let id = parse_id::<R>(&path)?;
    let stored = ports.command.update(id, &form).await?;
    Ok(see_other::<R>().json(stored))
}

pub async fn delete_record<R: Record>(
    ports: web::Data<RecordPorts<R>>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_id::<R>(&path)?;
    ports.command.delete(id).await?;
    Ok(see_other::<R>().finish())
}

/// One entry of the specialty list.
#[derive(Debug, Serialize)]
pub struct SpecialtyChoice {
    pub value: &'static str,
}

/// Specialty labels offered when registering a vet.
pub async fn list_specialties() -> web::Json<Vec<SpecialtyChoice>> {
    web::Json(
        Specialty::ALL
            .into_iter()
            .map(|specialty| SpecialtyChoice {
                value: specialty.as_str(),
            })
            .collect(),
    )
}

fn with_record_routes<R: Record>(scope: Scope, ports: RecordPorts<R>) -> Scope {
    scope
        .app_data(web::Data::new(ports))
        .app_data(form_config())
        .route("", web::get().to(list_records::<R>))
        .route("", web::post().to(create_record::<R>))
        .route("/{id}", web::get().to(get_record::<R>))
        .route("/{id}", web::patch().to(update_record::<R>))
        .route("/{id}", web::delete().to(delete_record::<R>))
}

/// Routes for one record collection.
pub fn record_scope<R: Record>(ports: RecordPorts<R>) -> Scope {
    let scope = web::scope(&format!("/{}", R::KIND.collection()));
    with_record_routes(scope, ports)
}

/// Vet routes; `/specialties` is registered ahead of `/{id}`.
pub fn vet_scope(ports: RecordPorts<Vet>) -> Scope {
    let scope = web::scope(&format!("/{}", Vet::KIND.collection()))
        .route("/specialties", web::get().to(list_specialties));
    with_record_routes(scope, ports)
}

/// The `/api/v1` scope with every record collection mounted.
pub fn api_scope(state: HttpState) -> Scope {
    let HttpState {
        clients,
        vets,
        medicines,
        products,
        providers,
    } = state;
    web::scope(API_PREFIX)
        .service(record_scope(clients))
        .service(vet_scope(vets))
        .service(record_scope(medicines))
        .service(record_scope(products))
        .service(record_scope(providers))
}
