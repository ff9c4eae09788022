use actix_web::{HttpResponse, Responder, delete, get, patch, post, web};
use validator::Validate;

use crate::dto::contact::{
    ContactsQuery, CreateContactRequest, UpdateContactRequest, UpdateFavoriteRequest,
};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::contact as contact_service;

#[post("/v1/contacts")]
pub async fn create_contact(
    payload: web::Json<CreateContactRequest>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(e) = payload.validate() {
        return HttpResponse::BadRequest().json(e);
    }

    match contact_service::create_contact(repo.get_ref(), &payload.into_inner().into()) {
        Ok(contact) => HttpResponse::Created().json(contact),
        Err(e) => error_response(e),
    }
}

#[get("/v1/contacts")]
pub async fn list_contacts(
    params: web::Query<ContactsQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match contact_service::list_contacts(repo.get_ref(), params.into_inner().into()) {
        Ok(contacts) => HttpResponse::Ok().json(contacts),
        Err(e) => error_response(e),
    }
}

#[get("/v1/contacts/{id}")]
pub async fn get_contact(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match contact_service::get_contact_by_id(repo.get_ref(), &path.into_inner()) {
        Ok(contact) => HttpResponse::Ok().json(contact),
        Err(e) => error_response(e),
    }
}

#[patch("/v1/contacts/{id}")]
pub async fn update_contact(
    path: web::Path<String>,
    payload: web::Json<UpdateContactRequest>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(e) = payload.validate() {
        return HttpResponse::BadRequest().json(e);
    }

    match contact_service::update_contact(
        repo.get_ref(),
        &path.into_inner(),
        &payload.into_inner().into(),
    ) {
        Ok(contact) => HttpResponse::Ok().json(contact),
        Err(e) => error_response(e),
    }
}

#[patch("/v1/contacts/{id}/favorite")]
pub async fn update_favorite(
    path: web::Path<String>,
    payload: web::Json<UpdateFavoriteRequest>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match contact_service::update_favorite(repo.get_ref(), &path.into_inner(), payload.favorite) {
        Ok(contact) => HttpResponse::Ok().json(contact),
        Err(e) => error_response(e),
    }
}

#[delete("/v1/contacts/{id}")]
pub async fn remove_contact(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match contact_service::remove_contact(repo.get_ref(), &path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(e),
    }
}
