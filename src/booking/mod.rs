mod requests;
mod utils;

use crate::{
    database::{BookingStore, StoreError},
    error::ApiError,
    protocol::MessageResponse,
};
use actix_web::{delete, get, post, web, HttpResponse};

use self::{requests::*, utils::SearchQuery};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(list_bookings)
        .service(create_booking)
        .service(search_bookings)
        .service(delete_booking);
}

#[get("/bookings")]
async fn list_bookings(store: web::Data<BookingStore>) -> Result<HttpResponse, ApiError> {
    let bookings = web::block(move || Ok::<_, ApiError>(store.load())).await?;
    Ok(HttpResponse::Ok().json(bookings))
}

#[post("/bookings")]
async fn create_booking(
    store: web::Data<BookingStore>,
    info: web::Json<CreateBookingRequest>,
) -> Result<HttpResponse, ApiError> {
    let new_booking = info.into_inner().validate()?;

    let booking = web::block(move || {
        store
            .append(new_booking)
            .map_err(|source| ApiError::Persistence {
                message: "Failed to save booking",
                source,
            })
    })
    .await?;

    Ok(HttpResponse::Created().json(booking))
}

#[delete("/bookings/{id}")]
async fn delete_booking(
    store: web::Data<BookingStore>,
    id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();

    web::block(move || {
        store.remove(id).map_err(|err| match err {
            StoreError::NotFound(_) => ApiError::NotFound("Booking not found"),
            source => ApiError::Persistence {
                message: "Failed to delete booking",
                source,
            },
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Booking deleted successfully")))
}

#[post("/bookings/search")]
async fn search_bookings(
    store: web::Data<BookingStore>,
    info: web::Json<SearchRequest>,
) -> Result<HttpResponse, ApiError> {
    let query = SearchQuery::from_request(info.into_inner())?;

    let bookings = web::block(move || Ok::<_, ApiError>(store.load())).await?;

    Ok(HttpResponse::Ok().json(query.filter(bookings)))
}
