mod responses;

use crate::{database::BookingStore, error::ApiError, models::bookings::Booking, utils};
use actix_web::{get, web, HttpResponse, Responder};

use self::responses::*;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(stats).service(health);
}

#[get("/stats")]
async fn stats(store: web::Data<BookingStore>) -> Result<HttpResponse, ApiError> {
    let bookings = web::block(move || Ok::<_, ApiError>(store.load())).await?;
    Ok(HttpResponse::Ok().json(stats_impl(&bookings, &utils::today_str())))
}

fn stats_impl(bookings: &[Booking], today: &str) -> StatsResponse {
    StatsResponse {
        total_bookings: bookings.len(),
        today_bookings: bookings.iter().filter(|b| b.date == today).count(),
        total_people: bookings.iter().map(|b| i128::from(b.number_of_people)).sum(),
    }
}

/// Liveness only. The store flag is whatever the last load observed; no I/O
/// happens here.
#[get("/health")]
async fn health(store: web::Data<BookingStore>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        timestamp: utils::now_time_str(),
        store_readable: store.is_readable(),
    })
}
