mod requests;
mod responses;

use crate::config::AdminCredentials;
use actix_web::{post, web, HttpResponse, Responder};
use log::warn;

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(login);
}

/// Checks the submitted pair against the configured admin account. Nothing
/// is issued on success; the client only learns whether the pair matched.
#[post("/admin/login")]
async fn login(
    admin: web::Data<AdminCredentials>,
    info: web::Json<LoginRequest>,
) -> impl Responder {
    let info = info.into_inner();
    if admin.matches(info.username.trim(), info.password.trim()) {
        HttpResponse::Ok().json(LoginResponse::ok())
    } else {
        warn!("Rejected admin login for {:?}", info.username.trim());
        HttpResponse::Unauthorized().json(LoginResponse::err())
    }
}
