//! Shared fixtures for endpoint tests.

use actix_web::web;
use tempfile::TempDir;

use crate::{config::AdminCredentials, database::BookingStore};

pub const ADMIN_USERNAME: &str = "desk";
pub const ADMIN_PASSWORD: &str = "open-sesame";

pub fn store() -> (TempDir, web::Data<BookingStore>) {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = BookingStore::new(dir.path().join("bookings.json"));
    (dir, web::Data::new(store))
}

pub fn admin() -> AdminCredentials {
    AdminCredentials::new(ADMIN_USERNAME, ADMIN_PASSWORD)
}

/// Builds the API service around the given store, with the test admin pair.
#[macro_export]
macro_rules! test_app {
    ($store:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data($store.clone())
                .app_data(actix_web::web::Data::new($crate::testing::admin()))
                .configure($crate::configure_api),
        )
        .await
    };
}
