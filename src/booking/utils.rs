use serde_json::Value;

use super::requests::{CreateBookingRequest, SearchRequest};
use crate::{
    error::ApiError,
    models::bookings::{Booking, NewBooking},
};

/// Fields a new booking must carry, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "name",
    "email",
    "phone",
    "date",
    "time",
    "numberOfPeople",
    "details",
];

impl CreateBookingRequest {
    fn has_field(&self, field: &str) -> bool {
        match field {
            "name" => self.name.as_deref().map_or(false, |name| !name.is_empty()),
            "email" => self.email.is_some(),
            "phone" => self.phone.is_some(),
            "date" => self.date.is_some(),
            "time" => self.time.is_some(),
            "numberOfPeople" => self.number_of_people.is_some(),
            "details" => self.details.is_some(),
            _ => false,
        }
    }

    pub fn validate(self) -> Result<NewBooking, ApiError> {
        if let Some(field) = REQUIRED_FIELDS.iter().find(|f| !self.has_field(f)) {
            return Err(ApiError::missing_field(field));
        }

        let number_of_people = self
            .number_of_people
            .as_ref()
            .and_then(coerce_people)
            .ok_or_else(|| ApiError::invalid_field("numberOfPeople"))?;

        Ok(NewBooking {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
            time: self.time.unwrap_or_default(),
            number_of_people,
            details: self.details.unwrap_or_default(),
        })
    }
}

/// Largest party size a booking may carry.
pub const MAX_PEOPLE: i64 = i32::MAX as i64;

/// Integers pass through, floats truncate toward zero, strings must hold an
/// integer. The result must lie within `-MAX_PEOPLE..=MAX_PEOPLE`.
fn coerce_people(value: &Value) -> Option<i64> {
    let people = match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }?;
    if (-MAX_PEOPLE..=MAX_PEOPLE).contains(&people) {
        Some(people)
    } else {
        None
    }
}

#[derive(Debug)]
pub struct SearchQuery {
    email: Option<String>,
    phone: Option<String>,
}

impl SearchQuery {
    pub fn from_request(request: SearchRequest) -> Result<Self, ApiError> {
        let non_empty = |s: String| {
            let s = s.trim().to_string();
            if s.is_empty() {
                None
            } else {
                Some(s)
            }
        };
        let email = non_empty(request.email);
        let phone = non_empty(request.phone);

        if email.is_none() && phone.is_none() {
            return Err(ApiError::Validation("Email or phone required".to_string()));
        }
        Ok(Self { email, phone })
    }

    pub fn matches(&self, booking: &Booking) -> bool {
        let email_hit = self.email.as_deref().map_or(false, |e| booking.email == e);
        let phone_hit = self
            .phone
            .as_deref()
            .map_or(false, |p| booking.phone.contains(p));
        email_hit || phone_hit
    }

    pub fn filter(&self, bookings: Vec<Booking>) -> Vec<Booking> {
        bookings.into_iter().filter(|b| self.matches(b)).collect()
    }
}
