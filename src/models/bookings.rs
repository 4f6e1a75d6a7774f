use serde::{Deserialize, Serialize};

pub const BOOKING_STATUS_CONFIRMED: &str = "confirmed";

/// One persisted appointment, in the exact shape written to the bookings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    #[serde(rename = "numberOfPeople")]
    pub number_of_people: i64,
    pub details: String,
    pub status: String,
    pub created_at: String,
}

/// A validated booking that has not been given an id yet.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub number_of_people: i64,
    pub details: String,
}

impl NewBooking {
    pub fn into_booking(self, id: i64, created_at: String) -> Booking {
        Booking {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            date: self.date,
            time: self.time,
            number_of_people: self.number_of_people,
            details: self.details,
            status: BOOKING_STATUS_CONFIRMED.to_string(),
            created_at,
        }
    }
}
