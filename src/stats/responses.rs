use serde::Serialize;

#[derive(Debug, Default, PartialEq, Serialize)]
pub struct StatsResponse {
    pub total_bookings: usize,
    pub today_bookings: usize,
    pub total_people: i128,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    /// False when the bookings file exists but could not be read on the last
    /// attempt; the API is then serving an empty list in its place.
    pub store_readable: bool,
}
