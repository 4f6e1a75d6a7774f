use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
pub struct CreateBookingRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    /// Left untyped so clients may send `3`, `3.0` or `"3"`.
    #[serde(rename = "numberOfPeople")]
    pub number_of_people: Option<Value>,
    pub details: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}
