use serde::Serialize;

#[derive(Debug, Default, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
}

impl LoginResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: "Login successful".to_string(),
        }
    }

    pub fn err() -> Self {
        Self {
            success: false,
            message: "Invalid credentials".to_string(),
        }
    }
}
