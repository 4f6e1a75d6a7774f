use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[macro_export]
macro_rules! impl_text_response {
    ( $( ($type:ty, $field:ident) ),+ $(,)? ) => {
        $(
            impl $type {
                pub fn new<S: ToString>(text: S) -> Self {
                    Self {
                        $field: text.to_string(),
                    }
                }
            }
        )+
    };
}

impl_text_response! {
    (ErrorResponse, error),
    (MessageResponse, message),
}
