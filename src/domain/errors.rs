/// Every failure in the client is non-fatal; callers log or surface these.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Inbound payload failed to decode or lacks `price`/`signal`
    MalformedMessage(String),
    /// Outbound strategy message while no open connection exists
    SendFailure(String),
    NetworkError(String),
    RenderingError(String),
    ValidationError(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::MalformedMessage(msg) => write!(f, "Malformed Message: {}", msg),
            AppError::SendFailure(msg) => write!(f, "Send Failure: {}", msg),
            AppError::NetworkError(msg) => write!(f, "Network Error: {}", msg),
            AppError::RenderingError(msg) => write!(f, "Rendering Error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<AppError> for wasm_bindgen::JsValue {
    fn from(error: AppError) -> Self {
        wasm_bindgen::JsValue::from_str(&error.to_string())
    }
}

pub type NetworkResult<T> = Result<T, AppError>;
pub type RenderingResult<T> = Result<T, AppError>;
