//! Unified error vocabulary
//!
//! - [`ErrorCode`]: numeric error codes shared by server and clients
//! - [`ErrorBody`]: the JSON body every failed request carries
//!
//! # Error Code Ranges
//!
//! - 0xxx: General (request) errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{ErrorBody, ErrorCode};
//!
//! let body = ErrorBody::new(ErrorCode::NotFound, "Order not found");
//! assert_eq!(body.code, 3);
//! ```

mod codes;
mod http;

pub use codes::{ErrorCode, InvalidErrorCode};

use serde::{Deserialize, Serialize};

/// Error response body
///
/// ```json
/// { "code": 3, "message": "Order 5f0c... not found" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Numeric [`ErrorCode`] value
    pub code: u16,
    /// Human-readable message
    pub message: String,
}

impl ErrorBody {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            message: message.into(),
        }
    }

    /// Body carrying the default message of the code
    pub fn from_code(code: ErrorCode) -> Self {
        Self::new(code, code.message())
    }

    /// Parsed error code, if the numeric value is known
    pub fn error_code(&self) -> Option<ErrorCode> {
        ErrorCode::try_from(self.code).ok()
    }
}
