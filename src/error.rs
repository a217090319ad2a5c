use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{json, Value};
use std::fmt::{self, Display};
use tokio::task::JoinError;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self.code {
            1..=99 => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    pub fn is_internal(&self) -> bool {
        self.status().is_server_error()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<JoinError> for Error {
    fn from(err: JoinError) -> Self {
        worker_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        if self.is_internal() {
            tracing::error!(code = self.code, "{}", self.message);
        } else {
            tracing::debug!(code = self.code, "rejected request: {}", self.message);
        }

        let body = Json(json!({
            "error": self.message,
        }));

        (self.status(), body).into_response()
    }
}

pub fn unexpected_error<T: Display>(err: T) -> Error {
    Error {
        code: 1,
        message: err.to_string(),
    }
}

pub fn worker_error(err: JoinError) -> Error {
    Error {
        code: 2,
        message: err.to_string(),
    }
}

pub fn speed_conversion_error(value: &Value) -> Error {
    Error {
        code: 3,
        message: format!("Speed could not be converted to a number: {}", value),
    }
}

pub fn invalid_json_error() -> Error {
    Error {
        code: 100,
        message: "Invalid JSON".into(),
    }
}

pub fn missing_field_error(name: &str) -> Error {
    Error {
        code: 101,
        message: format!("Missing required field: {}", name),
    }
}

pub fn too_few_points_error() -> Error {
    Error {
        code: 102,
        message: "Coordinates must be an array with at least 2 points".into(),
    }
}

pub fn coordinate_shape_error(index: usize) -> Error {
    Error {
        code: 103,
        message: format!("Coordinate {} must be [lat, lon]", index),
    }
}

pub fn coordinate_value_error(index: usize) -> Error {
    Error {
        code: 104,
        message: format!("Coordinate {} must contain numeric values", index),
    }
}

pub fn non_positive_speed_error() -> Error {
    Error {
        code: 105,
        message: "Speed must be greater than 0".into(),
    }
}
