use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Http(reqwest::Error),
    Json(serde_json::Error),
    Url(url::ParseError),
    NotFound(String),
    Validation(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Http(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Url(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::Http(e) => {
                write!(f, "Request to remote store failed: {}", e)
            }
            AppError::Json(e) => {
                write!(f, "Malformed JSON in request or response: {}", e)
            }
            AppError::Url(e) => {
                write!(f, "Invalid URL: {}", e)
            }
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
        }
    }
}
