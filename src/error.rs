use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Sport {0} not found in sports table")]
    UnknownSport(String),

    #[error("no element matches selector {selector}")]
    ElementNotFound { selector: String },

    #[error("element matching {selector} has no usable `{attribute}` attribute")]
    MissingAttribute { attribute: String, selector: String },

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("browser: {0}")]
    Browser(String),

    #[error("export failed: {0}")]
    Export(String),

    #[error("config: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ScrapeError {
    pub fn not_found(selector: &str) -> Self {
        ScrapeError::ElementNotFound {
            selector: selector.to_string(),
        }
    }

    pub fn missing_attribute(attribute: &str, selector: &str) -> Self {
        ScrapeError::MissingAttribute {
            attribute: attribute.to_string(),
            selector: selector.to_string(),
        }
    }
}

/* Conversions so `?` works smoothly */
impl From<url::ParseError> for ScrapeError {
    fn from(e: url::ParseError) -> Self {
        ScrapeError::InvalidUrl(e.to_string())
    }
}
impl From<chromiumoxide::error::CdpError> for ScrapeError {
    fn from(e: chromiumoxide::error::CdpError) -> Self {
        ScrapeError::Browser(e.to_string())
    }
}
impl From<rust_xlsxwriter::XlsxError> for ScrapeError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        ScrapeError::Export(e.to_string())
    }
}
