use rust_decimal::Decimal;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid format template {template:?}: {reason}")]
    InvalidFormat { template: String, reason: String },

    #[error("cannot read {text:?} as an amount")]
    Parse { text: String },

    #[error("{0} does not fit in the cents range")]
    OutOfRange(Decimal),

    #[error("unknown locale {0:?}")]
    UnknownLocale(String),

    #[error("invalid settings: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub(crate) fn invalid_format(template: &str, reason: impl Into<String>) -> Self {
        Error::InvalidFormat {
            template: template.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn parse(text: &str) -> Self {
        Error::Parse {
            text: text.to_string(),
        }
    }
}
