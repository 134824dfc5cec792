use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("unknown locale `{0}`")]
    UnknownLocale(String),

    #[error("invalid tier id {0} (expected 1..=5)")]
    InvalidTier(i64),

    #[error("unknown tier name `{0}`")]
    UnknownTierName(String),

    #[error("invalid dictionary for locale `{locale}`")]
    Dictionary {
        locale: String,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T, E = LexiconError> = std::result::Result<T, E>;
