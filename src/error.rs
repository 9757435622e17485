use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid ARXIV_BASE_URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError
    },

    #[error("failed to read env file '{path}': {source}")]
    EnvFile {
        path: String,
        #[source]
        source: dotenvy::Error
    },

    #[error("unknown OUTPUT_FORMAT '{0}', expected 'jsonl' or 'markdown'")]
    UnknownFormat(String)
}

#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("cannot build listing url for category '{category}': {source}")]
    ListingUrl {
        category: String,
        #[source]
        source: url::ParseError
    }
}
