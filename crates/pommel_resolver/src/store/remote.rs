use std::time::Duration;

use error_snippet::Result;
use pommel_errors::MapDiagnostic;
use reqwest::StatusCode;
use url::Url;

/// Defines the default root of the remote repository.
pub const DEFAULT_REPOSITORY: &str = "https://repo1.maven.org/maven2/";

/// Defines how long a single download is allowed to take, before it's aborted.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Outcome of a single download attempt from a remote repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The file was found and downloaded.
    Found(Vec<u8>),

    /// The repository reported that the file doesn't exist.
    NotFound,

    /// The download failed for any other reason, such as an unexpected
    /// status code or a connection failure.
    Failed(String),
}

/// Transport which downloads files from a remote repository.
pub trait RemoteRepository {
    /// Downloads the file at the given URL.
    ///
    /// Implementations should never fail outright; any failure must be
    /// reported as either [`FetchOutcome::NotFound`] or [`FetchOutcome::Failed`].
    fn get(&self, url: &Url) -> FetchOutcome;
}

/// Defines a [`RemoteRepository`] which downloads files over HTTP(S).
pub struct HttpRepository {
    client: reqwest::blocking::Client,
}

impl HttpRepository {
    /// Creates a new [`HttpRepository`] with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the HTTP client could not be initialized, such as when
    /// the TLS backend fails to load.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Creates a new [`HttpRepository`] with the given timeout.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the HTTP client could not be initialized.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pommel/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_cause("failed to create HTTP client")?;

        Ok(HttpRepository { client })
    }
}

impl RemoteRepository for HttpRepository {
    #[tracing::instrument(level = "DEBUG", skip_all, fields(url = %url))]
    fn get(&self, url: &Url) -> FetchOutcome {
        let response = match self.client.get(url.as_str()).send() {
            Ok(response) => response,
            Err(err) => return FetchOutcome::Failed(err.to_string()),
        };

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return FetchOutcome::NotFound;
        }

        if !status.is_success() {
            return FetchOutcome::Failed(status.to_string());
        }

        match response.bytes() {
            Ok(bytes) => FetchOutcome::Found(bytes.to_vec()),
            Err(err) => FetchOutcome::Failed(err.to_string()),
        }
    }
}
