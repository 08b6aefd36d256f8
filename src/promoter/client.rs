use reqwest::{
    Client as ReqwestClient, Method, StatusCode,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use url::Url;

use super::types::{
    ConsultantRecord, ConsultantsRequest, ConsultantsResponse, InviteRequest, InviteResponse,
    StatusChangeRequest,
};
use crate::auth::BearerToken;
use crate::error::Error;
use crate::{Result, ToQueryParams as _};

/// Production endpoint used by [`Client::with_token`].
pub const DEFAULT_HOST: &str = "https://www.example.com";

/// Client for the promoter API.
///
/// Every promoter call carries the bearer token given at construction. The client holds no
/// mutable state, so it can be cloned and shared between tasks freely.
///
/// # Example
///
/// ```no_run
/// use promoter_client_sdk::promoter::Client;
/// use promoter_client_sdk::promoter::types::{ConsultantStatus, InviteRequest, StatusChangeRequest};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::with_token("promoter-api-token")?;
///
/// let invite = InviteRequest::builder()
///     .profile_name("Jane")
///     .rate_in_euro_cents(1000)
///     .note("Tarot, evenings only")
///     .build();
/// let url = client.create_consultant_invite(&invite).await?;
/// if url.is_empty() {
///     println!("invite was not created");
/// }
///
/// let change = StatusChangeRequest::builder()
///     .consultant_token("consultant-api-token")
///     .status(ConsultantStatus::Paused)
///     .build();
/// let changed = client.change_consultant_status(&change).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    host: Url,
    client: ReqwestClient,
    token: BearerToken,
}

impl Client {
    /// Creates a new client against a custom host, e.g. a staging server or a mock.
    ///
    /// # Errors
    ///
    /// Returns an error if the host URL is invalid or the HTTP client fails to build.
    pub fn new<T: Into<BearerToken>>(host: &str, token: T) -> Result<Client> {
        let mut headers = HeaderMap::new();

        headers.insert("User-Agent", HeaderValue::from_static("rs_promoter_client"));
        headers.insert("Accept", HeaderValue::from_static("*/*"));
        headers.insert("Connection", HeaderValue::from_static("keep-alive"));
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        let client = ReqwestClient::builder().default_headers(headers).build()?;

        Ok(Self {
            host: Url::parse(host)?,
            client,
            token: token.into(),
        })
    }

    /// Creates a new client against [`DEFAULT_HOST`].
    pub fn with_token<T: Into<BearerToken>>(token: T) -> Result<Client> {
        Self::new(DEFAULT_HOST, token)
    }

    /// Returns the host URL for the client.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    fn auth_headers(token: &BearerToken) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, token.header_value()?);
        Ok(headers)
    }

    /// Lists the consultants promoted by this account, sorted and filtered as requested.
    ///
    /// Records are returned exactly as the API sends them.
    pub async fn list_consultants(
        &self,
        request: &ConsultantsRequest,
    ) -> Result<Vec<ConsultantRecord>> {
        let query = request.query_params();
        let request = self
            .client
            .request(
                Method::GET,
                format!("{}api/promoter/consultants{query}", self.host),
            )
            .build()?;

        let response: ConsultantsResponse = crate::request(
            &self.client,
            request,
            Some(Self::auth_headers(&self.token)?),
        )
        .await?;

        Ok(response.promoted_consultants)
    }

    /// Creates a registration invite for a new consultant.
    ///
    /// Returns the registration URL, or an empty string when the API answered `200` but
    /// reported that the invite was not created. Callers must check for the empty string.
    pub async fn create_consultant_invite(&self, request: &InviteRequest) -> Result<String> {
        let request = self
            .client
            .request(
                Method::POST,
                format!("{}api/promoter/consultants/create", self.host),
            )
            .json(request)
            .build()?;

        let response: InviteResponse = crate::request(
            &self.client,
            request,
            Some(Self::auth_headers(&self.token)?),
        )
        .await?;

        Ok(response.into_registration_url())
    }

    /// Changes a consultant's availability, authenticating as that consultant.
    ///
    /// Only statuses the platform lets consultants pick themselves are accepted; anything else
    /// fails with [`crate::error::Kind::InvalidStatus`] before a request is made.
    ///
    /// Returns `true` for a status code in `201..=299`. A plain `200`, a redirect, or a client
    /// error other than `401` returns `false`. `401` fails with
    /// [`crate::error::Kind::InvalidCredentials`], server errors and transport faults with
    /// [`crate::error::Kind::UnexpectedResponse`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            level = "debug",
            skip(self, request),
            fields(status = request.status.code(), status_code)
        )
    )]
    pub async fn change_consultant_status(&self, request: &StatusChangeRequest) -> Result<bool> {
        request.validate()?;

        let path = format!("api/consultant/status/change/{}", request.status.code());
        let http_request = self
            .client
            .request(Method::GET, format!("{}{path}", self.host))
            .header(AUTHORIZATION, request.consultant_token.header_value()?)
            .build()?;
        let path = http_request.url().path().to_owned();

        let response = self.client.execute(http_request).await?;
        let status_code = response.status();

        #[cfg(feature = "tracing")]
        tracing::Span::current().record("status_code", status_code.as_u16());

        // A plain 200 does not count as applied
        if matches!(status_code.as_u16(), 201..=299) {
            return Ok(true);
        }

        if status_code == StatusCode::UNAUTHORIZED || status_code.is_server_error() {
            let message = response.text().await.unwrap_or_default();

            #[cfg(feature = "tracing")]
            tracing::warn!(
                status = %status_code,
                path = %path,
                message = %message,
                "status change failed"
            );

            return Err(Error::status(status_code, Method::GET, path, message));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(status = %status_code, "status change not applied");

        Ok(false)
    }
}
