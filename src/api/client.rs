use crate::api::types::{Expression, ExpressionDetail, ExpressionList, HealthInfo, NewExpression};
use crate::config::ServerConfig;
use reqwest::{StatusCode, Url};
use thiserror::Error;
use tracing::debug;

const CALCULATE_PATH: &str = "/api/v1/calculate";
const EXPRESSIONS_PATH: &str = "/api/v1/expressions";
const HEALTH_PATH: &str = "/healthz";

/// Failure at the service boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No usable response: connection refused, reset, body unreadable...
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("{status}: {body}")]
    Rejected { status: u16, body: String },

    /// A 2xx response whose body is not the expected JSON.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL cannot carry a path.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

/// Thin HTTP client for the calculator API. Cheap to clone.
///
/// No request timeout is set: a slow response is applied whenever it
/// arrives.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ServerConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("exprtrack/", env!("CARGO_PKG_VERSION")));
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `{base}/api/v1/expressions/{id}/` with `id` as a single encoded segment.
    fn expression_url(&self, id: &str) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.url(EXPRESSIONS_PATH))
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push(id)
            .push("");
        Ok(url)
    }

    /// `POST /api/v1/calculate`. Any 2xx is success and the body is ignored.
    pub async fn create_expression(&self, req: &NewExpression<'_>) -> Result<(), ApiError> {
        debug!(id = req.id, expression = req.expression, "creating expression");
        let resp = self.http.post(self.url(CALCULATE_PATH)).json(req).send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        let body = resp.text().await?;
        Err(ApiError::Rejected {
            status: status.as_u16(),
            body,
        })
    }

    /// `GET /api/v1/expressions`. Returns the service's list verbatim.
    pub async fn list_expressions(&self) -> Result<Vec<Expression>, ApiError> {
        debug!("listing expressions");
        let body = self.get_ok(EXPRESSIONS_PATH).await?;
        let list: ExpressionList = serde_json::from_str(&body)?;
        Ok(list.expressions)
    }

    /// `GET /api/v1/expressions/{id}/`. An unknown id yields `Ok(None)`.
    pub async fn get_expression(&self, id: &str) -> Result<Option<Expression>, ApiError> {
        debug!(id, "looking up expression");
        let url = self.expression_url(id)?;
        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        let detail: ExpressionDetail = serde_json::from_str(&body)?;
        Ok(Some(detail.expression))
    }

    /// `GET /healthz`.
    pub async fn health(&self) -> Result<HealthInfo, ApiError> {
        let body = self.get_ok(HEALTH_PATH).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_ok(&self, path: &str) -> Result<String, ApiError> {
        let resp = self.http.get(self.url(path)).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}
