use super::HttpError;

/// blocking HTTP operations used by the routing and data backend clients.
/// implementations return the raw response body of a successful (2xx) request.
pub trait HttpClient: Send + Sync {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<Vec<u8>, HttpError>;

    fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &serde_json::Value,
    ) -> Result<Vec<u8>, HttpError>;
}

/// [`HttpClient`] backed by `reqwest::blocking`. no request timeout is set.
#[derive(Clone, Debug)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    pub fn new() -> Result<Self, HttpError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("refuge/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| HttpError::BuildError(e.to_string()))?;
        Ok(Self { client })
    }

    fn execute(
        &self,
        url: &str,
        request: reqwest::blocking::RequestBuilder,
        headers: &[(&str, &str)],
    ) -> Result<Vec<u8>, HttpError> {
        let request = headers
            .iter()
            .fold(request, |req, (name, value)| req.header(*name, *value));
        let response = request.send().map_err(|e| HttpError::TransportError {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        let status = response.status();
        let body = response.bytes().map_err(|e| HttpError::BodyError {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        if !status.is_success() {
            return Err(HttpError::StatusError {
                url: url.to_string(),
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }
        Ok(body.to_vec())
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<Vec<u8>, HttpError> {
        log::debug!("GET {url}");
        self.execute(url, self.client.get(url), headers)
    }

    fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &serde_json::Value,
    ) -> Result<Vec<u8>, HttpError> {
        log::debug!("POST {url}");
        self.execute(url, self.client.post(url).json(body), headers)
    }
}
