//! Thin wrapper around `reqwest` for talking to a misaki server.
//!
//! Every call is a single attempt: there is no timeout and no retry. Any
//! response outside the 2xx range is turned into [`Error::Http`] without
//! reading its body.

use log::debug;
use reqwest::multipart::Form;
use reqwest::{Client, Response, Url};

use crate::error::{Error, Result};

/// HTTP client bound to the base URL of one server.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
}

impl HttpClient {
    /// Creates a client for the server at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is empty or is not an absolute URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyServerUrl);
        }

        let base_url = Url::parse(trimmed).map_err(|e| Error::InvalidUrl {
            url: trimmed.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves `path` against the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the joined URL is invalid.
    pub fn url_for(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(|e| Error::InvalidUrl {
            url: format!("{}{}", self.base_url, path),
            reason: e.to_string(),
        })
    }

    /// Issues a single request to `path`.
    ///
    /// With `form` present the request is a POST whose body carries every
    /// pair as a multipart text field, otherwise it is a GET without body.
    /// A successful response is returned untouched for the caller to decode.
    ///
    /// # Errors
    ///
    /// - [`Error::Http`] when the server answers with a non-success status
    /// - [`Error::Transport`] when the server cannot be reached
    pub async fn request(&self, path: &str, form: Option<&[(&str, &str)]>) -> Result<Response> {
        let url = self.url_for(path)?;

        let request = match form {
            Some(fields) => {
                let form = fields.iter().fold(Form::new(), |form, (name, value)| {
                    form.text((*name).to_string(), (*value).to_string())
                });
                debug!("POST {url} with {} form field(s)", fields.len());
                self.client.post(url).multipart(form)
            }
            None => {
                debug!("GET {url}");
                self.client.get(url)
            }
        };

        let response = request.send().await.map_err(Error::Transport)?;

        let status = response.status();
        if !status.is_success() {
            debug!("{path} answered {status}");
            return Err(Error::http_error(status));
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_url() {
        assert!(matches!(HttpClient::new("  "), Err(Error::EmptyServerUrl)));
    }

    #[test]
    fn test_new_rejects_relative_url() {
        let result = HttpClient::new("localhost-without-scheme");
        assert!(matches!(result, Err(Error::InvalidUrl { .. })));
    }

    #[test]
    fn test_url_for_absolute_path() {
        let client = HttpClient::new("http://example.com:8080/").unwrap();
        assert_eq!(
            client.url_for("/commands").unwrap().as_str(),
            "http://example.com:8080/commands"
        );
    }

    #[test]
    fn test_url_for_replaces_base_path() {
        // Absolute paths resolve from the host root like the page's fetch calls do
        let client = HttpClient::new("http://example.com/misaki/").unwrap();
        assert_eq!(
            client.url_for("/request").unwrap().as_str(),
            "http://example.com/request"
        );
    }
}
