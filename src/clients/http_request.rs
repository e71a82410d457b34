//! The request descriptor handed to the transport.

use std::collections::HashMap;
use std::fmt;

/// HTTP methods used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Returns `true` if parameters travel in the JSON body for this method.
    #[must_use]
    pub const fn has_body(&self) -> bool {
        !matches!(self, Self::Get)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully built request, ready to be sent.
///
/// Built per call by [`HttpClient::build_request`](crate::clients::HttpClient::build_request)
/// and discarded afterwards.
///
/// # Example
///
/// ```rust
/// use tperformant_api::clients::{HttpMethod, HttpRequest};
/// use std::collections::HashMap;
///
/// let request = HttpRequest {
///     method: HttpMethod::Get,
///     url: "https://api.2performant.com/affiliate/programs.json?page=2".to_string(),
///     headers: HashMap::new(),
///     body: None,
/// };
/// assert_eq!(request.query(), Some("page=2"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The absolute URL, including any query string.
    pub url: String,
    /// Headers to send.
    pub headers: HashMap<String, String>,
    /// The serialized JSON body, if any.
    pub body: Option<String>,
}

impl HttpRequest {
    /// Returns the query string portion of the URL, if any.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.url
            .split_once('?')
            .map(|(_, query)| query)
            .filter(|query| !query.is_empty())
    }

    /// Returns a header value, matching the name case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_wire_names() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_only_get_has_no_body() {
        assert!(!HttpMethod::Get.has_body());
        assert!(HttpMethod::Post.has_body());
        assert!(HttpMethod::Put.has_body());
        assert!(HttpMethod::Delete.has_body());
    }

    #[test]
    fn test_query_is_none_without_question_mark() {
        let request = HttpRequest {
            method: HttpMethod::Post,
            url: "https://api.2performant.com/users/sign_in.json".to_string(),
            headers: HashMap::new(),
            body: Some("{}".to_string()),
        };
        assert!(request.query().is_none());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: "http://x/y.json".to_string(),
            headers,
            body: None,
        };
        assert_eq!(request.header("content-type"), Some("application/json"));
    }
}
