//! Plain-data HTTP request/response types.
//!
//! # Design
//! The client core never opens a socket. It describes the exchange it wants
//! as an `HttpRequest` value and interprets whatever `HttpResponse` value the
//! host hands back. Keeping the transport as data makes every operation a
//! pure function and lets the host pick its own HTTP stack.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// A request described as plain data, produced by `TaskClient::build_*`.
///
/// The host executes it against the network and feeds the corresponding
/// `HttpResponse` back into the matching `parse_*` method.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// A response described as plain data, consumed by `TaskClient::parse_*`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
