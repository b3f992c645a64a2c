//! Messages for errors raised by the HTTP layer itself rather than a domain.

pub const ROUTE_NOT_FOUND: &str = "The requested resource was not found";
pub const INVALID_JSON: &str = "Request body is not valid JSON";
pub const INVALID_BODY: &str = "Request body does not match the expected fields";
