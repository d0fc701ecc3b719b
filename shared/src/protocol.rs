use serde::{Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
///
/// Path parameters (ids) live on the implementing struct, so the path is built per value
/// instead of being a constant.
pub trait ApiRequest {
    /// The JSON body sent with the request. Use `()` for body-less requests.
    type Body: Serialize;
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;

    /// The URL path, relative to the API base URL.
    fn path(&self) -> String;

    /// The request body, if any.
    fn body(&self) -> Option<&Self::Body> {
        None
    }
}

/// 为只有 id 参数的请求生成结构体与 `ApiRequest` 实现
///
/// ```ignore
/// id_request!(DeleteTerm, Delete, (), "/terms/{}");
/// ```
macro_rules! id_request {
    ($(#[$meta:meta])* $name:ident, $method:ident, $resp:ty, $fmt:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            pub id: String,
        }

        impl $crate::protocol::ApiRequest for $name {
            type Body = ();
            type Response = $resp;
            const METHOD: $crate::protocol::HttpMethod = $crate::protocol::HttpMethod::$method;

            fn path(&self) -> String {
                format!($fmt, self.id)
            }
        }
    };
}

pub(crate) use id_request;
