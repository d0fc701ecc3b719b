use crate::client::{ApiClient, TokenStore};
use crate::error::ApiResult;
use crate::protocol::{ApiRequest, HttpMethod, id_request};
use crate::request::HttpClient;
use crate::{Term, TermRequest};

/// GET /terms
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListTerms;

impl ApiRequest for ListTerms {
    type Body = ();
    type Response = Vec<Term>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/terms".to_string()
    }
}

/// POST /terms
impl ApiRequest for TermRequest {
    type Body = Self;
    type Response = Term;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/terms".to_string()
    }

    fn body(&self) -> Option<&Self> {
        Some(self)
    }
}

/// PUT /terms/{id}
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTerm {
    pub id: String,
    pub data: TermRequest,
}

impl ApiRequest for UpdateTerm {
    type Body = TermRequest;
    type Response = Term;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/terms/{}", self.id)
    }

    fn body(&self) -> Option<&TermRequest> {
        Some(&self.data)
    }
}

id_request!(
    /// DELETE /terms/{id}
    DeleteTerm,
    Delete,
    (),
    "/terms/{}"
);

impl<C: HttpClient, S: TokenStore> ApiClient<C, S> {
    pub async fn list_terms(&self) -> ApiResult<Vec<Term>> {
        self.send(&ListTerms).await
    }

    pub async fn create_term(&self, data: &TermRequest) -> ApiResult<Term> {
        self.send(data).await
    }

    pub async fn update_term(&self, id: &str, data: TermRequest) -> ApiResult<Term> {
        self.send(&UpdateTerm {
            id: id.to_string(),
            data,
        })
        .await
    }

    pub async fn delete_term(&self, id: &str) -> ApiResult<()> {
        self.send(&DeleteTerm { id: id.to_string() }).await
    }
}
