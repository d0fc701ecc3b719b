use crate::client::{ApiClient, TokenStore};
use crate::error::ApiResult;
use crate::protocol::{ApiRequest, HttpMethod, id_request};
use crate::request::HttpClient;
use crate::{Assignment, AssignmentRequest};

/// GET /assignments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListAssignments;

impl ApiRequest for ListAssignments {
    type Body = ();
    type Response = Vec<Assignment>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/assignments".to_string()
    }
}

/// POST /assignments
impl ApiRequest for AssignmentRequest {
    type Body = Self;
    type Response = Assignment;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/assignments".to_string()
    }

    fn body(&self) -> Option<&Self> {
        Some(self)
    }
}

/// PUT /assignments/{id}
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateAssignment {
    pub id: String,
    pub data: AssignmentRequest,
}

impl ApiRequest for UpdateAssignment {
    type Body = AssignmentRequest;
    type Response = Assignment;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/assignments/{}", self.id)
    }

    fn body(&self) -> Option<&AssignmentRequest> {
        Some(&self.data)
    }
}

id_request!(
    /// DELETE /assignments/{id}
    DeleteAssignment,
    Delete,
    (),
    "/assignments/{}"
);

impl<C: HttpClient, S: TokenStore> ApiClient<C, S> {
    pub async fn list_assignments(&self) -> ApiResult<Vec<Assignment>> {
        self.send(&ListAssignments).await
    }

    pub async fn create_assignment(&self, data: &AssignmentRequest) -> ApiResult<Assignment> {
        self.send(data).await
    }

    pub async fn update_assignment(&self, id: &str, data: AssignmentRequest) -> ApiResult<Assignment> {
        self.send(&UpdateAssignment {
            id: id.to_string(),
            data,
        })
        .await
    }

    pub async fn delete_assignment(&self, id: &str) -> ApiResult<()> {
        self.send(&DeleteAssignment { id: id.to_string() }).await
    }
}
