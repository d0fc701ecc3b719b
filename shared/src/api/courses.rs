use crate::client::{ApiClient, TokenStore};
use crate::error::ApiResult;
use crate::protocol::{ApiRequest, HttpMethod, id_request};
use crate::request::HttpClient;
use crate::{Course, CourseRequest};

/// GET /courses
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListCourses;

impl ApiRequest for ListCourses {
    type Body = ();
    type Response = Vec<Course>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/courses".to_string()
    }
}

/// POST /courses
impl ApiRequest for CourseRequest {
    type Body = Self;
    type Response = Course;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/courses".to_string()
    }

    fn body(&self) -> Option<&Self> {
        Some(self)
    }
}

/// PUT /courses/{id}
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCourse {
    pub id: String,
    pub data: CourseRequest,
}

impl ApiRequest for UpdateCourse {
    type Body = CourseRequest;
    type Response = Course;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/courses/{}", self.id)
    }

    fn body(&self) -> Option<&CourseRequest> {
        Some(&self.data)
    }
}

id_request!(
    /// DELETE /courses/{id}
    DeleteCourse,
    Delete,
    (),
    "/courses/{}"
);

impl<C: HttpClient, S: TokenStore> ApiClient<C, S> {
    pub async fn list_courses(&self) -> ApiResult<Vec<Course>> {
        self.send(&ListCourses).await
    }

    pub async fn create_course(&self, data: &CourseRequest) -> ApiResult<Course> {
        self.send(data).await
    }

    pub async fn update_course(&self, id: &str, data: CourseRequest) -> ApiResult<Course> {
        self.send(&UpdateCourse {
            id: id.to_string(),
            data,
        })
        .await
    }

    pub async fn delete_course(&self, id: &str) -> ApiResult<()> {
        self.send(&DeleteCourse { id: id.to_string() }).await
    }
}
