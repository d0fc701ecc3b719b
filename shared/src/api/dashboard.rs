use crate::client::{ApiClient, TokenStore};
use crate::error::ApiResult;
use crate::protocol::{ApiRequest, HttpMethod};
use crate::request::HttpClient;
use crate::{Streaks, StudyTime};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudyTimeByCourse;

impl ApiRequest for StudyTimeByCourse {
    type Body = ();
    type Response = Vec<StudyTime>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/dashboard/study_time_by_course/".to_string()
    }
}

/// 最近 7 天每天是否有学习记录
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchStreaks;

impl ApiRequest for FetchStreaks {
    type Body = ();
    type Response = Streaks;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/dashboard/streaks/".to_string()
    }
}

impl<C: HttpClient, S: TokenStore> ApiClient<C, S> {
    pub async fn study_time_by_course(&self) -> ApiResult<Vec<StudyTime>> {
        self.send(&StudyTimeByCourse).await
    }

    pub async fn streaks(&self) -> ApiResult<Streaks> {
        self.send(&FetchStreaks).await
    }
}
