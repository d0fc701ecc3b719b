use crate::client::{ApiClient, TokenStore};
use crate::error::ApiResult;
use crate::protocol::{ApiRequest, HttpMethod, id_request};
use crate::request::HttpClient;
use crate::{StudyPlan, StudyPlanAiRequest, StudyPlanManualRequest};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListPlans;

impl ApiRequest for ListPlans {
    type Body = ();
    type Response = Vec<StudyPlan>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/plans/".to_string()
    }
}

/// 手动创建：标题、描述与主题由用户填写
impl ApiRequest for StudyPlanManualRequest {
    type Body = Self;
    type Response = StudyPlan;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/plans/".to_string()
    }

    fn body(&self) -> Option<&Self> {
        Some(self)
    }
}

/// AI 生成：只提交自然语言提示与课程，计划内容由后端生成
impl ApiRequest for StudyPlanAiRequest {
    type Body = Self;
    type Response = StudyPlan;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/plans/ai-generate/".to_string()
    }

    fn body(&self) -> Option<&Self> {
        Some(self)
    }
}

id_request!(DeletePlan, Delete, (), "/plans/{}/");

impl<C: HttpClient, S: TokenStore> ApiClient<C, S> {
    pub async fn list_plans(&self) -> ApiResult<Vec<StudyPlan>> {
        self.send(&ListPlans).await
    }

    pub async fn create_plan(&self, req: &StudyPlanManualRequest) -> ApiResult<StudyPlan> {
        self.send(req).await
    }

    pub async fn generate_plan(&self, req: &StudyPlanAiRequest) -> ApiResult<StudyPlan> {
        self.send(req).await
    }

    pub async fn delete_plan(&self, id: &str) -> ApiResult<()> {
        self.send(&DeletePlan { id: id.to_string() }).await
    }
}
