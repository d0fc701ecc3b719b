//! 资源 API 模块
//!
//! 每个后端资源一个子模块：定义请求类型（实现 [`ApiRequest`](crate::protocol::ApiRequest)），
//! 并在 [`ApiClient`](crate::ApiClient) 上为每个操作提供一个方法。
//! 这里没有业务逻辑，字段校验在表单层完成。

pub mod assignments;
pub mod auth;
pub mod courses;
pub mod dashboard;
pub mod plans;
pub mod sessions;
pub mod terms;

#[cfg(test)]
mod tests;
