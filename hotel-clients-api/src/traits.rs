use async_trait::async_trait;

use crate::error::ApiResult;
use crate::types::{ClientPayload, NameQuery, Operation, Reply};

/// Hotel operations API
///
/// One method per endpoint of `/api/v1/imoreno/hotel/operations`. Every
/// call issues exactly one request and never retries.
#[async_trait]
pub trait HotelApi: Send + Sync {
    /// `POST /add`
    async fn create(&self, payload: &ClientPayload) -> ApiResult<Reply>;

    /// `GET /search`, only non-empty criteria are sent
    async fn search(&self, query: &NameQuery) -> ApiResult<Reply>;

    /// `PUT /update`
    async fn update(&self, payload: &ClientPayload) -> ApiResult<Reply>;

    /// `DELETE /delete`, only non-empty criteria are sent
    async fn delete(&self, query: &NameQuery) -> ApiResult<Reply>;

    /// Run any [`Operation`] through the matching endpoint method.
    async fn execute(&self, operation: &Operation) -> ApiResult<Reply> {
        match operation {
            Operation::Create(payload) => self.create(payload).await,
            Operation::Search(query) => self.search(query).await,
            Operation::Update(payload) => self.update(payload).await,
            Operation::Delete(query) => self.delete(query).await,
        }
    }
}
