//! Generic CRUD calls shared by every store-backed resource.

use reqwest::Method;

use crate::{
    client::{model::error::ApiError, resource::Resource},
    model::api::DataDto,
};

use super::{
    helper::{parse_empty_response, parse_response, send_request},
    ApiClient,
};

impl ApiClient {
    /// GET /{resource}
    pub async fn get_all<R: Resource>(&self) -> Result<Vec<R>, ApiError> {
        let url = format!("/{}", R::PATH);
        let response = send_request(self.request(Method::GET, &url)).await?;
        parse_response(response).await
    }

    /// GET /{resource}/{id}
    pub async fn get_by_id<R: Resource>(&self, id: i32) -> Result<R, ApiError> {
        let url = format!("/{}/{}", R::PATH, id);
        let response = send_request(self.request(Method::GET, &url)).await?;
        parse_response(response).await
    }

    /// POST /{resource}
    pub async fn create<R: Resource>(&self, fields: &R::Fields) -> Result<R, ApiError> {
        let url = format!("/{}", R::PATH);
        let request = self
            .request(Method::POST, &url)
            .json(&DataDto::new(fields));
        let response = send_request(request).await?;
        parse_response(response).await
    }

    /// PUT /{resource}/{id}
    pub async fn update<R: Resource>(&self, id: i32, fields: &R::Fields) -> Result<R, ApiError> {
        let url = format!("/{}/{}", R::PATH, id);
        let request = self.request(Method::PUT, &url).json(&DataDto::new(fields));
        let response = send_request(request).await?;
        parse_response(response).await
    }

    /// DELETE /{resource}/{id}
    pub async fn delete<R: Resource>(&self, id: i32) -> Result<(), ApiError> {
        let url = format!("/{}/{}", R::PATH, id);
        let response = send_request(self.request(Method::DELETE, &url)).await?;
        parse_empty_response(response).await
    }
}
