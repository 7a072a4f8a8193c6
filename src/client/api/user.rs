use reqwest::Method;

use crate::{
    client::model::error::ApiError,
    model::{
        api::DataDto,
        user::{AuthenticateDto, AuthenticatedUserDto, UserDto, UserFieldsDto},
    },
};

use super::{
    helper::{parse_empty_response, parse_response, send_request},
    ApiClient,
};

impl ApiClient {
    /// POST /users/register
    pub async fn register(&self, fields: &UserFieldsDto) -> Result<(), ApiError> {
        let request = self
            .request(Method::POST, "/users/register")
            .json(&DataDto::new(fields));
        let response = send_request(request).await?;
        parse_empty_response(response).await
    }

    /// POST /users/authenticate
    ///
    /// The returned token is not stored on the client; callers decide whether to keep it via
    /// [`ApiClient::set_token`].
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthenticatedUserDto, ApiError> {
        let payload = AuthenticateDto {
            username: username.to_string(),
            password: password.to_string(),
        };
        let request = self
            .request(Method::POST, "/users/authenticate")
            .json(&payload);
        let response = send_request(request).await?;
        parse_response(response).await
    }

    /// GET /users/current
    pub async fn get_current_user(&self) -> Result<UserDto, ApiError> {
        let response = send_request(self.request(Method::GET, "/users/current")).await?;
        parse_response(response).await
    }
}
