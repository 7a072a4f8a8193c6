use crate::{
    client::model::error::ApiError,
    model::user::{AuthenticatedUserDto, UserDto},
};

/// Session of the logged-in user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserDto>,
    pub token: Option<String>,
    pub loading: bool,
    pub error: Option<ApiError>,
    /// Set once a registration went through, until the next login or logout.
    pub registered: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    LoginRequest,
    LoginSuccess(AuthenticatedUserDto),
    LoginFailure(ApiError),
    RegisterRequest,
    RegisterSuccess,
    RegisterFailure(ApiError),
    Logout,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn reduce(self, action: AuthAction) -> Self {
        match action {
            AuthAction::LoginRequest | AuthAction::RegisterRequest => Self {
                loading: true,
                ..self
            },
            AuthAction::LoginSuccess(authenticated) => Self {
                user: Some(authenticated.user),
                token: Some(authenticated.token),
                loading: false,
                error: None,
                registered: false,
            },
            AuthAction::RegisterSuccess => Self {
                loading: false,
                error: None,
                registered: true,
                ..self
            },
            AuthAction::LoginFailure(error) | AuthAction::RegisterFailure(error) => Self {
                loading: false,
                error: Some(error),
                ..self
            },
            AuthAction::Logout => Self::default(),
        }
    }
}
