use std::future::Future;

use crate::domain::{
    authentication::entities::{AuthenticateInput, AuthorizeRequestInput, AuthorizeRequestOutput},
    common::entities::app_errors::CoreError,
    jwt::entities::JwtToken,
};

#[cfg_attr(test, mockall::automock)]
pub trait AuthService: Send + Sync {
    /// Password login. Unknown email and wrong password are indistinguishable.
    fn authenticate(
        &self,
        input: AuthenticateInput,
    ) -> impl Future<Output = Result<JwtToken, CoreError>> + Send;

    fn authorize_request(
        &self,
        input: AuthorizeRequestInput,
    ) -> impl Future<Output = Result<AuthorizeRequestOutput, CoreError>> + Send;
}
