use crate::domain::authentication::value_objects::Identity;

#[derive(Debug, Clone)]
pub struct AuthenticateInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct AuthorizeRequestInput {
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct AuthorizeRequestOutput {
    pub identity: Identity,
}
