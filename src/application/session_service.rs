// Session service - Staff sign-in without a credential store
use crate::application::error::{ServiceError, ServiceResult};
use crate::domain::session::Session;

#[derive(Clone, Default)]
pub struct SessionService;

impl SessionService {
    pub fn new() -> Self {
        Self
    }

    pub fn login(&self, username: &str, password: &str) -> ServiceResult<Session> {
        let session = Session::open(username, password).ok_or(ServiceError::InvalidCredentials)?;
        tracing::info!("{} signed in", session.display_name);
        Ok(session)
    }
}
