use crate::ReadError;

#[allow(async_fn_in_trait)]
pub trait ProfileService {
    async fn get_profile(&self) -> Result<Profile, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait ProfileRepository {
    async fn read_profile(&self) -> Result<Profile, ReadError>;
}

/// Profile of the authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub username: String,
    pub email: String,
    pub email_verified: bool,
    pub is_trustworthy: bool,
}

impl Profile {
    /// Only trustworthy users with a verified email address may contribute exercises.
    #[must_use]
    pub fn can_contribute_exercises(&self) -> bool {
        self.email_verified && self.is_trustworthy
    }
}
