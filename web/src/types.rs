use crate::errors::Error;

#[derive(Clone, Debug, Default)]
pub struct LoginInfo {
    pub username: String,
    pub password: String,
}

impl LoginInfo {
    /// There's no authentication backend, so the password is collected and
    /// otherwise ignored.
    pub fn credentials(&self) -> Result<UserInfo, Error> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err(Error::MissingUsername);
        }

        Ok(UserInfo {
            username: username.to_owned(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct UserInfo {
    pub username: String,
}
