use crate::model::Id;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct UserMarker;

/// A stored account. The password is kept and returned as plain text.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Deserialize, Serialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Id<UserMarker>,
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl User {
    /// Byte-for-byte comparison against the stored password.
    #[must_use]
    pub fn password_matches(&self, password: &str) -> bool {
        self.password == password
    }
}
