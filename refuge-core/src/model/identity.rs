use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct UserIdentity {
    pub email: String,
}

impl UserIdentity {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// answers "who is signed in", backed by whatever identity provider the
/// host application uses.
pub trait IdentityProvider: Send + Sync {
    fn current_user(&self) -> Option<UserIdentity>;
}

/// identity fixed at construction time.
#[derive(Clone, Debug, Default)]
pub struct StaticIdentity {
    user: Option<UserIdentity>,
}

impl StaticIdentity {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn signed_in(email: impl Into<String>) -> Self {
        Self {
            user: Some(UserIdentity::new(email)),
        }
    }
}

impl From<Option<String>> for StaticIdentity {
    fn from(email: Option<String>) -> Self {
        Self {
            user: email.map(UserIdentity::new),
        }
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_user(&self) -> Option<UserIdentity> {
        self.user.clone()
    }
}
