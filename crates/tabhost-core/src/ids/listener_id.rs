use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Handle returned by listener registration, used to unsubscribe later.
///
/// Two registrations of the same callback get distinct ids; removal of an
/// id that was never issued (or already removed) is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(String);

impl ListenerId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ListenerId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ListenerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
