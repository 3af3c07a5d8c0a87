// The identity of whoever requests a transition, as supplied by the
// external session/identity provider. Roles are trusted as-is.

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Student,
    Tutor,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: Uuid,
    pub role: Role,
}

/// Who is asking for a transition. The completion sweep runs without an
/// actor and is modelled as `System`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Initiator {
    System,
    User(Actor),
}

impl Initiator {
    pub fn actor(&self) -> Option<&Actor> {
        match self {
            Self::System => None,
            Self::User(actor) => Some(actor),
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::User(actor) if actor.role == Role::Admin)
    }
}
