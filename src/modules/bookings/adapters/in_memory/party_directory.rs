// In memory implementation of the PartyDirectory port.
//
// Purpose
// - Stand in for the external identity provider's directory in tests and
//   local development; seeded programmatically.

use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::bookings::core::booking::{StudentRef, SubjectRef};
use crate::modules::bookings::core::ports::{DirectoryError, PartyDirectory, TutorProfile};

#[derive(Default)]
pub struct InMemoryPartyDirectory {
    students: RwLock<HashMap<Uuid, StudentRef>>,
    tutors: RwLock<HashMap<Uuid, TutorProfile>>,
    subjects: RwLock<HashMap<Uuid, SubjectRef>>,
}

impl InMemoryPartyDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_student(&self, student: StudentRef) {
        self.students.write().await.insert(student.id, student);
    }

    pub async fn add_tutor(&self, profile: TutorProfile) {
        self.tutors.write().await.insert(profile.tutor.id, profile);
    }

    pub async fn add_subject(&self, subject: SubjectRef) {
        self.subjects.write().await.insert(subject.id, subject);
    }
}

#[async_trait::async_trait]
impl PartyDirectory for InMemoryPartyDirectory {
    async fn student(&self, id: Uuid) -> Result<Option<StudentRef>, DirectoryError> {
        Ok(self.students.read().await.get(&id).cloned())
    }

    async fn tutor(&self, id: Uuid) -> Result<Option<TutorProfile>, DirectoryError> {
        Ok(self.tutors.read().await.get(&id).cloned())
    }

    async fn subject(&self, id: Uuid) -> Result<Option<SubjectRef>, DirectoryError> {
        Ok(self.subjects.read().await.get(&id).cloned())
    }
}
