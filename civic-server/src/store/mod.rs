//! Complaint Store - in-memory complaint list and organization credentials
//!
//! The store is the only owner of complaint state. Writers (`submit`,
//! `update_status`) hold the write lock for the whole read-modify-write so
//! ids stay unique and replacements land at the original position.

pub mod priority;
pub mod routing;
pub mod seed;

use std::sync::Arc;

use parking_lot::RwLock;
use shared::models::status;
use shared::{Complaint, ComplaintSubmission, OrgCredential};
use uuid::Uuid;

use crate::error::{AppResult, ServerError};
pub use priority::{FixedPriority, PriorityScorer, RandomPriority, SequencePriority};

/// Length of generated complaint ids
const ID_LEN: usize = 8;

/// Built-in organization logins
pub fn default_credentials() -> Vec<OrgCredential> {
    vec![
        OrgCredential::new("university", "student"),
        OrgCredential::new("pubworks", "password"),
    ]
}

#[derive(Clone)]
pub struct ComplaintStore {
    /// Newest first
    complaints: Arc<RwLock<Vec<Complaint>>>,
    credentials: Arc<[OrgCredential]>,
    scorer: Arc<dyn PriorityScorer>,
}

impl std::fmt::Debug for ComplaintStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComplaintStore")
            .field("complaints", &self.complaints.read().len())
            .field("credentials", &self.credentials.len())
            .finish()
    }
}

impl ComplaintStore {
    /// Empty store with random priority scoring
    pub fn new(credentials: Vec<OrgCredential>) -> Self {
        Self {
            complaints: Arc::new(RwLock::new(Vec::new())),
            credentials: credentials.into(),
            scorer: Arc::new(RandomPriority),
        }
    }

    /// Replace the priority strategy
    pub fn with_scorer(mut self, scorer: impl PriorityScorer + 'static) -> Self {
        self.scorer = Arc::new(scorer);
        self
    }

    /// Append the demo records after whatever is already stored
    pub fn with_mock_data(self) -> Self {
        let mock = seed::mock_complaints(shared::util::now_local());
        self.complaints.write().extend(mock);
        self
    }

    pub fn len(&self) -> usize {
        self.complaints.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.complaints.read().is_empty()
    }

    /// Route, score and store a new complaint at the front of the list
    pub fn submit(&self, submission: &ComplaintSubmission) -> AppResult<Complaint> {
        if !submission.has_required_fields() {
            return Err(ServerError::BadRequest);
        }

        let route = routing::route(&submission.organization_context, &submission.title);
        let priority = self.scorer.score();

        let mut complaints = self.complaints.write();
        let complaint = Complaint {
            id: fresh_id(&complaints),
            user_id: submission.user_id.clone(),
            title: submission.title.clone(),
            location: submission.location.clone(),
            photo_name: submission.photo_name.clone(),
            organization_context: submission.organization_context.clone(),
            issue_type: route.issue_type.to_string(),
            department: route.department.to_string(),
            priority_score: priority,
            reward_value: routing::reward_for(priority),
            dept_color: routing::dept_color(route.department).to_string(),
            status: status::SUBMITTED.to_string(),
            submitted_at: shared::util::now_local(),
        };
        complaints.insert(0, complaint.clone());
        drop(complaints);

        tracing::info!(
            id = %complaint.id,
            department = %complaint.department,
            issue_type = %complaint.issue_type,
            priority = complaint.priority_score,
            "Complaint submitted"
        );
        Ok(complaint)
    }

    /// Snapshot of every complaint, newest first
    pub fn list_all(&self) -> Vec<Complaint> {
        self.complaints.read().clone()
    }

    /// Complaints visible to an organization, highest priority first.
    /// Equal priorities keep store order.
    pub fn list_by_organization(&self, org_id: &str) -> Vec<Complaint> {
        let wanted = routing::context_for_org(org_id);
        let mut matching: Vec<Complaint> = self
            .complaints
            .read()
            .iter()
            .filter(|c| c.organization_context.eq_ignore_ascii_case(wanted))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.priority_score.cmp(&a.priority_score));

        tracing::debug!(org_id, context = wanted, count = matching.len(), "Listed org complaints");
        matching
    }

    /// Replace the status of complaint `id`. `None` when no such id exists.
    pub fn update_status(&self, id: &str, new_status: &str) -> Option<Complaint> {
        let mut complaints = self.complaints.write();
        let slot = complaints.iter_mut().find(|c| c.id == id)?;
        let updated = slot.with_status(new_status);
        let previous = std::mem::replace(slot, updated.clone());
        drop(complaints);

        tracing::info!(id, from = %previous.status, to = new_status, "Complaint status updated");
        Some(updated)
    }

    /// First credential whose org id matches (ignoring case), if the password
    /// is also correct
    pub fn authenticate(&self, org_id: &str, password: &str) -> Option<&OrgCredential> {
        self.credentials
            .iter()
            .find(|c| c.is_org(org_id))
            .filter(|c| c.verify_password(password))
    }
}

/// 8 uppercase hex chars from a v4 uuid, retried on collision
fn fresh_id(existing: &[Complaint]) -> String {
    loop {
        let id = Uuid::new_v4().simple().to_string()[..ID_LEN].to_ascii_uppercase();
        if !existing.iter().any(|c| c.id == id) {
            return id;
        }
    }
}
