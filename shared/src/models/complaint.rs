//! Complaint Model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::util::lenient_string;

/// Organization contexts selectable by citizens
pub mod context {
    pub const UNIVERSITY: &str = "University Issues";
    pub const CITY_WIDE: &str = "City-wide Issues";
}

/// Departments complaints are routed to
pub mod department {
    pub const UNIVERSITY_MAINTENANCE: &str = "University Maintenance";
    pub const PUBLIC_WORKS: &str = "Public Works";
}

/// Issue types assigned by routing
pub mod issue_type {
    pub const CAMPUS_LIGHTING: &str = "Campus Lighting";
    pub const GENERAL_CAMPUS: &str = "General Campus Issue";
    pub const ROAD_HAZARD: &str = "Road Hazard";
    pub const CITY_INFRASTRUCTURE: &str = "City Infrastructure";
}

/// Well-known status values. Status is free-form; any string is accepted.
pub mod status {
    pub const SUBMITTED: &str = "Submitted";
    pub const IN_PROGRESS: &str = "In Progress";
    pub const RESOLVED: &str = "Resolved";
}

/// UI colors keyed by department family
pub mod color {
    pub const UNIVERSITY: &str = "#9333ea";
    pub const DEFAULT: &str = "#4f46e5";
}

/// Complaint entity
///
/// Immutable once created: a status change produces a new value via
/// [`Complaint::with_status`] which replaces the stored one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    /// 8-char uppercase id (e.g. `3F2A9C1B`), or a fixed id for demo records
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub location: String,
    /// File name only; no content is uploaded
    pub photo_name: String,
    /// e.g. "City-wide Issues" or "University Issues"
    pub organization_context: String,
    /// Routed issue classification (e.g. "Road Hazard")
    #[serde(rename = "type")]
    pub issue_type: String,
    pub department: String,
    /// Assigned at creation, in [40, 90)
    pub priority_score: u32,
    /// 5, 15 or 30, derived from priority
    pub reward_value: u32,
    pub dept_color: String,
    pub status: String,
    pub submitted_at: NaiveDateTime,
}

impl Complaint {
    /// Copy of this complaint with only `status` replaced
    pub fn with_status(&self, status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            ..self.clone()
        }
    }
}

/// Citizen submission payload (POST /api/v1/complaints/submit)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintSubmission {
    #[serde(default, deserialize_with = "lenient_string")]
    pub user_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub photo_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub organization_context: String,
}

impl ComplaintSubmission {
    /// Title and location are the only required fields
    pub fn has_required_fields(&self) -> bool {
        !self.title.is_empty() && !self.location.is_empty()
    }
}

/// Status update payload (PUT /api/v1/org/status/update)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
}

impl StatusUpdateRequest {
    pub fn has_required_fields(&self) -> bool {
        !self.id.is_empty() && !self.status.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> Complaint {
        Complaint {
            id: "ABCD1234".to_string(),
            user_id: "U1".to_string(),
            title: "Pothole on 5th".to_string(),
            location: "5th Ave".to_string(),
            photo_name: "p.jpg".to_string(),
            organization_context: context::CITY_WIDE.to_string(),
            issue_type: issue_type::ROAD_HAZARD.to_string(),
            department: department::PUBLIC_WORKS.to_string(),
            priority_score: 72,
            reward_value: 15,
            dept_color: color::DEFAULT.to_string(),
            status: status::SUBMITTED.to_string(),
            submitted_at: NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_complaint_serializes_camel_case_with_type_field() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["userId"], "U1");
        assert_eq!(json["photoName"], "p.jpg");
        assert_eq!(json["organizationContext"], "City-wide Issues");
        assert_eq!(json["type"], "Road Hazard");
        assert_eq!(json["priorityScore"], 72);
        assert_eq!(json["rewardValue"], 15);
        assert_eq!(json["deptColor"], "#4f46e5");
        assert_eq!(json["submittedAt"], "2024-05-01T09:30:00");
        assert!(json.get("issueType").is_none());
    }

    #[test]
    fn test_with_status_only_changes_status() {
        let original = sample();
        let updated = original.with_status(status::RESOLVED);
        assert_eq!(updated.status, "Resolved");
        assert_eq!(updated.with_status(status::SUBMITTED), original);
    }

    #[test]
    fn test_submission_null_and_missing_fields_default_to_empty() {
        let sub: ComplaintSubmission =
            serde_json::from_str(r#"{"title":"Broken light","location":null}"#).unwrap();
        assert_eq!(sub.title, "Broken light");
        assert_eq!(sub.location, "");
        assert_eq!(sub.user_id, "");
        assert!(!sub.has_required_fields());
    }

    #[test]
    fn test_submission_accepts_scalar_values_as_text() {
        let sub: ComplaintSubmission =
            serde_json::from_str(r#"{"title":5,"location":"L","userId":42}"#).unwrap();
        assert_eq!(sub.title, "5");
        assert_eq!(sub.user_id, "42");
        assert!(sub.has_required_fields());
    }

    #[test]
    fn test_status_update_requires_both_fields() {
        let req: StatusUpdateRequest = serde_json::from_str(r#"{"id":"X"}"#).unwrap();
        assert!(!req.has_required_fields());

        let req: StatusUpdateRequest =
            serde_json::from_str(r#"{"id":"X","status":"Resolved"}"#).unwrap();
        assert!(req.has_required_fields());
    }
}
