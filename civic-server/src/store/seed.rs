//! Demo records loaded at start-up

use chrono::{Duration, NaiveDateTime};
use shared::Complaint;
use shared::models::{color, context, department, status};

/// Two demo complaints, in store order (index 0 first)
pub fn mock_complaints(now: NaiveDateTime) -> Vec<Complaint> {
    vec![
        Complaint {
            id: "MOCK-POTH-01".to_string(),
            user_id: "CITIZEN-001".to_string(),
            title: "Major Pothole".to_string(),
            location: "123 Main St".to_string(),
            photo_name: "road.jpg".to_string(),
            organization_context: context::CITY_WIDE.to_string(),
            issue_type: "Urgent Infrastructure".to_string(),
            department: department::PUBLIC_WORKS.to_string(),
            priority_score: 85,
            reward_value: 30,
            dept_color: color::DEFAULT.to_string(),
            status: status::IN_PROGRESS.to_string(),
            submitted_at: now - Duration::hours(2),
        },
        Complaint {
            id: "MOCK-UNI-02".to_string(),
            user_id: "STUDENT-003".to_string(),
            title: "Broken light in Block 3".to_string(),
            location: "University Block 3".to_string(),
            photo_name: "light.jpg".to_string(),
            organization_context: context::UNIVERSITY.to_string(),
            issue_type: "Campus Safety".to_string(),
            department: department::UNIVERSITY_MAINTENANCE.to_string(),
            priority_score: 65,
            reward_value: 15,
            dept_color: color::UNIVERSITY.to_string(),
            status: status::SUBMITTED.to_string(),
            submitted_at: now,
        },
    ]
}
