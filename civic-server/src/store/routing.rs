//! Department routing and derived complaint fields
//!
//! Context checks ignore case; the title keyword checks (`light`, `Pothole`)
//! are case-sensitive substring matches.

use shared::models::{color, context, department, issue_type};

/// Keyword that marks a campus complaint as a lighting issue
const CAMPUS_LIGHT_KEYWORD: &str = "light";
/// Keyword that marks a city complaint as a road hazard
const ROAD_HAZARD_KEYWORD: &str = "Pothole";

/// Org id that sees university complaints; every other id sees city-wide ones
const UNIVERSITY_ORG_ID: &str = "university";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Routing {
    pub department: &'static str,
    pub issue_type: &'static str,
}

/// Pick department and issue type from the submitted context and title
pub fn route(organization_context: &str, title: &str) -> Routing {
    if organization_context.eq_ignore_ascii_case(context::UNIVERSITY) {
        Routing {
            department: department::UNIVERSITY_MAINTENANCE,
            issue_type: if title.contains(CAMPUS_LIGHT_KEYWORD) {
                issue_type::CAMPUS_LIGHTING
            } else {
                issue_type::GENERAL_CAMPUS
            },
        }
    } else {
        Routing {
            department: department::PUBLIC_WORKS,
            issue_type: if title.contains(ROAD_HAZARD_KEYWORD) {
                issue_type::ROAD_HAZARD
            } else {
                issue_type::CITY_INFRASTRUCTURE
            },
        }
    }
}

/// Reward points: 30 at >= 80, 15 at >= 60, otherwise 5
pub fn reward_for(priority: u32) -> u32 {
    match priority {
        80.. => 30,
        60.. => 15,
        _ => 5,
    }
}

pub fn dept_color(department: &str) -> &'static str {
    if department.contains("University") {
        color::UNIVERSITY
    } else {
        color::DEFAULT
    }
}

/// Organization context an org id is allowed to see
pub fn context_for_org(org_id: &str) -> &'static str {
    if org_id.eq_ignore_ascii_case(UNIVERSITY_ORG_ID) {
        context::UNIVERSITY
    } else {
        context::CITY_WIDE
    }
}
