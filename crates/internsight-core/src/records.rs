//! Wire types for the recommendation service.
//!
//! ## Request
//! `POST /recommendations` takes the candidate profile as a JSON object with
//! snake_case keys: `skills_text`, `area_of_interest`, `preferred_locations`.
//!
//! ## Response
//! A JSON array of recommendation objects, ordered by the service's own
//! ranking. The client preserves that order exactly — it never re-scores or
//! re-sorts. `internship_id` is present in observed responses but carries no
//! client-side meaning, so it is modeled as optional.

use serde::{Deserialize, Serialize};

/// The candidate profile as submitted to the recommendation service.
///
/// Built from a [`crate::ProfileDraft`]; all fields may be empty.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CandidateProfile {
    pub skills_text: String,
    pub area_of_interest: String,
    pub preferred_locations: Vec<String>,
}

/// One ranked internship suggestion, immutable once received.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    /// Service-side row identifier. Absent from some deployments.
    #[serde(default)]
    pub internship_id: Option<i64>,

    pub title: String,
    pub company: String,
    pub location: String,
    pub duration: String,
    pub stipend: String,

    /// Match confidence in `[0, 1]`. Displayed as a percentage; values
    /// outside the range are formatted as-is, not clamped.
    pub score: f64,
}

/// Formats a match score as a percentage with exactly two decimal digits.
///
/// `0.8765` → `"87.65%"`. No clamping: out-of-range scores produce
/// out-of-range percentages.
#[must_use]
pub fn format_match_score(score: f64) -> String {
    format!("{:.2}%", score * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_match_score_two_decimals() {
        assert_eq!(format_match_score(0.8765), "87.65%");
    }

    #[test]
    fn format_match_score_pads_zeroes() {
        assert_eq!(format_match_score(0.5), "50.00%");
        assert_eq!(format_match_score(1.0), "100.00%");
        assert_eq!(format_match_score(0.0), "0.00%");
    }

    #[test]
    fn format_match_score_rounds_to_two_decimals() {
        assert_eq!(format_match_score(0.12345), "12.35%");
    }

    #[test]
    fn format_match_score_does_not_clamp() {
        assert_eq!(format_match_score(1.5), "150.00%");
        assert_eq!(format_match_score(-0.25), "-25.00%");
    }

    #[test]
    fn candidate_profile_serializes_with_wire_field_names() {
        let profile = CandidateProfile {
            skills_text: "Python".to_owned(),
            area_of_interest: "AI/ML".to_owned(),
            preferred_locations: vec!["Mumbai".to_owned(), "Bangalore".to_owned()],
        };

        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "skills_text": "Python",
                "area_of_interest": "AI/ML",
                "preferred_locations": ["Mumbai", "Bangalore"],
            })
        );
    }

    #[test]
    fn recommendation_deserializes_full_record() {
        let json = r#"{
            "internship_id": 7,
            "title": "Backend Intern",
            "company": "Acme",
            "location": "Pune",
            "duration": "3 Months",
            "stipend": "10000 /month",
            "score": 0.91
        }"#;

        let rec: Recommendation = serde_json::from_str(json).unwrap();
        assert_eq!(rec.internship_id, Some(7));
        assert_eq!(rec.title, "Backend Intern");
        assert_eq!(rec.company, "Acme");
        assert_eq!(rec.location, "Pune");
        assert_eq!(rec.duration, "3 Months");
        assert_eq!(rec.stipend, "10000 /month");
        assert!((rec.score - 0.91).abs() < f64::EPSILON);
    }

    #[test]
    fn recommendation_tolerates_missing_internship_id() {
        let json = r#"{
            "title": "Web Intern",
            "company": "Acme",
            "location": "Remote",
            "duration": "2 Months",
            "stipend": "Unpaid",
            "score": 0.4
        }"#;

        let rec: Recommendation = serde_json::from_str(json).unwrap();
        assert_eq!(rec.internship_id, None);
    }
}
