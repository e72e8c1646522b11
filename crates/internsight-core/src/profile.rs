//! The candidate profile as entered, before it becomes a wire request.
//!
//! The three fields are free-form text; nothing here blocks submission.
//! Empty fields and an empty location list are legal and forwarded as-is —
//! input validation, if any, is the recommendation service's job.

use crate::records::CandidateProfile;

/// The closed set of editable profile fields.
///
/// Updates go through [`ProfileDraft::update`] so exactly one field changes
/// at a time and there is no dynamic-key mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    SkillsText,
    AreaOfInterest,
    PreferredLocations,
}

/// The raw profile fields for one form session.
///
/// `preferred_locations_raw` is kept as the comma-separated string the user
/// typed; it is only split into a list when the wire request is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub skills_text: String,
    pub area_of_interest: String,
    pub preferred_locations_raw: String,
}

impl ProfileDraft {
    #[must_use]
    pub fn new(skills_text: &str, area_of_interest: &str, preferred_locations_raw: &str) -> Self {
        Self {
            skills_text: skills_text.to_owned(),
            area_of_interest: area_of_interest.to_owned(),
            preferred_locations_raw: preferred_locations_raw.to_owned(),
        }
    }

    /// Replaces exactly one field, leaving the others untouched.
    pub fn update(&mut self, field: ProfileField, value: &str) {
        match field {
            ProfileField::SkillsText => self.skills_text = value.to_owned(),
            ProfileField::AreaOfInterest => self.area_of_interest = value.to_owned(),
            ProfileField::PreferredLocations => self.preferred_locations_raw = value.to_owned(),
        }
    }

    /// Builds the wire entity sent to the recommendation service.
    ///
    /// Skills and interest are copied through verbatim; the location string
    /// is split via [`split_locations`].
    #[must_use]
    pub fn to_profile(&self) -> CandidateProfile {
        CandidateProfile {
            skills_text: self.skills_text.clone(),
            area_of_interest: self.area_of_interest.clone(),
            preferred_locations: split_locations(&self.preferred_locations_raw),
        }
    }
}

/// Splits a comma-separated location string into a list of trimmed entries.
///
/// Segments that are empty after trimming are dropped. Duplicates and order
/// are preserved — the service decides how to weigh them.
#[must_use]
pub fn split_locations(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect()
}
