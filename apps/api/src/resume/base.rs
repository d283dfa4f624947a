//! Base structure builder: derives the deterministic, factual resume
//! skeleton from the stored profile before any AI involvement.
//!
//! The lengths and order of `work_experience` and `education` produced here
//! are authoritative: reconciliation must never change them.

use chrono::{Datelike, Utc};

use crate::models::profile::{PersonalInfo, ProfileData, WorkHistoryEntry};
use crate::models::resume::{ContactInfo, EducationRecord, ResumeContent, WorkExperience};
use crate::resume::dates::{normalize_date, year_of};

/// Roles whose determinate end year is more than this many years old are
/// dropped in age-optimized mode.
pub const AGE_CUTOFF_YEARS: i32 = 15;

/// Builds the base resume structure from a profile snapshot.
pub fn build_base(profile: &ProfileData, age_optimized: bool) -> ResumeContent {
    build_base_for_year(profile, age_optimized, Utc::now().year())
}

/// Year-injected variant so the age cutoff can be tested against a fixed
/// "now".
pub fn build_base_for_year(
    profile: &ProfileData,
    age_optimized: bool,
    current_year: i32,
) -> ResumeContent {
    let cutoff_year = current_year - AGE_CUTOFF_YEARS;

    let work_experience = profile
        .work_history
        .iter()
        .filter(|work| !age_optimized || retain_under_cutoff(work, cutoff_year, current_year))
        .map(|work| WorkExperience {
            title: first_nonempty(&[&work.position, &work.title]),
            company: work.company.clone().unwrap_or_default(),
            start_date: normalize_date(work.start_date.as_deref().unwrap_or_default()),
            end_date: match nonempty(&work.end_date) {
                Some(raw) => normalize_date(raw),
                None => "Present".to_string(),
            },
            description: work.description.clone().unwrap_or_default(),
        })
        .collect();

    let education = profile
        .education
        .iter()
        .map(|edu| EducationRecord {
            degree: edu.degree.clone().unwrap_or_default(),
            school: first_nonempty(&[&edu.institution, &edu.school]),
            field: edu.field.clone().unwrap_or_default(),
            // Age concealment: the real graduation date must not leak even
            // into the structure sent to the model.
            graduation_date: if age_optimized {
                String::new()
            } else {
                normalize_date(edu.graduation_date.as_deref().unwrap_or_default())
            },
            description: String::new(),
        })
        .collect();

    ResumeContent {
        personal_info: resolve_contact(&profile.personal_info),
        summary: String::new(),
        core_competencies: String::new(),
        work_experience,
        education,
        skills: profile.skills.clone(),
    }
}

/// Age filter: a missing end date counts as ongoing (current year); an end
/// date that cannot be parsed keeps the entry. Only a determinate end year
/// strictly before the cutoff drops a role.
fn retain_under_cutoff(work: &WorkHistoryEntry, cutoff_year: i32, current_year: i32) -> bool {
    let end_year = match nonempty(&work.end_date) {
        None => Some(current_year),
        Some(raw) => year_of(raw),
    };
    match end_year {
        Some(year) => year >= cutoff_year,
        None => true,
    }
}

fn resolve_contact(info: &PersonalInfo) -> ContactInfo {
    let name = match (nonempty(&info.first_name), nonempty(&info.last_name)) {
        (Some(first), Some(last)) => format!("{first} {last}"),
        _ => info.name.clone().unwrap_or_default(),
    };

    ContactInfo {
        name,
        email: info.email.clone().unwrap_or_default(),
        phone: info.phone.clone().unwrap_or_default(),
        location: info.location.clone().unwrap_or_default(),
    }
}

fn nonempty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn first_nonempty(candidates: &[&Option<String>]) -> String {
    candidates
        .iter()
        .find_map(|c| nonempty(c))
        .unwrap_or_default()
        .to_string()
}
