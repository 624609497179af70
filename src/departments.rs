//! Department catalog and designation lookup.
//!
//! The portal treats departments as a closed set, and each department carries
//! its own ordered designation list. A draft's designation is only meaningful
//! within its current department; changing the department resets it (see
//! [`crate::form`]).

/// Department names with their ordered designation lists, in display order.
pub const DEPARTMENT_DESIGNATIONS: &[(&str, &[&str])] = &[
    (
        "Development",
        &["Engineer", "Senior Engineer", "Technical Lead", "Project Manager"],
    ),
    (
        "QA & Automation Testing",
        &["QA Engineer", "Automation Test Engineer", "QA Lead"],
    ),
    (
        "Networking",
        &["Network Engineer", "Network Administrator", "Network Architect"],
    ),
    ("HR Team", &["HR Executive", "HR Manager", "Recruiter"]),
    ("Security", &["Security Analyst", "Security Engineer", "Security Officer"]),
    (
        "Sales & Marketing",
        &["Sales Executive", "Marketing Executive", "Sales Manager"],
    ),
];

/// Iterate department names in display order.
pub fn departments() -> impl Iterator<Item = &'static str> {
    DEPARTMENT_DESIGNATIONS.iter().map(|(name, _)| *name)
}

/// Ordered designations valid for a department.
///
/// Returns an empty slice when the department is unset or not part of the
/// catalog.
pub fn designations_for(department: &str) -> &'static [&'static str] {
    DEPARTMENT_DESIGNATIONS
        .iter()
        .find(|(name, _)| *name == department)
        .map(|(_, designations)| *designations)
        .unwrap_or(&[])
}
