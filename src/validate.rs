//! Draft validation ahead of submission.

use crate::form::EmployeeDraft;

/// Check a draft for submission, collecting every violation in a fixed order
/// instead of stopping at the first, so the operator sees all problems in one
/// pass. An empty result means the draft is submittable.
///
/// Aadhaar, account number, previous company, PF number, permanent address
/// and the two dates are deliberately not enforced here; the form accepts
/// them blank.
pub fn validate(draft: &EmployeeDraft) -> Vec<String> {
    let mut violations = Vec::new();

    if draft.name.trim().is_empty() {
        violations.push("Employee name is required".to_string());
    }
    if draft.email.trim().is_empty() {
        violations.push("Email is required".to_string());
    }
    if draft.contact_number.trim().is_empty() {
        violations.push("Mobile number is required".to_string());
    }
    if draft.address.trim().is_empty() {
        violations.push("Current address is required".to_string());
    }
    if draft.department.is_empty() {
        violations.push("Department is required".to_string());
    }
    if draft.designation.is_empty() {
        violations.push("Designation is required".to_string());
    }
    if !salary_is_valid(&draft.salary) {
        violations.push("Valid salary is required".to_string());
    }

    violations
}

/// Salary is edited as text; submission needs a parseable, strictly positive
/// number.
fn salary_is_valid(salary: &str) -> bool {
    salary
        .trim()
        .parse::<f64>()
        .map(|value| value > 0.0)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::DraftPatch;

    fn complete_draft() -> EmployeeDraft {
        let mut draft = EmployeeDraft::default();
        draft.name = "Asha Rao".to_string();
        draft.email = "asha@example.com".to_string();
        draft.contact_number = "9999999999".to_string();
        draft.address = "Pune".to_string();
        draft.department = "Development".to_string();
        draft.designation = "Engineer".to_string();
        draft.salary = "50000".to_string();
        draft
    }

    #[test]
    fn test_complete_draft_passes() {
        assert!(validate(&complete_draft()).is_empty());
    }

    #[test]
    fn test_empty_draft_reports_everything_in_order() {
        let violations = validate(&EmployeeDraft::default());
        assert_eq!(
            violations,
            vec![
                "Employee name is required",
                "Email is required",
                "Mobile number is required",
                "Current address is required",
                "Department is required",
                "Designation is required",
                "Valid salary is required",
            ]
        );
    }

    #[test]
    fn test_whitespace_only_counts_as_blank() {
        let mut draft = complete_draft();
        draft.name = "   ".to_string();
        draft.address = "\t".to_string();
        let violations = validate(&draft);
        assert_eq!(
            violations,
            vec!["Employee name is required", "Current address is required"]
        );
    }

    #[test]
    fn test_salary_must_be_positive_number() {
        let mut draft = complete_draft();
        for bad in ["", "0", "-5", "abc", "12k"] {
            draft.salary = bad.to_string();
            assert_eq!(
                validate(&draft),
                vec!["Valid salary is required"],
                "salary {bad:?} should be rejected"
            );
        }

        draft.salary = " 12000.50 ".to_string();
        assert!(validate(&draft).is_empty(), "padding around a number is fine");
    }

    #[test]
    fn test_department_change_invalidates_designation() {
        let mut draft = complete_draft();
        draft.apply(DraftPatch::Department("Security".to_string()));
        assert_eq!(validate(&draft), vec!["Designation is required"]);
    }

    #[test]
    fn test_validation_is_deterministic() {
        let draft = EmployeeDraft::default();
        assert_eq!(validate(&draft), validate(&draft));
    }
}
