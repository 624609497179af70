//! Submission path: draft to wire payload, save driver, outcome mapping.

use crate::api::EmployeeGateway;
use crate::form::EmployeeDraft;
use crate::models::EmployeePayload;

/// Fallback body when neither the server nor the transport supplied a
/// message.
const UPDATE_FALLBACK: &str = "Failed to update employee";

/// Terminal result of one save attempt, ready for the notification layer.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Saved,
    Failed { title: &'static str, body: String },
}

/// Translate a draft into the outbound wire payload.
///
/// Free-text fields are trimmed; a blank permanent address inherits the
/// trimmed current address; salary parses to a non-negative number,
/// defaulting to zero when unparsable.
pub fn build_payload(draft: &EmployeeDraft) -> EmployeePayload {
    let address = draft.address.trim().to_string();
    let permanent = draft.permanent_address.trim();
    let permanent_address = if permanent.is_empty() {
        address.clone()
    } else {
        permanent.to_string()
    };

    EmployeePayload {
        employee_name: draft.name.trim().to_string(),
        email: draft.email.trim().to_string(),
        gender: draft.gender,
        date_of_birth: draft.date_of_birth.trim().to_string(),
        join_date: draft.join_date.trim().to_string(),
        mobile_number: draft.contact_number.trim().to_string(),
        aadhaar_number: draft.aadhaar_number.trim().to_string(),
        account_number: draft.account_number.trim().to_string(),
        department: draft.department.trim().to_string(),
        designation: draft.designation.trim().to_string(),
        previous_company: draft.previous_company.trim().to_string(),
        pf_number: draft.pf_number.trim().to_string(),
        salary: parse_salary(&draft.salary),
        address,
        permanent_address,
        role: draft.role,
        active: draft.active,
    }
}

/// Salary text to outbound number: parsed, floored at zero, zero when
/// unparsable.
fn parse_salary(salary: &str) -> f64 {
    salary.trim().parse::<f64>().map_or(0.0, |v| v.max(0.0))
}

/// Drive one update through the gateway and fold the result into a
/// notification-ready outcome.
///
/// A missing success flag counts as success. Several portal deployments
/// omit the flag entirely; do not tighten this.
pub async fn save_employee<G: EmployeeGateway>(
    gateway: &G,
    id: i64,
    payload: &EmployeePayload,
) -> SaveOutcome {
    match gateway.update(id, payload).await {
        Ok(ack) if ack.success != Some(false) => SaveOutcome::Saved,
        Ok(ack) => SaveOutcome::Failed {
            title: "Update Failed",
            body: ack
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| UPDATE_FALLBACK.to_string()),
        },
        Err(e) => SaveOutcome::Failed {
            title: "Error!",
            body: e.user_message(),
        },
    }
}
