//! Draft record state for one employee edit session.
//!
//! The draft is the form's working copy of a record. It is hydrated from the
//! portal once per session, edited locally, and only turned back into wire
//! shape at submit time (see [`crate::submit`]).

use std::time::{Duration, Instant};

use crate::departments;
use crate::error::AppError;
use crate::models::{EmployeeRecord, Gender, Role};

/// Delay between a successful "save and return" and the actual navigation,
/// long enough for the success notice to be read first.
pub const RETURN_DELAY: Duration = Duration::from_millis(1500);

/// Placeholder sentinels some records carry instead of a real address.
/// Matched exactly; "NA" or "n/a" are treated as real text.
const PLACEHOLDERS: [&str; 2] = ["na", "N/A"];

fn scrub_placeholder(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() && !PLACEHOLDERS.contains(&v) => v.to_string(),
        _ => String::new(),
    }
}

/// Salary arrives as a number but is edited as text. Zero and absent both
/// render blank so the field starts empty instead of showing "0".
fn salary_text(salary: Option<f64>) -> String {
    match salary {
        Some(value) if value != 0.0 => value.to_string(),
        _ => String::new(),
    }
}

/// Mutable form state for one employee record.
///
/// Free-text fields hold the raw edit buffer (empty string = unset);
/// enumerated and boolean fields are typed.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDraft {
    pub name: String,
    pub email: String,
    pub gender: Gender,
    pub date_of_birth: String,
    pub join_date: String,
    pub contact_number: String,
    pub aadhaar_number: String,
    pub account_number: String,
    pub department: String,
    pub designation: String,
    pub previous_company: String,
    pub pf_number: String,
    pub salary: String,
    pub address: String,
    pub permanent_address: String,
    pub role: Role,
    pub active: bool,
}

impl Default for EmployeeDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            gender: Gender::Male,
            date_of_birth: String::new(),
            join_date: String::new(),
            contact_number: String::new(),
            aadhaar_number: String::new(),
            account_number: String::new(),
            department: String::new(),
            designation: String::new(),
            previous_company: String::new(),
            pf_number: String::new(),
            salary: String::new(),
            address: String::new(),
            permanent_address: String::new(),
            role: Role::User,
            active: true,
        }
    }
}

/// One field edit applied to a draft.
///
/// Edits are modeled as a patch so dependent resets happen inside a single
/// mutation: a [`DraftPatch::Department`] change clears the designation in
/// the same call and no observer can see the half-applied pair.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftPatch {
    Name(String),
    Email(String),
    Gender(Gender),
    DateOfBirth(String),
    JoinDate(String),
    ContactNumber(String),
    AadhaarNumber(String),
    AccountNumber(String),
    Department(String),
    Designation(String),
    PreviousCompany(String),
    PfNumber(String),
    Salary(String),
    Address(String),
    PermanentAddress(String),
    Role(Role),
    Active(bool),
}

impl EmployeeDraft {
    /// Build a draft from a fetched record, applying the form's defaulting
    /// rules: blanks for missing values, placeholder scrubbing on both
    /// addresses, and the portal defaults for gender, role and active.
    pub fn from_remote(record: &EmployeeRecord) -> Self {
        Self {
            name: record.employee_name.clone().unwrap_or_default(),
            email: record.email.clone().unwrap_or_default(),
            gender: Gender::from_wire(record.gender.as_deref()),
            date_of_birth: record.date_of_birth.clone().unwrap_or_default(),
            join_date: record.join_date.clone().unwrap_or_default(),
            contact_number: record.mobile_number.clone().unwrap_or_default(),
            aadhaar_number: record.aadhaar_number.clone().unwrap_or_default(),
            account_number: record.account_number.clone().unwrap_or_default(),
            department: record.department.clone().unwrap_or_default(),
            designation: record.designation.clone().unwrap_or_default(),
            previous_company: record.previous_company.clone().unwrap_or_default(),
            pf_number: record.pf_number.clone().unwrap_or_default(),
            salary: salary_text(record.salary),
            address: scrub_placeholder(record.address.as_deref()),
            permanent_address: scrub_placeholder(record.permanent_address.as_deref()),
            role: Role::from_wire(record.role.as_deref()),
            // Only an explicit false deactivates; missing means active.
            active: record.active != Some(false),
        }
    }

    /// Apply one field edit.
    pub fn apply(&mut self, patch: DraftPatch) {
        match patch {
            DraftPatch::Name(v) => self.name = v,
            DraftPatch::Email(v) => self.email = v,
            DraftPatch::Gender(v) => self.gender = v,
            DraftPatch::DateOfBirth(v) => self.date_of_birth = v,
            DraftPatch::JoinDate(v) => self.join_date = v,
            DraftPatch::ContactNumber(v) => self.contact_number = v,
            DraftPatch::AadhaarNumber(v) => self.aadhaar_number = v,
            DraftPatch::AccountNumber(v) => self.account_number = v,
            DraftPatch::Department(v) => {
                self.department = v;
                // A designation is only meaningful within its department.
                self.designation.clear();
            }
            DraftPatch::Designation(v) => self.designation = v,
            DraftPatch::PreviousCompany(v) => self.previous_company = v,
            DraftPatch::PfNumber(v) => self.pf_number = v,
            DraftPatch::Salary(v) => self.salary = v,
            DraftPatch::Address(v) => self.address = v,
            DraftPatch::PermanentAddress(v) => self.permanent_address = v,
            DraftPatch::Role(v) => self.role = v,
            DraftPatch::Active(v) => self.active = v,
        }
    }

    /// Designations offered for the draft's current department.
    pub fn available_designations(&self) -> &'static [&'static str] {
        departments::designations_for(&self.department)
    }
}

/// Stamp handed to a spawned fetch.
#[derive(Debug, Clone, Copy)]
pub struct LoadTicket {
    pub id: i64,
    pub epoch: u64,
}

/// Stamp handed to a spawned save.
#[derive(Debug, Clone, Copy)]
pub struct SubmitTicket {
    pub id: i64,
    pub epoch: u64,
}

/// Tracks one employee edit from open to close.
///
/// Replies from spawned gateway calls come back stamped with the session
/// epoch; a stamp from an earlier epoch belongs to a closed or reopened
/// session and is ignored, so a disposed session is never mutated.
pub struct EditSession {
    pub employee_id: Option<i64>,
    pub draft: EmployeeDraft,
    /// True from open until the first load resolves or short-circuits.
    pub initial_loading: bool,
    /// True only while a save is in flight.
    pub submitting: bool,
    epoch: u64,
    return_at: Option<Instant>,
}

impl EditSession {
    pub fn new() -> Self {
        Self {
            employee_id: None,
            draft: EmployeeDraft::default(),
            initial_loading: false,
            submitting: false,
            epoch: 0,
            return_at: None,
        }
    }

    /// Open a fresh session for the given employee.
    ///
    /// Without an id the session short-circuits into its terminal state:
    /// nothing is fetched, `initial_loading` ends false and the submit
    /// controls stay unavailable.
    pub fn begin(&mut self, id: Option<i64>) -> Result<LoadTicket, AppError> {
        self.epoch += 1;
        self.employee_id = id;
        self.draft = EmployeeDraft::default();
        self.submitting = false;
        self.return_at = None;

        match id {
            Some(id) => {
                self.initial_loading = true;
                Ok(LoadTicket {
                    id,
                    epoch: self.epoch,
                })
            }
            None => {
                self.initial_loading = false;
                Err(AppError::MissingEmployeeId)
            }
        }
    }

    /// Close the session, dropping the draft and any pending navigation.
    pub fn close(&mut self) {
        self.epoch += 1;
        self.employee_id = None;
        self.draft = EmployeeDraft::default();
        self.initial_loading = false;
        self.submitting = false;
        self.return_at = None;
    }

    /// Whether a reply stamped with `epoch` still belongs to this session.
    pub fn accepts(&self, epoch: u64) -> bool {
        self.epoch == epoch
    }

    /// Apply a fetched record. Returns false for stale replies.
    pub fn hydrate(&mut self, epoch: u64, record: &EmployeeRecord) -> bool {
        if !self.accepts(epoch) {
            return false;
        }
        self.draft = EmployeeDraft::from_remote(record);
        self.initial_loading = false;
        true
    }

    /// Record a failed load; the draft stays at its defaults.
    pub fn load_failed(&mut self, epoch: u64) -> bool {
        if !self.accepts(epoch) {
            return false;
        }
        self.initial_loading = false;
        true
    }

    /// Whether the submit controls should be usable right now.
    pub fn can_submit(&self) -> bool {
        self.employee_id.is_some() && !self.initial_loading && !self.submitting
    }

    /// Mark a save as in flight.
    ///
    /// Refuses while the initial load or another save is running, and for
    /// sessions without an employee id: at most one save per session can be
    /// in flight.
    pub fn begin_submit(&mut self) -> Option<SubmitTicket> {
        if !self.can_submit() {
            return None;
        }
        let id = self.employee_id?;
        self.submitting = true;
        Some(SubmitTicket {
            id,
            epoch: self.epoch,
        })
    }

    /// Clear the in-flight flag. Runs on every save exit path.
    pub fn finish_submit(&mut self, epoch: u64) -> bool {
        if !self.accepts(epoch) {
            return false;
        }
        self.submitting = false;
        true
    }

    /// Schedule the delayed return-to-open navigation.
    pub fn schedule_return(&mut self, now: Instant) {
        self.return_at = Some(now + RETURN_DELAY);
    }

    pub fn return_pending(&self) -> bool {
        self.return_at.is_some()
    }

    /// Consume the scheduled return once its delay has elapsed.
    pub fn take_due_return(&mut self, now: Instant) -> bool {
        match self.return_at {
            Some(due) if now >= due => {
                self.return_at = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> EmployeeRecord {
        EmployeeRecord {
            id: Some(7),
            employee_name: Some("Asha Rao".to_string()),
            email: Some("a@x.com".to_string()),
            gender: Some("F".to_string()),
            date_of_birth: Some("1991-04-02".to_string()),
            join_date: Some("2019-08-01".to_string()),
            mobile_number: Some("9999999999".to_string()),
            department: Some("Development".to_string()),
            designation: Some("Engineer".to_string()),
            salary: Some(50000.0),
            address: Some("Pune".to_string()),
            permanent_address: Some("N/A".to_string()),
            role: Some("ADMIN".to_string()),
            active: Some(true),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_draft() {
        let draft = EmployeeDraft::default();
        assert_eq!(draft.gender, Gender::Male);
        assert_eq!(draft.role, Role::User);
        assert!(draft.active);
        assert!(draft.name.is_empty());
        assert!(draft.salary.is_empty());
    }

    #[test]
    fn test_from_remote_maps_fields() {
        let draft = EmployeeDraft::from_remote(&sample_record());
        assert_eq!(draft.name, "Asha Rao");
        assert_eq!(draft.email, "a@x.com");
        assert_eq!(draft.gender, Gender::Female);
        assert_eq!(draft.contact_number, "9999999999");
        assert_eq!(draft.department, "Development");
        assert_eq!(draft.designation, "Engineer");
        assert_eq!(draft.salary, "50000");
        assert_eq!(draft.address, "Pune");
        assert_eq!(draft.role, Role::Admin);
        assert!(draft.active);
    }

    #[test]
    fn test_from_remote_scrubs_placeholders() {
        let mut record = sample_record();
        record.address = Some("N/A".to_string());
        record.permanent_address = Some("na".to_string());
        let draft = EmployeeDraft::from_remote(&record);
        assert_eq!(draft.address, "");
        assert_eq!(draft.permanent_address, "");

        // Matching is case-sensitive: other spellings pass through.
        record.address = Some("NA".to_string());
        let draft = EmployeeDraft::from_remote(&record);
        assert_eq!(draft.address, "NA");
    }

    #[test]
    fn test_from_remote_defaults() {
        let record = EmployeeRecord::default();
        let draft = EmployeeDraft::from_remote(&record);
        assert_eq!(draft.gender, Gender::Male);
        assert_eq!(draft.role, Role::User);
        assert!(draft.active, "missing active flag means active");
        assert_eq!(draft.salary, "");

        let mut record = EmployeeRecord::default();
        record.active = Some(false);
        record.gender = Some("X".to_string());
        assert!(!EmployeeDraft::from_remote(&record).active);
        assert_eq!(EmployeeDraft::from_remote(&record).gender, Gender::Male);
    }

    #[test]
    fn test_from_remote_salary_formatting() {
        let mut record = EmployeeRecord::default();
        record.salary = Some(50000.5);
        assert_eq!(EmployeeDraft::from_remote(&record).salary, "50000.5");

        record.salary = Some(0.0);
        assert_eq!(EmployeeDraft::from_remote(&record).salary, "");
    }

    #[test]
    fn test_department_patch_clears_designation() {
        let mut draft = EmployeeDraft::from_remote(&sample_record());
        assert_eq!(draft.designation, "Engineer");

        draft.apply(DraftPatch::Department("Security".to_string()));
        assert_eq!(draft.department, "Security");
        assert_eq!(draft.designation, "");

        // Re-selecting the same department still clears.
        draft.apply(DraftPatch::Designation("Security Analyst".to_string()));
        draft.apply(DraftPatch::Department("Security".to_string()));
        assert_eq!(draft.designation, "");
    }

    #[test]
    fn test_available_designations_follow_department() {
        let mut draft = EmployeeDraft::default();
        assert!(draft.available_designations().is_empty());

        draft.apply(DraftPatch::Department("Development".to_string()));
        assert!(draft.available_designations().contains(&"Engineer"));
    }

    #[test]
    fn test_begin_without_id_is_terminal() {
        let mut session = EditSession::new();
        let err = session.begin(None).unwrap_err();
        assert!(matches!(err, AppError::MissingEmployeeId));
        assert!(!session.initial_loading);
        assert!(!session.can_submit());
        assert!(session.begin_submit().is_none());
    }

    #[test]
    fn test_begin_and_hydrate() {
        let mut session = EditSession::new();
        let ticket = session.begin(Some(7)).unwrap();
        assert_eq!(ticket.id, 7);
        assert!(session.initial_loading);
        assert!(!session.can_submit(), "no submit while loading");

        assert!(session.hydrate(ticket.epoch, &sample_record()));
        assert!(!session.initial_loading);
        assert_eq!(session.draft.name, "Asha Rao");
        assert!(session.can_submit());
    }

    #[test]
    fn test_load_failure_keeps_default_draft() {
        let mut session = EditSession::new();
        let ticket = session.begin(Some(7)).unwrap();
        assert!(session.load_failed(ticket.epoch));
        assert!(!session.initial_loading);
        assert_eq!(session.draft, EmployeeDraft::default());
    }

    #[test]
    fn test_stale_replies_are_ignored() {
        let mut session = EditSession::new();
        let old = session.begin(Some(7)).unwrap();
        let fresh = session.begin(Some(8)).unwrap();

        assert!(!session.hydrate(old.epoch, &sample_record()));
        assert!(session.initial_loading, "stale reply must not end the load");
        assert!(!session.load_failed(old.epoch));

        assert!(session.hydrate(fresh.epoch, &sample_record()));
        assert!(!session.initial_loading);
    }

    #[test]
    fn test_single_submit_in_flight() {
        let mut session = EditSession::new();
        let ticket = session.begin(Some(7)).unwrap();
        session.hydrate(ticket.epoch, &sample_record());

        let submit = session.begin_submit().expect("first submit starts");
        assert!(session.submitting);
        assert!(session.begin_submit().is_none(), "second submit refused");

        assert!(session.finish_submit(submit.epoch));
        assert!(!session.submitting);
        assert!(session.begin_submit().is_some(), "free again after finish");
    }

    #[test]
    fn test_finish_submit_ignores_stale_epoch() {
        let mut session = EditSession::new();
        let ticket = session.begin(Some(7)).unwrap();
        session.hydrate(ticket.epoch, &sample_record());
        session.begin_submit().unwrap();

        // Session reopened while the save was in flight.
        let fresh = session.begin(Some(9)).unwrap();
        assert!(!session.finish_submit(ticket.epoch));
        session.hydrate(fresh.epoch, &sample_record());
        assert!(!session.submitting, "begin already reset the flag");
    }

    #[test]
    fn test_scheduled_return_timing() {
        let mut session = EditSession::new();
        let ticket = session.begin(Some(7)).unwrap();
        session.hydrate(ticket.epoch, &sample_record());

        let t0 = Instant::now();
        session.schedule_return(t0);
        assert!(session.return_pending());
        assert!(!session.take_due_return(t0), "never fires synchronously");
        assert!(!session.take_due_return(t0 + Duration::from_millis(500)));
        assert!(session.take_due_return(t0 + RETURN_DELAY));
        assert!(!session.return_pending(), "consumed once due");
    }

    #[test]
    fn test_reopen_drops_pending_return() {
        let mut session = EditSession::new();
        let ticket = session.begin(Some(7)).unwrap();
        session.hydrate(ticket.epoch, &sample_record());

        let t0 = Instant::now();
        session.schedule_return(t0);
        session.begin(Some(8)).unwrap();
        assert!(!session.return_pending());
        assert!(!session.take_due_return(t0 + RETURN_DELAY));
    }
}
