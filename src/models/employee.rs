//! Employee wire types exchanged with the HR portal API.

use serde::{Deserialize, Serialize};

/// Gender as the portal stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    /// Parse the wire token; anything unrecognized falls back to Male,
    /// matching the portal's own default.
    pub fn from_wire(token: Option<&str>) -> Self {
        match token {
            Some("F") => Gender::Female,
            _ => Gender::Male,
        }
    }

    /// Human-readable label for the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// Account role as the portal stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ADMIN")]
    Admin,
    #[default]
    #[serde(rename = "USER")]
    User,
}

impl Role {
    /// Parse the wire token; anything unrecognized falls back to User.
    pub fn from_wire(token: Option<&str>) -> Self {
        match token {
            Some("ADMIN") => Role::Admin,
            _ => Role::User,
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::User => "User",
        }
    }
}

/// Employee record as served by the portal (canonical field names).
///
/// Every field is optional: the server omits nulls and older records carry
/// gaps. Legacy mobile-number spellings are normalized to `mobileNumber`
/// before this type is deserialized (see [`crate::api`]).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub id: Option<i64>,
    pub employee_name: Option<String>,
    pub email: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<String>,
    pub join_date: Option<String>,
    pub mobile_number: Option<String>,
    pub aadhaar_number: Option<String>,
    pub account_number: Option<String>,
    pub department: Option<String>,
    pub designation: Option<String>,
    pub previous_company: Option<String>,
    pub pf_number: Option<String>,
    pub salary: Option<f64>,
    pub address: Option<String>,
    pub permanent_address: Option<String>,
    pub role: Option<String>,
    pub active: Option<bool>,
}

/// Outbound update payload in the portal's DTO shape.
///
/// Always written with canonical field names; in particular the contact
/// number goes out as `mobileNumber` regardless of how it arrived.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    pub employee_name: String,
    pub email: String,
    pub gender: Gender,
    pub date_of_birth: String,
    pub join_date: String,
    pub mobile_number: String,
    pub aadhaar_number: String,
    pub account_number: String,
    pub department: String,
    pub designation: String,
    pub previous_company: String,
    pub pf_number: String,
    pub salary: f64,
    pub address: String,
    pub permanent_address: String,
    pub role: Role,
    pub active: bool,
}

/// Update response body.
///
/// Servers differ on what they return here; both fields are optional and an
/// absent success flag counts as success downstream (see [`crate::submit`]).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAck {
    pub success: Option<bool>,
    pub message: Option<String>,
}
