//! Data models for employee records exchanged with the HR portal.

pub mod employee;

pub use employee::{EmployeePayload, EmployeeRecord, Gender, Role, UpdateAck};
