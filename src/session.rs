//! Read-only identity of the signed-in operator.

use crate::config::UserConfig;

/// The operator identity, resolved once at startup from the `[user]` config
/// table and passed read-only to anything that displays it.
///
/// Lifecycle: the sign-in flow (not part of this client) writes the table,
/// sign-out clears it. Nothing in this client mutates the identity; an
/// absent table simply renders as signed-out.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub designation: String,
}

impl CurrentUser {
    /// Resolve the operator from config, if anyone is signed in.
    pub fn from_config(user: Option<&UserConfig>) -> Option<Self> {
        user.map(|u| Self {
            id: u.id,
            name: u.name.clone(),
            email: u.email.clone(),
            designation: u.designation.clone(),
        })
    }

    /// One-line label for the status bar.
    pub fn status_label(&self) -> String {
        format!("{} ({})", self.name, self.designation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_out_resolves_to_none() {
        assert!(CurrentUser::from_config(None).is_none());
    }

    #[test]
    fn test_from_config_copies_identity() {
        let user = UserConfig {
            id: 3,
            name: "Asha Rao".to_string(),
            email: "a@x.com".to_string(),
            designation: "HR Manager".to_string(),
        };
        let current = CurrentUser::from_config(Some(&user)).unwrap();
        assert_eq!(current.id, 3);
        assert_eq!(current.status_label(), "Asha Rao (HR Manager)");
    }
}
