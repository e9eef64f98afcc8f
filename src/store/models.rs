//! Typed shapes of the four JSON documents.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A login account, keyed by lower-cased email in `users.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Absent for hand-edited entries; the email stands in for it then.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub password: String,
    #[serde(default)]
    pub employee_id: String,
}

/// Remaining leave days by category.
///
/// Counts keep their JSON form so half days (`1.5`) load and whole days print
/// without a fractional part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    pub casual: Number,
    pub sick: Number,
    pub earned: Number,
}

impl LeaveBalance {
    pub fn days(casual: u32, sick: u32, earned: u32) -> Self {
        Self {
            casual: casual.into(),
            sick: sick.into(),
            earned: earned.into(),
        }
    }
}

impl Default for LeaveBalance {
    fn default() -> Self {
        Self::days(0, 0, 0)
    }
}

/// An HR record, keyed by lower-cased email in `employees.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub name: String,
    pub employee_id: String,
    #[serde(default)]
    pub leave_balance: LeaveBalance,
    #[serde(default)]
    pub email_active: bool,
    #[serde(default = "unknown_attendance")]
    pub attendance_status: String,
}

fn unknown_attendance() -> String {
    "Unknown".to_string()
}

impl EmployeeRecord {
    /// The record created for a self-registered user.
    pub fn new_hire(name: &str, employee_id: &str) -> Self {
        Self {
            name: name.to_string(),
            employee_id: employee_id.to_string(),
            leave_balance: LeaveBalance::days(6, 2, 4),
            email_active: true,
            attendance_status: "Present".to_string(),
        }
    }
}

/// A meeting room reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub room: String,
    pub time: String,
}

pub type Users = BTreeMap<String, UserRecord>;
pub type Employees = BTreeMap<String, EmployeeRecord>;

/// Policy texts keyed by short name, in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Policies(serde_json::Map<String, serde_json::Value>);

impl Policies {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(name, text)| (name.to_string(), serde_json::Value::from(text)))
                .collect(),
        )
    }

    /// Iterate `(name, text)` pairs. Non-string entries are skipped.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .filter_map(|(name, text)| text.as_str().map(|text| (name.as_str(), text)))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// On-disk envelopes. Each file wraps its payload in a single named key.

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct UsersFile {
    pub users: Users,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct EmployeesFile {
    pub employees: Employees,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct PoliciesFile {
    pub policies: Policies,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct BookingsFile {
    pub records: Vec<Booking>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_missing_fields_default() {
        let emp: EmployeeRecord =
            serde_json::from_str(r#"{"name": "Ravi", "employee_id": "EMP000042"}"#).unwrap();

        assert_eq!(emp.leave_balance, LeaveBalance::default());
        assert!(!emp.email_active);
        assert_eq!(emp.attendance_status, "Unknown");
    }

    #[test]
    fn test_fractional_leave_balance_loads() {
        let file: EmployeesFile = serde_json::from_str(
            r#"{"employees": {"a@b.co": {"name": "A", "employee_id": "EMP000007",
                "leave_balance": {"casual": 10, "sick": 0.5, "earned": 1.5}}}}"#,
        )
        .unwrap();

        let balance = &file.employees["a@b.co"].leave_balance;
        assert_eq!(balance.casual.to_string(), "10");
        assert_eq!(balance.sick.to_string(), "0.5");
        assert_eq!(balance.earned.to_string(), "1.5");
    }

    #[test]
    fn test_user_without_name_loads() {
        let file: UsersFile = serde_json::from_str(
            r#"{"users": {"a@b.co": {"password": "x", "employee_id": "EMP000003"}}}"#,
        )
        .unwrap();
        assert_eq!(file.users["a@b.co"].name, None);

        let text = serde_json::to_string(&file).unwrap();
        assert!(!text.contains("name"));
    }

    #[test]
    fn test_policies_keep_file_order() {
        let file: PoliciesFile =
            serde_json::from_str(r#"{"policies": {"zeta": "z", "alpha": "a", "mid": "m"}}"#)
                .unwrap();

        let names: Vec<&str> = file.policies.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }
}
