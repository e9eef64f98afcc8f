//! First-run data for an empty data directory.

use crate::store::models::{
    BookingsFile, EmployeeRecord, Employees, EmployeesFile, LeaveBalance, Policies, PoliciesFile,
    UserRecord, Users, UsersFile,
};

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "Admin@123";
pub const ADMIN_EMPLOYEE_ID: &str = "EMP000001";

pub(crate) fn users() -> UsersFile {
    let mut users = Users::new();
    users.insert(
        ADMIN_EMAIL.to_string(),
        UserRecord {
            name: Some("Admin".to_string()),
            password: ADMIN_PASSWORD.to_string(),
            employee_id: ADMIN_EMPLOYEE_ID.to_string(),
        },
    );
    UsersFile { users }
}

pub(crate) fn employees() -> EmployeesFile {
    let mut employees = Employees::new();
    employees.insert(
        ADMIN_EMAIL.to_string(),
        EmployeeRecord {
            name: "Admin".to_string(),
            employee_id: ADMIN_EMPLOYEE_ID.to_string(),
            leave_balance: LeaveBalance::days(10, 6, 12),
            email_active: true,
            attendance_status: "Present".to_string(),
        },
    );
    EmployeesFile { employees }
}

pub(crate) fn policies() -> PoliciesFile {
    PoliciesFile {
        policies: Policies::from_pairs([
            (
                "leave",
                "Employees are eligible for 10 Casual Leaves, 6 Sick Leaves, and 12 Privilege Leaves per year. Leave requests must be submitted through HRMS at least one day in advance.",
            ),
            (
                "it",
                "Employees must use strong passwords, enable multi-factor authentication, and avoid sharing credentials. All devices must have company-approved antivirus and updated OS.",
            ),
            (
                "security",
                "Employees must wear ID cards visibly inside office premises. Lost/damaged ID cards must be reported to Admin.",
            ),
            (
                "work_from_home",
                "Work-from-home permitted with prior approval from reporting manager. Stable internet and VPN required.",
            ),
        ]),
    }
}

pub(crate) fn bookings() -> BookingsFile {
    BookingsFile::default()
}
