//! Reply texts.

use crate::store::{EmployeeRecord, Policies};

pub const PASSWORD_RESET: &str =
    "Password reset queued; check your registered email in a few minutes.";
pub const WIFI_INFO: &str = "Office WiFi: SSID = CorpNet | Password = Secure@2025";
pub const ID_CARD: &str = "ID card request received. Admin will contact you.";
pub const SALARY_SLIP: &str = "Salary slip has been emailed to your registered email.";
pub const SUPPORT_TICKET: &str = "IT support ticket created; team will reach out.";
pub const HOLIDAY_INFO: &str = "Next holiday: Republic Day (January 26).";
pub const TRAVEL_REQUEST: &str = "Travel request submitted.";
pub const ASSET_REQUEST: &str = "Asset request logged with IT Asset Team.";
pub const WFH_REQUEST: &str = "Work-from-home request submitted for manager approval.";
pub const UNKNOWN: &str = "I didn't catch that. Try asking about your leave balance, booking a meeting room, or 'show policies'.";
pub const NO_EMPLOYEE_RECORD: &str =
    "Employee details not present in HR records. Please contact HR.";

pub const MEETING_ROOM: &str = "Conference Room A";

const CAFETERIA_MENU: [&str; 5] = [
    "Veg Biryani",
    "Paneer Butter Masala",
    "Curd Rice",
    "Salad",
    "Dosa (breakfast)",
];

pub fn policy_summary(policies: &Policies) -> String {
    let mut out = String::from("Company policies summary:\n");
    for (name, text) in policies.iter() {
        out.push_str(&format!("- {}: {}\n", title_case(name), text));
    }
    out
}

pub fn meeting_booked(time: &str) -> String {
    format!("Booked {} at {} (demo).", MEETING_ROOM, time)
}

pub fn leave_balance(employee: &EmployeeRecord) -> String {
    let lv = &employee.leave_balance;
    format!(
        "You have {} casual, {} sick and {} earned leaves.",
        lv.casual, lv.sick, lv.earned
    )
}

pub fn email_status(employee: &EmployeeRecord) -> &'static str {
    if employee.email_active {
        "Your corporate email is active."
    } else {
        "Your corporate email is pending activation."
    }
}

pub fn attendance(employee: &EmployeeRecord) -> String {
    format!("Today's attendance: {}.", employee.attendance_status)
}

pub fn cafeteria_menu() -> String {
    format!("Today's cafeteria menu:\n- {}", CAFETERIA_MENU.join("\n- "))
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if prev_alpha {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_alpha = c.is_alphabetic();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::LeaveBalance;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("work_from_home"), "Work_From_Home");
        assert_eq!(title_case("it"), "It");
        assert_eq!(title_case("HR rules"), "Hr Rules");
    }

    #[test]
    fn test_policy_summary() {
        let policies = Policies::from_pairs([("leave", "Ten days."), ("work_from_home", "Ask first.")]);
        assert_eq!(
            policy_summary(&policies),
            "Company policies summary:\n- Leave: Ten days.\n- Work_From_Home: Ask first.\n"
        );
    }

    #[test]
    fn test_employee_replies() {
        let mut emp = EmployeeRecord::new_hire("Meera", "EMP000007");
        emp.leave_balance = LeaveBalance::days(3, 1, 9);

        assert_eq!(leave_balance(&emp), "You have 3 casual, 1 sick and 9 earned leaves.");
        assert_eq!(email_status(&emp), "Your corporate email is active.");
        assert_eq!(attendance(&emp), "Today's attendance: Present.");

        emp.email_active = false;
        assert_eq!(email_status(&emp), "Your corporate email is pending activation.");
    }

    #[test]
    fn test_half_day_leave_balance() {
        let mut emp = EmployeeRecord::new_hire("Meera", "EMP000007");
        emp.leave_balance.earned = serde_json::Number::from_f64(1.5).unwrap();

        assert_eq!(leave_balance(&emp), "You have 6 casual, 2 sick and 1.5 earned leaves.");
    }

    #[test]
    fn test_cafeteria_menu() {
        assert_eq!(
            cafeteria_menu(),
            "Today's cafeteria menu:\n- Veg Biryani\n- Paneer Butter Masala\n- Curd Rice\n- Salad\n- Dosa (breakfast)"
        );
    }
}
