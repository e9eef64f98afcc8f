//! The helpdesk assistant.
//!
//! # Data Flow
//! ```text
//! /ask message
//!     → intent.rs (keyword table → Intent)
//!     → Assistant::reply (employee lookup / booking write when needed)
//!     → replies.rs (reply text)
//! ```

pub mod handlers;
pub mod intent;
pub mod replies;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use chrono::{Local, NaiveDateTime};

use crate::http::server::AppState;
use crate::observability::metrics;
use crate::store::{Booking, DataStore, StoreResult};

pub use intent::{detect_intent, Intent};

/// Answers chat messages against the data store.
pub struct Assistant {
    store: Arc<DataStore>,
}

impl Assistant {
    pub fn new(store: Arc<DataStore>) -> Self {
        Self { store }
    }

    /// Reply to `message` on behalf of the employee identified by `email`.
    pub fn reply(&self, message: &str, email: &str) -> StoreResult<String> {
        self.reply_at(message, email, Local::now().naive_local())
    }

    fn reply_at(&self, message: &str, email: &str, now: NaiveDateTime) -> StoreResult<String> {
        let intent = detect_intent(message);
        metrics::record_intent(intent.as_str());
        tracing::debug!(intent = %intent, email = %email, "Detected intent");

        if intent.needs_employee_record() {
            let Some(employee) = self.store.employee(email)? else {
                return Ok(replies::NO_EMPLOYEE_RECORD.to_string());
            };
            let reply = match intent {
                Intent::LeaveInfo => replies::leave_balance(&employee),
                Intent::EmailStatus => replies::email_status(&employee).to_string(),
                _ => replies::attendance(&employee),
            };
            return Ok(reply);
        }

        let reply = match intent {
            Intent::PasswordReset => replies::PASSWORD_RESET.to_string(),
            Intent::PolicyLookup => replies::policy_summary(&self.store.load_policies()?),
            Intent::MeetingRoom => {
                let time = now.format("%Y-%m-%d %H:%M").to_string();
                self.store.append_booking(Booking {
                    room: replies::MEETING_ROOM.to_string(),
                    time: time.clone(),
                })?;
                tracing::info!(room = replies::MEETING_ROOM, time = %time, "Meeting room booked");
                replies::meeting_booked(&time)
            }
            Intent::WifiInfo => replies::WIFI_INFO.to_string(),
            Intent::IdCard => replies::ID_CARD.to_string(),
            Intent::SalarySlip => replies::SALARY_SLIP.to_string(),
            Intent::SupportTicket => replies::SUPPORT_TICKET.to_string(),
            Intent::HolidayInfo => replies::HOLIDAY_INFO.to_string(),
            Intent::Cafeteria => replies::cafeteria_menu(),
            Intent::TravelRequest => replies::TRAVEL_REQUEST.to_string(),
            Intent::AssetRequest => replies::ASSET_REQUEST.to_string(),
            Intent::WfhRequest => replies::WFH_REQUEST.to_string(),
            Intent::LeaveInfo | Intent::EmailStatus | Intent::Attendance | Intent::Unknown => {
                replies::UNKNOWN.to_string()
            }
        };
        Ok(reply)
    }
}

/// Chat routes. All of them sit behind the session gate.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::index))
        .route("/ask", post(handlers::ask))
        .route("/reset", post(handlers::reset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::ADMIN_EMAIL;
    use chrono::NaiveDate;

    fn assistant() -> (tempfile::TempDir, Arc<DataStore>, Assistant) {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(DataStore::open(dir.path()).unwrap());
        let assistant = Assistant::new(store.clone());
        (dir, store, assistant)
    }

    #[test]
    fn test_employee_lookups() {
        let (_dir, _store, assistant) = assistant();

        assert_eq!(
            assistant.reply("leave balance", ADMIN_EMAIL).unwrap(),
            "You have 10 casual, 6 sick and 12 earned leaves."
        );
        assert_eq!(
            assistant.reply("attendance", ADMIN_EMAIL).unwrap(),
            "Today's attendance: Present."
        );
        assert_eq!(
            assistant.reply("leave balance", "ghost@example.com").unwrap(),
            replies::NO_EMPLOYEE_RECORD
        );
    }

    #[test]
    fn test_meeting_booking_is_persisted() {
        let (_dir, store, assistant) = assistant();
        let now = NaiveDate::from_ymd_opt(2026, 3, 4)
            .unwrap()
            .and_hms_opt(14, 5, 59)
            .unwrap();

        let reply = assistant.reply_at("book a room", ADMIN_EMAIL, now).unwrap();
        assert_eq!(reply, "Booked Conference Room A at 2026-03-04 14:05 (demo).");

        let bookings = store.load_bookings().unwrap();
        assert_eq!(
            bookings,
            vec![Booking {
                room: "Conference Room A".into(),
                time: "2026-03-04 14:05".into(),
            }]
        );
    }

    #[test]
    fn test_policy_lookup_reads_file() {
        let (_dir, _store, assistant) = assistant();
        let reply = assistant.reply("show policies", ADMIN_EMAIL).unwrap();
        assert!(reply.starts_with("Company policies summary:\n- Leave: "));
        assert!(reply.contains("\n- Work_From_Home: Work-from-home permitted"));
    }

    #[test]
    fn test_canned_and_unknown() {
        let (_dir, _store, assistant) = assistant();
        assert_eq!(assistant.reply("wifi", "").unwrap(), replies::WIFI_INFO);
        assert_eq!(assistant.reply("", ADMIN_EMAIL).unwrap(), replies::UNKNOWN);
        assert_eq!(assistant.reply("tell me a joke", ADMIN_EMAIL).unwrap(), replies::UNKNOWN);
    }
}
