//! # Admin Payloads
//!
//! Mock data behind the bearer-protected `/admin` endpoints. Everything here
//! is demo fixture material except `total_data_points` and `system_uptime`,
//! which read live server state.

use chrono::{Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::AppState;

#[derive(Serialize)]
pub struct DashboardResponse {
    pub total_users: u32,
    pub active_layers: usize,
    pub total_data_points: usize,
    pub alerts_sent_today: u32,
    pub system_uptime: String,
}

#[derive(Serialize)]
pub struct AdminUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: chrono::DateTime<Utc>,
    pub is_active: bool,
}

#[derive(Serialize)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
}

#[derive(Serialize)]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub message: String,
    pub published_at: chrono::DateTime<Utc>,
}

#[derive(Serialize)]
pub struct ContentResponse {
    pub faqs: Vec<Faq>,
    pub announcements: Vec<Announcement>,
    pub total_content_items: usize,
}

#[derive(Serialize)]
pub struct SentAlert {
    pub id: String,
    pub title: String,
    pub severity: String,
    pub sent_at: chrono::DateTime<Utc>,
    pub recipients: u32,
}

#[derive(Serialize)]
pub struct AlertsResponse {
    pub recent_alerts: Vec<SentAlert>,
    pub total_alerts_sent: usize,
    pub total_recipients_reached: u32,
}

#[derive(Serialize)]
pub struct AuditLog {
    pub id: String,
    pub action: String,
    pub user: String,
    pub timestamp: chrono::DateTime<Utc>,
    pub details: String,
}

#[derive(Serialize)]
pub struct AuditResponse {
    pub logs: Vec<AuditLog>,
    pub total_logs: usize,
}

#[derive(Deserialize)]
pub struct BroadcastRequest {
    pub title: String,
    pub message: String,
    pub severity: String,
    pub target_area: String,
}

#[derive(Serialize)]
pub struct BroadcastResponse {
    pub success: bool,
    pub alert_id: String,
    pub message: String,
    pub estimated_recipients: u32,
}

pub fn dashboard(state: &AppState) -> DashboardResponse {
    DashboardResponse {
        total_users: 15_847,
        active_layers: crate::layers::ALL_LAYERS.len(),
        total_data_points: state.store.total_points(),
        alerts_sent_today: 42,
        system_uptime: format_uptime(state.started_at.elapsed().as_secs()),
    }
}

fn format_uptime(total_secs: u64) -> String {
    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    format!("{days}d {hours}h {minutes}m")
}

pub fn users() -> Vec<AdminUser> {
    let fixtures = [
        ("idot_admin", "admin@idot.illinois.gov", true),
        ("j.martinez", "j.martinez@idot.illinois.gov", true),
        ("s.chen", "s.chen@idot.illinois.gov", true),
        ("traffic_ops", "traffic.ops@idot.illinois.gov", true),
        ("k.williams", "k.williams@idot.illinois.gov", false),
    ];

    fixtures
        .iter()
        .enumerate()
        .map(|(i, (username, email, is_active))| AdminUser {
            id: Uuid::new_v4().to_string(),
            username: username.to_string(),
            email: email.to_string(),
            created_at: Utc::now() - Duration::days(30 * (i as i64 + 1)),
            is_active: *is_active,
        })
        .collect()
}

pub fn content() -> ContentResponse {
    let faqs = vec![
        Faq {
            id: Uuid::new_v4().to_string(),
            question: "How often is traffic data updated?".to_string(),
            answer: "Incident data refreshes every 30 seconds; other layers update daily."
                .to_string(),
        },
        Faq {
            id: Uuid::new_v4().to_string(),
            question: "Does GAIMA work outside Illinois?".to_string(),
            answer: "Coverage is limited to Illinois state routes and interstates.".to_string(),
        },
        Faq {
            id: Uuid::new_v4().to_string(),
            question: "Are the look-ahead alerts a substitute for 911?".to_string(),
            answer: "No. In an emergency always call 911.".to_string(),
        },
    ];

    let announcements = vec![
        Announcement {
            id: Uuid::new_v4().to_string(),
            title: "Winter operations active".to_string(),
            message: "Salt trucks and plows are deployed statewide. Check the winter layer before traveling.".to_string(),
            published_at: Utc::now() - Duration::hours(6),
        },
        Announcement {
            id: Uuid::new_v4().to_string(),
            title: "New EV charging layer".to_string(),
            message: "Charging station availability is now shown on the map.".to_string(),
            published_at: Utc::now() - Duration::days(3),
        },
    ];

    let total_content_items = faqs.len() + announcements.len();
    ContentResponse {
        faqs,
        announcements,
        total_content_items,
    }
}

pub fn alerts() -> AlertsResponse {
    let recent_alerts = vec![
        SentAlert {
            id: Uuid::new_v4().to_string(),
            title: "I-80 full closure near Joliet".to_string(),
            severity: "high".to_string(),
            sent_at: Utc::now() - Duration::hours(2),
            recipients: 12_450,
        },
        SentAlert {
            id: Uuid::new_v4().to_string(),
            title: "Dense fog advisory, central Illinois".to_string(),
            severity: "medium".to_string(),
            sent_at: Utc::now() - Duration::hours(9),
            recipients: 8_230,
        },
        SentAlert {
            id: Uuid::new_v4().to_string(),
            title: "Lane shift on I-55 southbound".to_string(),
            severity: "low".to_string(),
            sent_at: Utc::now() - Duration::days(1),
            recipients: 4_017,
        },
    ];

    let total_alerts_sent = recent_alerts.len();
    let total_recipients_reached = recent_alerts.iter().map(|a| a.recipients).sum();

    AlertsResponse {
        recent_alerts,
        total_alerts_sent,
        total_recipients_reached,
    }
}

pub fn audit() -> AuditResponse {
    let fixtures = [
        ("login", "idot_admin", "Successful admin login"),
        ("broadcast", "idot_admin", "Sent statewide emergency alert"),
        ("content_update", "s.chen", "Edited FAQ: winter operations"),
        ("user_update", "j.martinez", "Deactivated account k.williams"),
    ];

    let logs: Vec<AuditLog> = fixtures
        .iter()
        .enumerate()
        .map(|(i, (action, user, details))| AuditLog {
            id: Uuid::new_v4().to_string(),
            action: action.to_string(),
            user: user.to_string(),
            timestamp: Utc::now() - Duration::hours(i as i64 * 4),
            details: details.to_string(),
        })
        .collect();

    let total_logs = logs.len();
    AuditResponse { logs, total_logs }
}

pub fn broadcast(request: &BroadcastRequest) -> BroadcastResponse {
    let mut rng = rand::thread_rng();

    BroadcastResponse {
        success: true,
        alert_id: Uuid::new_v4().to_string(),
        message: format!(
            "Alert '{}' broadcast to {} ({} severity)",
            request.title, request.target_area, request.severity
        ),
        estimated_recipients: rng.gen_range(5_000..=20_000),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_totals_add_up() {
        let response = content();
        assert_eq!(
            response.total_content_items,
            response.faqs.len() + response.announcements.len()
        );
        assert!(!response.faqs.is_empty());
        assert!(!response.announcements.is_empty());
    }

    #[test]
    fn test_alert_totals_add_up() {
        let response = alerts();
        assert_eq!(response.total_alerts_sent, response.recent_alerts.len());
        assert_eq!(
            response.total_recipients_reached,
            response.recent_alerts.iter().map(|a| a.recipients).sum::<u32>()
        );
    }

    #[test]
    fn test_audit_totals_add_up() {
        let response = audit();
        assert_eq!(response.total_logs, response.logs.len());
        assert!(!response.logs.is_empty());
    }

    #[test]
    fn test_broadcast_echoes_request() {
        let response = broadcast(&BroadcastRequest {
            title: "Test Emergency Alert".to_string(),
            message: "Test body".to_string(),
            severity: "high".to_string(),
            target_area: "statewide".to_string(),
        });

        assert!(response.success);
        assert!(!response.alert_id.is_empty());
        assert!(response.message.contains("Test Emergency Alert"));
        assert!(response.message.contains("statewide"));
        assert!(response.estimated_recipients >= 5_000);
    }

    #[test]
    fn test_uptime_formatting() {
        assert_eq!(format_uptime(0), "0d 0h 0m");
        assert_eq!(format_uptime(86_400 + 3_600 + 60), "1d 1h 1m");
        assert_eq!(format_uptime(2 * 86_400 + 5 * 3_600 + 59 * 60), "2d 5h 59m");
    }
}
