//! The canned dataset every simulated stage renders from.
//!
//! All "analysis results" in the product are fixture constants: the roster,
//! the platform event counts, the example signals, the peer feedback, and the
//! generated draft text. Keeping them in one module makes the stage views
//! pure functions of store + fixtures.

use chrono::{Duration, Utc};
use serde_json::json;
use uuid::Uuid;

use crate::model::{
    DataSource, Employee, HrMetrics, PeerFeedback, Platform, ReviewDraft, ReviewSection,
    Sentiment, SignalKind, WorkSignal,
};

/// Signal counts per platform over the 90-day analysis window.
pub const PLATFORM_COUNTS: [(Platform, u32); 4] = [
    (Platform::Slack, 156),
    (Platform::Jira, 23),
    (Platform::Github, 47),
    (Platform::Notion, 12),
];

/// Total signals across all platforms (238 in the canonical demo).
pub fn total_signal_count() -> u32 {
    PLATFORM_COUNTS.iter().map(|(_, n)| n).sum()
}

pub const ANALYSIS_PERIOD_DAYS: u32 = 90;
pub const AI_CONFIDENCE: u32 = 94;
pub const DEFAULT_RATING: &str = "Exceeds Expectations";

/// The three-employee demo roster.
pub fn employees() -> Vec<Employee> {
    vec![
        Employee::new(
            "Sarah Johnson",
            "sarah@company.com",
            "mgr1",
            "Engineering",
            "Senior Developer",
        ),
        Employee::new(
            "Mike Chen",
            "mike@company.com",
            "mgr1",
            "Design",
            "Product Designer",
        ),
        Employee::new(
            "Alex Rivera",
            "alex@company.com",
            "mgr2",
            "Product",
            "Product Manager",
        ),
    ]
}

/// The peers the mock Slack bot prompts for feedback.
pub fn peer_reviewers() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("Jessica Wu", "Senior Developer", "Engineering"),
        ("David Kim", "Product Manager", "Product"),
        ("Maria Santos", "UX Designer", "Design"),
    ]
}

/// Example normalized signals shown once ingestion completes.
pub fn work_signals(employee_id: Uuid) -> Vec<WorkSignal> {
    let now = Utc::now();
    vec![
        WorkSignal::new(
            employee_id,
            Platform::Github,
            SignalKind::Delivery,
            now - Duration::days(5),
            "Merged pull request #245: Implement user dashboard analytics",
        )
        .expect("fixture signal content is non-empty")
        .with_metadata("lines_changed", json!(342))
        .with_metadata("files_modified", json!(8)),
        WorkSignal::new(
            employee_id,
            Platform::Slack,
            SignalKind::Collaboration,
            now - Duration::days(3),
            "Helped team member debug authentication issue in #engineering",
        )
        .expect("fixture signal content is non-empty")
        .with_metadata("response_time", json!(15))
        .with_metadata("sentiment", json!("helpful")),
        WorkSignal::new(
            employee_id,
            Platform::Jira,
            SignalKind::Ownership,
            now - Duration::days(1),
            "Completed epic PROJ-123: User Experience Improvements",
        )
        .expect("fixture signal content is non-empty")
        .with_metadata("story_points", json!(13))
        .with_metadata("cycle_time", json!(8)),
    ]
}

/// The three anonymized peer responses.
pub fn peer_feedback(employee_id: Uuid) -> Vec<PeerFeedback> {
    vec![
        PeerFeedback::new(
            employee_id,
            "peer1",
            Sentiment::Positive,
            &["technical expertise", "collaboration", "mentoring"],
            "Great technical skills and always willing to help team members learn \
             new technologies. Very collaborative in code reviews.",
        ),
        PeerFeedback::new(
            employee_id,
            "peer2",
            Sentiment::Positive,
            &["communication", "project delivery", "initiative"],
            "Excellent communication skills and consistently delivers high-quality \
             work on time. Takes initiative on important projects.",
        ),
        PeerFeedback::new(
            employee_id,
            "peer3",
            Sentiment::Constructive,
            &["leadership", "cross-team collaboration"],
            "Strong technical contributor. Could benefit from more involvement in \
             cross-team initiatives and taking on leadership opportunities.",
        ),
    ]
}

fn draft_sections(employee_name: &str) -> Vec<ReviewSection> {
    vec![
        ReviewSection::new(
            "achievements",
            "Key Achievements",
            &format!(
                "{employee_name} has delivered exceptional results this quarter:\n\n\
                 - Successfully led the implementation of the new user dashboard, improving user engagement by 35%\n\
                 - Completed 23 Jira tickets with zero critical bugs, maintaining a 98% quality score\n\
                 - Mentored 2 junior developers, contributing to team knowledge sharing\n\
                 - Contributed 47 GitHub commits with consistent code quality and thorough documentation\n\
                 - Proactively identified and resolved 3 critical performance bottlenecks"
            ),
            &["github", "jira"],
        ),
        ReviewSection::new(
            "collaboration",
            "Collaboration & Communication",
            &format!(
                "{employee_name} demonstrates strong collaborative skills:\n\n\
                 - Actively participates in daily standups and sprint planning (156 Slack messages analyzed)\n\
                 - Provides constructive feedback in 12 code reviews, fostering team learning\n\
                 - Facilitates knowledge sharing through clear documentation and pair programming\n\
                 - Responds promptly to team requests and maintains a positive communication tone\n\
                 - Successfully coordinated with design and product teams on 3 major features"
            ),
            &["slack", "github"],
        ),
        ReviewSection::new(
            "growth",
            "Growth Areas & Development",
            "Areas for continued professional development:\n\n\
             - Consider taking on technical leadership opportunities for larger initiatives\n\
             - Expand involvement in architecture decisions and system design discussions\n\
             - Explore opportunities to present technical topics at team meetings\n\
             - Develop expertise in emerging technologies relevant to the tech stack\n\
             - Continue building cross-functional collaboration skills",
            &["jira", "notion"],
        ),
    ]
}

fn data_sources() -> Vec<DataSource> {
    let end = Utc::now();
    let start = end - Duration::days(ANALYSIS_PERIOD_DAYS as i64);
    PLATFORM_COUNTS
        .iter()
        .map(|(platform, count)| DataSource {
            platform: *platform,
            data_type: match platform {
                Platform::Slack => "messages",
                Platform::Jira => "tickets",
                Platform::Github => "commits",
                Platform::Notion => "documents",
                Platform::GoogleDocs => "documents",
            }
            .to_string(),
            count: *count,
            range_start: start,
            range_end: end,
        })
        .collect()
}

/// The draft the mock generation stage produces. Named-employee variant.
pub fn generated_draft_for(employee: &Employee, cycle_id: Uuid) -> ReviewDraft {
    ReviewDraft::new(
        employee.id,
        cycle_id,
        draft_sections(&employee.name),
        DEFAULT_RATING,
        data_sources(),
        AI_CONFIDENCE,
    )
}

/// Draft keyed only by ids, for tests and the export command.
pub fn generated_draft(employee_id: Uuid, cycle_id: Uuid) -> ReviewDraft {
    ReviewDraft::new(
        employee_id,
        cycle_id,
        draft_sections("Sarah Johnson"),
        DEFAULT_RATING,
        data_sources(),
        AI_CONFIDENCE,
    )
}

/// The HR dashboard metrics block.
pub fn hr_metrics() -> HrMetrics {
    HrMetrics {
        submission_rate: 87,
        average_completion_minutes: 18,
        peer_feedback_coverage: 94,
        nps_score: 8.2,
        api_uptime: 99.8,
        ai_accuracy: 91,
        generation_latency_secs: 2.3,
    }
}

/// Default meeting-invitation text for the scheduling screen.
pub fn invitation_message(employee_name: &str) -> String {
    format!(
        "Hi {employee_name},\n\n\
         Your performance review has been completed and approved. I'd like to \
         schedule a meeting to discuss the review in detail and share some \
         insights from my end.\n\n\
         Please confirm your availability for the proposed time, or suggest an \
         alternative that works better for you.\n\n\
         Best regards"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_signal_count() {
        assert_eq!(total_signal_count(), 238);
    }

    #[test]
    fn test_roster_is_three_known_employees() {
        let roster = employees();
        let names: Vec<&str> = roster.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Sarah Johnson", "Mike Chen", "Alex Rivera"]);
    }

    #[test]
    fn test_generated_draft_shape() {
        let draft = generated_draft(Uuid::new_v4(), Uuid::new_v4());
        let ids: Vec<&str> = draft.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["achievements", "collaboration", "growth"]);
        assert_eq!(draft.sources.len(), 4);
        assert_eq!(draft.overall_rating, DEFAULT_RATING);
    }

    #[test]
    fn test_signals_are_normalized_facts() {
        let signals = work_signals(Uuid::new_v4());
        assert_eq!(signals.len(), 3);
        assert!(signals.iter().all(|s| s.normalized));
    }
}
