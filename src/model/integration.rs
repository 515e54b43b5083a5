//! Simulated tool integrations.
//!
//! Platforms are labels only — no OAuth scopes or API calls exist behind
//! them. A connection walks disconnected → connecting → connected and never
//! moves backwards; there is no disconnect or token refresh.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The workplace platforms ReviewGenie pretends to integrate with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Slack,
    Jira,
    Github,
    Notion,
    GoogleDocs,
}

impl Platform {
    /// All platforms, in the order the integration screen lists them.
    pub const ALL: [Platform; 5] = [
        Platform::Slack,
        Platform::Jira,
        Platform::Github,
        Platform::Notion,
        Platform::GoogleDocs,
    ];

    /// Display name shown in the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Slack => "Slack",
            Platform::Jira => "Jira",
            Platform::Github => "GitHub",
            Platform::Notion => "Notion",
            Platform::GoogleDocs => "Google Docs",
        }
    }

    /// Stable identifier used in action labels and serialized data.
    pub fn id(&self) -> &'static str {
        match self {
            Platform::Slack => "slack",
            Platform::Jira => "jira",
            Platform::Github => "github",
            Platform::Notion => "notion",
            Platform::GoogleDocs => "google_docs",
        }
    }

    /// What connecting this platform claims to unlock, per the setup screen.
    pub fn description(&self) -> &'static str {
        match self {
            Platform::Slack => {
                "Analyze communication patterns, collaboration frequency, and team interactions"
            }
            Platform::Jira => {
                "Track project contributions, ticket completion rates, and development velocity"
            }
            Platform::Github => "Review commits, pull requests, and code review participation",
            Platform::Notion => {
                "Review documentation contributions, meeting notes, and knowledge sharing"
            }
            Platform::GoogleDocs => {
                "Analyze document collaboration, editing contributions, and content creation"
            }
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for Platform {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "slack" => Ok(Platform::Slack),
            "jira" => Ok(Platform::Jira),
            "github" => Ok(Platform::Github),
            "notion" => Ok(Platform::Notion),
            "google_docs" | "google-docs" => Ok(Platform::GoogleDocs),
            _ => anyhow::bail!(
                "Unknown platform '{}'. Valid values: slack, jira, github, notion, google_docs",
                s
            ),
        }
    }
}

/// Connection lifecycle of a simulated integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

impl std::fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionState::Disconnected => write!(f, "Not connected"),
            ConnectionState::Connecting => write!(f, "Connecting..."),
            ConnectionState::Connected => write!(f, "Connected"),
        }
    }
}

/// A simulated connection to one workplace platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolIntegration {
    pub platform: Platform,
    pub state: ConnectionState,
    /// Opaque mock token; present once connected, never refreshed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sync: Option<DateTime<Utc>>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl ToolIntegration {
    /// Create a disconnected integration for a platform.
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            state: ConnectionState::Disconnected,
            token: None,
            last_sync: None,
            permissions: Vec::new(),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.state == ConnectionState::Connected
    }

    /// Start the mock connect handshake. Idempotent: once connected (or
    /// already connecting) this is a no-op and returns `false`.
    pub fn begin_connect(&mut self) -> bool {
        if self.state != ConnectionState::Disconnected {
            return false;
        }
        self.state = ConnectionState::Connecting;
        true
    }

    /// Complete the handshake: mint a mock token and record the sync time.
    /// A no-op unless the integration is mid-connect.
    pub fn finish_connect(&mut self) -> bool {
        if self.state != ConnectionState::Connecting {
            return false;
        }
        self.state = ConnectionState::Connected;
        self.token = Some(format!("mock-token-{}", self.platform.id()));
        self.last_sync = Some(Utc::now());
        self.permissions = vec!["read:activity".to_string(), "read:profile".to_string()];
        true
    }
}
