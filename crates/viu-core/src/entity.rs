//! # Entity Definitions
//!
//! Serde representations of the platform's persistent entities,
//! mirroring the PostgreSQL data model. Fields serialize in camelCase
//! to match the platform API; timestamps are UTC.
//!
//! These are plain data carriers: the shared library performs no
//! persistence. The small permission helpers (`Project::can_be_viewed_by`
//! and friends) encode ownership rules that both backend and frontends
//! need to agree on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::{
    ApprovalId, ArtworkId, FeedbackId, NotificationId, ProjectId, TaskId, UserId, VersionId,
};
use crate::status::{
    ApprovalKind, CommunicationPreference, FeedbackKind, FileKind, NotificationChannel,
    NotificationKind, Priority, ProjectStatus, ReviewStatus, SubscriptionPlan, TaskStatus,
    UserRole,
};

/// A platform account: designer, client, or admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: UserRole,
    pub plan: SubscriptionPlan,
    pub communication_preference: CommunicationPreference,
    pub active: bool,
    pub email_verified: bool,
    pub phone_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<UserSettings>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Per-user preferences, stored as a JSON column.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub theme: String,
    pub language: String,
    pub timezone: String,
    pub push_notifications: bool,
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub auto_approval: bool,
    pub date_format: String,
    pub time_format: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            language: "pt-BR".to_string(),
            timezone: "America/Sao_Paulo".to_string(),
            push_notifications: true,
            email_notifications: true,
            sms_notifications: false,
            auto_approval: false,
            date_format: "DD/MM/YYYY".to_string(),
            time_format: "HH:mm".to_string(),
        }
    }
}

/// A design project connecting one designer and one client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    /// Budget in cents of BRL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_cents: Option<i64>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub designer_id: UserId,
    pub client_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Only the designer and the client of a project may view it.
    pub fn can_be_viewed_by(&self, user_id: UserId) -> bool {
        self.designer_id == user_id || self.client_id == user_id
    }

    /// Only the client may approve artwork in the project.
    pub fn can_be_approved_by(&self, user_id: UserId) -> bool {
        self.client_id == user_id
    }
}

/// An artwork uploaded into a project, at a specific version.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub id: ArtworkId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// URL of the stored file.
    pub file_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    pub file_size: u64,
    pub file_kind: FileKind,
    pub mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<ArtworkDimensions>,
    pub version: u32,
    pub status: ReviewStatus,
    pub tags: Vec<String>,
    pub project_id: ProjectId,
    pub designer_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Artwork {
    /// Only the designer who uploaded the artwork may edit it.
    pub fn can_be_edited_by(&self, user_id: UserId) -> bool {
        self.designer_id == user_id
    }
}

/// One historical revision of an artwork. The artwork itself always
/// points at the latest version; feedback and approvals may reference
/// a specific one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkVersion {
    pub id: VersionId,
    pub artwork_id: ArtworkId,
    /// 1-based version number, monotonically increasing per artwork.
    pub number: u32,
    pub file_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    pub file_size: u64,
    pub mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<ArtworkDimensions>,
    /// What changed relative to the previous version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub uploaded_by: UserId,
    pub created_at: DateTime<Utc>,
}

/// Pixel dimensions of an uploaded artwork.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkDimensions {
    pub width: u32,
    pub height: u32,
    /// DPI, when the source format carries it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<u32>,
}

/// Feedback left on an artwork, optionally anchored to a canvas position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: FeedbackId,
    pub body: String,
    pub kind: FeedbackKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
    /// Canvas X coordinate for positional feedback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_x: Option<f64>,
    /// Canvas Y coordinate for positional feedback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_y: Option<f64>,
    pub resolved: bool,
    pub artwork_id: ArtworkId,
    pub author_id: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_duration_secs: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A client's approval decision on an artwork.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Approval {
    pub id: ApprovalId,
    pub kind: ApprovalKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Conditions attached to a conditional approval.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<String>,
    pub approved_at: DateTime<Utc>,
    pub artwork_id: ArtworkId,
    pub approver_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A work item inside a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spent_hours: Option<u32>,
    pub tags: Vec<String>,
    pub project_id: ProjectId,
    pub assignee_id: UserId,
    pub blocked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A notification delivered to a user over one channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub channel: NotificationChannel,
    pub read: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_at: Option<DateTime<Utc>>,
    /// Deep link to the related resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    pub user_id: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artwork_id: Option<ArtworkId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
