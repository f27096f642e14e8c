//! # Platform Limit Tables
//!
//! Constant tables shared by the validation schemas, the upload
//! pipeline, and the frontends. Values mirror the platform database
//! column constraints; changing one here changes what every service
//! accepts.

/// Field length and count limits, grouped by entity.
pub mod field {
    /// Minimum user display-name length.
    pub const NAME_MIN_LEN: usize = 2;
    /// Maximum user display-name length.
    pub const NAME_MAX_LEN: usize = 100;
    /// Maximum email address length.
    pub const EMAIL_MAX_LEN: usize = 255;
    /// Minimum email address length.
    pub const EMAIL_MIN_LEN: usize = 5;
    /// Minimum password length.
    pub const PASSWORD_MIN_LEN: usize = 8;
    /// Maximum password length.
    pub const PASSWORD_MAX_LEN: usize = 128;
    /// Maximum phone number length (formatted).
    pub const PHONE_MAX_LEN: usize = 20;

    /// Maximum project name length.
    pub const PROJECT_NAME_MAX_LEN: usize = 255;
    /// Maximum project description length.
    pub const PROJECT_DESCRIPTION_MAX_LEN: usize = 1000;

    /// Maximum artwork title length.
    pub const ARTWORK_TITLE_MAX_LEN: usize = 255;
    /// Maximum artwork description length.
    pub const ARTWORK_DESCRIPTION_MAX_LEN: usize = 1000;

    /// Maximum feedback body length.
    pub const FEEDBACK_BODY_MAX_LEN: usize = 2000;

    /// Maximum task title length.
    pub const TASK_TITLE_MAX_LEN: usize = 255;
    /// Maximum task description length.
    pub const TASK_DESCRIPTION_MAX_LEN: usize = 1000;
    /// Maximum estimated hours on a task.
    pub const TASK_MAX_HOURS: u32 = 1000;

    /// Maximum notification title length.
    pub const NOTIFICATION_TITLE_MAX_LEN: usize = 255;
    /// Maximum notification message length.
    pub const NOTIFICATION_MESSAGE_MAX_LEN: usize = 1000;

    /// Maximum URL length accepted anywhere.
    pub const URL_MAX_LEN: usize = 2048;

    /// Maximum length of a single tag.
    pub const TAG_MAX_LEN: usize = 50;
    /// Maximum number of tags on a project or artwork.
    pub const TAGS_MAX_COUNT: usize = 20;
    /// Maximum number of tags on a task.
    pub const TASK_TAGS_MAX_COUNT: usize = 10;
}

/// Monetary and numeric bounds.
pub mod amount {
    /// Maximum monetary amount in cents (R$ 9.999.999,99 * 100 ceiling).
    pub const MONEY_MAX_CENTS: i64 = 999_999_999;
    /// Maximum canvas coordinate for positional feedback.
    pub const COORDINATE_MAX: f64 = 10_000.0;
}

/// Pagination bounds for list endpoints.
pub mod pagination {
    /// Smallest accepted page size.
    pub const MIN_LIMIT: i64 = 1;
    /// Largest accepted page size.
    pub const MAX_LIMIT: i64 = 100;
    /// Page size applied when the caller does not send one.
    pub const DEFAULT_LIMIT: i64 = 20;
}

/// Upload ceilings.
pub mod upload {
    /// Maximum artwork file size: 100 MiB.
    pub const ARTWORK_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;
    /// Maximum audio-feedback file size: 50 MiB.
    pub const FEEDBACK_AUDIO_MAX_SIZE: u64 = 50 * 1024 * 1024;
    /// Maximum audio-feedback duration in seconds (5 minutes).
    pub const FEEDBACK_AUDIO_MAX_DURATION_SECS: u32 = 300;
    /// Maximum number of versions an artwork can accumulate.
    pub const ARTWORK_MAX_VERSIONS: u32 = 50;
    /// Maximum files accepted in a single upload request.
    pub const MAX_FILES_PER_REQUEST: usize = 10;
}

/// Supported MIME types per file kind.
pub mod mime {
    /// Image uploads.
    pub const IMAGES: &[&str] = &[
        "image/jpeg",
        "image/jpg",
        "image/png",
        "image/gif",
        "image/webp",
        "image/svg+xml",
    ];
    /// Video uploads.
    pub const VIDEOS: &[&str] = &[
        "video/mp4",
        "video/mpeg",
        "video/quicktime",
        "video/x-msvideo",
        "video/x-ms-wmv",
    ];
    /// Document uploads.
    pub const DOCUMENTS: &[&str] = &[
        "application/pdf",
        "application/msword",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "application/vnd.ms-powerpoint",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    ];
    /// Vector artwork uploads.
    pub const VECTORS: &[&str] = &[
        "image/svg+xml",
        "application/postscript",
        "application/illustrator",
    ];
    /// Audio feedback uploads.
    pub const AUDIO: &[&str] = &[
        "audio/mpeg",
        "audio/wav",
        "audio/ogg",
        "audio/mp4",
        "audio/webm",
    ];

    /// Returns true when `mime_type` is accepted for any upload category.
    pub fn is_supported(mime_type: &str) -> bool {
        [IMAGES, VIDEOS, DOCUMENTS, VECTORS, AUDIO]
            .iter()
            .any(|set| set.contains(&mime_type))
    }

    /// Maps a MIME type to its file kind, when supported.
    pub fn file_kind(mime_type: &str) -> Option<crate::status::FileKind> {
        use crate::status::FileKind;
        // Vector formats are checked first: SVG appears in both IMAGES
        // and VECTORS and the platform stores it as a vector.
        if VECTORS.contains(&mime_type) {
            Some(FileKind::Vector)
        } else if IMAGES.contains(&mime_type) {
            Some(FileKind::Image)
        } else if VIDEOS.contains(&mime_type) {
            Some(FileKind::Video)
        } else if DOCUMENTS.contains(&mime_type) {
            Some(FileKind::Document)
        } else {
            None
        }
    }
}

/// File extensions per kind, lowercase with leading dot.
pub mod extension {
    pub const IMAGES: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".webp", ".svg"];
    pub const VIDEOS: &[&str] = &[".mp4", ".mpeg", ".mov", ".avi", ".wmv"];
    pub const DOCUMENTS: &[&str] = &[".pdf", ".doc", ".docx", ".ppt", ".pptx"];
    pub const VECTORS: &[&str] = &[".svg", ".ai", ".eps"];
    pub const AUDIO: &[&str] = &[".mp3", ".wav", ".ogg", ".m4a", ".webm"];
}

/// Session and rate-limiting windows, in seconds.
pub mod time {
    /// Login attempts allowed inside one lockout window.
    pub const LOGIN_MAX_ATTEMPTS: u32 = 5;
    /// Login lockout window: 15 minutes.
    pub const LOGIN_LOCKOUT_SECS: u64 = 15 * 60;
    /// General rate-limit window: 15 minutes.
    pub const RATE_LIMIT_WINDOW_SECS: u64 = 15 * 60;
    /// Requests allowed inside one rate-limit window.
    pub const RATE_LIMIT_MAX_REQUESTS: u32 = 100;
    /// Session lifetime: 7 days.
    pub const SESSION_MAX_AGE_SECS: u64 = 7 * 24 * 60 * 60;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::FileKind;

    #[test]
    fn mime_lookup_classifies_svg_as_vector() {
        assert_eq!(mime::file_kind("image/svg+xml"), Some(FileKind::Vector));
        assert_eq!(mime::file_kind("image/png"), Some(FileKind::Image));
        assert_eq!(mime::file_kind("video/mp4"), Some(FileKind::Video));
        assert_eq!(mime::file_kind("application/pdf"), Some(FileKind::Document));
        assert_eq!(mime::file_kind("application/zip"), None);
    }

    #[test]
    fn supported_mime_covers_audio() {
        assert!(mime::is_supported("audio/mpeg"));
        assert!(!mime::is_supported("text/html"));
    }

    #[test]
    fn pagination_bounds_are_ordered() {
        assert!(pagination::MIN_LIMIT <= pagination::DEFAULT_LIMIT);
        assert!(pagination::DEFAULT_LIMIT <= pagination::MAX_LIMIT);
    }
}
