//! Assignment upload validation.

use std::borrow::Cow;

use base64::alphabet;
use base64::engine::general_purpose::GeneralPurposeConfig;
use base64::engine::{DecodePaddingMode, GeneralPurpose};
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::AssignmentConfig;

/// Standard alphabet, padding optional, stray trailing bits ignored
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Upload as received; absent fields deserialize as blank
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubmissionBody {
    pub student_id: String,
    pub course_id: String,
    pub filename: String,
    /// Raw text or base64
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub accepted: bool,
    pub message: String,
}

impl SubmissionResult {
    pub fn accepted() -> Self {
        Self {
            accepted: true,
            message: "submission accepted".to_string(),
        }
    }

    pub fn rejected(error: &SubmissionError) -> Self {
        Self {
            accepted: false,
            message: error.to_string(),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("{0} must not be blank")]
    Blank(&'static str),

    #[error("filename must be at most {0} characters")]
    FilenameTooLong(usize),

    #[error("studentId/courseId too long")]
    IdTooLong,

    #[error("file extension not allowed: {0}")]
    ExtensionNotAllowed(String),

    #[error("invalid filename")]
    InvalidFilename,

    #[error("empty content")]
    EmptyContent,

    #[error("file too large; max {0}MB")]
    TooLarge(usize),
}

#[derive(Debug, Clone)]
pub struct AssignmentService {
    config: AssignmentConfig,
}

impl AssignmentService {
    pub fn new(config: AssignmentConfig) -> Self {
        Self { config }
    }

    /// Check an upload; nothing is persisted.
    pub fn validate_and_store(&self, submission: &SubmissionBody) -> Result<(), SubmissionError> {
        let fields = [
            ("studentId", &submission.student_id),
            ("courseId", &submission.course_id),
            ("filename", &submission.filename),
            ("content", &submission.content),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(SubmissionError::Blank(*name));
        }

        if submission.filename.chars().count() > self.config.max_filename_len {
            return Err(SubmissionError::FilenameTooLong(self.config.max_filename_len));
        }

        if submission.student_id.chars().count() > self.config.max_id_len
            || submission.course_id.chars().count() > self.config.max_id_len
        {
            return Err(SubmissionError::IdTooLong);
        }

        let ext = extension(&submission.filename);
        if !self.config.allowed_extensions.iter().any(|allowed| *allowed == ext) {
            return Err(SubmissionError::ExtensionNotAllowed(ext));
        }

        if submission.filename.contains("..") || submission.filename.contains('/') {
            return Err(SubmissionError::InvalidFilename);
        }

        let bytes = decode_content(&submission.content);
        if bytes.is_empty() {
            return Err(SubmissionError::EmptyContent);
        }
        if bytes.len() > self.config.max_content_bytes {
            return Err(SubmissionError::TooLarge(
                self.config.max_content_bytes / (1024 * 1024),
            ));
        }

        Ok(())
    }
}

/// Lower-cased text after the last dot, empty if there is none or it ends the name
fn extension(filename: &str) -> String {
    match filename.rfind('.') {
        Some(dot) if dot + 1 < filename.len() => filename[dot + 1..].to_lowercase(),
        _ => String::new(),
    }
}

/// Base64 payloads are decoded; anything else counts as raw UTF-8 text
fn decode_content(content: &str) -> Cow<'_, [u8]> {
    match LENIENT_BASE64.decode(content) {
        Ok(bytes) => Cow::Owned(bytes),
        Err(_) => Cow::Borrowed(content.as_bytes()),
    }
}
