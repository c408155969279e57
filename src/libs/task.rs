//! Task entity and its field rules.
//!
//! A [`Task`] can only be built or changed through operations that validate
//! the title and description first, so an instance that exists is always
//! valid. Identity is handed in by the owner of the task (the store); the
//! entity never invents ids on its own, not even when it is rebuilt from a
//! [`TaskRecord`].
//!
//! ## Field rules
//!
//! - **Title**: must contain something other than whitespace and may be at
//!   most [`MAX_TITLE_LEN`] characters long. The length is counted on the
//!   title exactly as supplied, surrounding whitespace included.
//! - **Description**: optional (the empty string means "none") and at most
//!   [`MAX_DESCRIPTION_LEN`] characters long.
//!
//! Lengths are counted in characters (Unicode scalar values), not bytes.
//!
//! ## Usage
//!
//! ```rust
//! use todo_cli::libs::task::Task;
//!
//! let mut task = Task::new("1", "Buy milk", "")?;
//! task.mark_complete();
//! assert!(task.completed());
//! assert_eq!(task.to_string(), "[✓] 1 - Buy milk");
//! # Ok::<(), todo_cli::libs::task::ValidationError>(())
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// Longest accepted title, in characters.
pub const MAX_TITLE_LEN: usize = 200;

/// Longest accepted description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// Reasons a title or description is refused.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The title is empty or only whitespace.
    #[error("Task title cannot be empty")]
    EmptyTitle,

    /// The title is longer than [`MAX_TITLE_LEN`] characters.
    #[error("Task title cannot exceed {max} characters", max = MAX_TITLE_LEN)]
    TitleTooLong(usize),

    /// The description is longer than [`MAX_DESCRIPTION_LEN`] characters.
    #[error("Task description cannot exceed {max} characters", max = MAX_DESCRIPTION_LEN)]
    DescriptionTooLong(usize),
}

/// Errors raised while rebuilding a task from a [`TaskRecord`].
#[derive(Debug, Error)]
pub enum RecordError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("invalid timestamp '{value}' in field '{field}': {source}")]
    InvalidTimestamp {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("task {0} was updated before it was created")]
    UpdatedBeforeCreated(String),
}

/// Checks a title against the title rules.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    let len = title.chars().count();
    if len > MAX_TITLE_LEN {
        return Err(ValidationError::TitleTooLong(len));
    }
    Ok(())
}

/// Checks a description against the description rules.
pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    let len = description.chars().count();
    if len > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::DescriptionTooLong(len));
    }
    Ok(())
}

/// A single todo item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: String,
    title: String,
    description: String,
    completed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Builds a pending task stamped with the current time.
    pub fn new(id: impl Into<String>, title: &str, description: &str) -> Result<Self, ValidationError> {
        validate_title(title)?;
        validate_description(description)?;

        let now = Utc::now();
        Ok(Task {
            id: id.into(),
            title: title.to_string(),
            description: description.to_string(),
            completed: false,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn mark_complete(&mut self) {
        self.completed = true;
        self.touch();
    }

    pub fn mark_incomplete(&mut self) {
        self.completed = false;
        self.touch();
    }

    /// Replaces the title. A refused title leaves the task untouched.
    pub fn update_title(&mut self, title: &str) -> Result<(), ValidationError> {
        validate_title(title)?;
        self.title = title.to_string();
        self.touch();
        Ok(())
    }

    /// Replaces the description. A refused description leaves the task untouched.
    pub fn update_description(&mut self, description: &str) -> Result<(), ValidationError> {
        validate_description(description)?;
        self.description = description.to_string();
        self.touch();
        Ok(())
    }

    /// Refreshes `updated_at`. The clock may not move forward between two
    /// calls, so the timestamp is never allowed to go back.
    fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.updated_at);
    }

    /// Converts the task into its interchange form.
    pub fn to_record(&self) -> TaskRecord {
        TaskRecord {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            completed: self.completed,
            created_at: Some(format_timestamp(&self.created_at)),
            updated_at: Some(format_timestamp(&self.updated_at)),
        }
    }

    /// Rebuilds a task from its interchange form.
    ///
    /// The id is taken from the record as-is. Missing timestamps fall back to
    /// the current time; a missing `updated_at` is never earlier than
    /// `created_at`.
    pub fn from_record(record: TaskRecord) -> Result<Self, RecordError> {
        validate_title(&record.title)?;
        validate_description(&record.description)?;

        let now = Utc::now();
        let created_at = match record.created_at.as_deref() {
            Some(value) => parse_timestamp("created_at", value)?,
            None => now,
        };
        let updated_at = match record.updated_at.as_deref() {
            Some(value) => parse_timestamp("updated_at", value)?,
            None => now.max(created_at),
        };
        if updated_at < created_at {
            return Err(RecordError::UpdatedBeforeCreated(record.id));
        }

        Ok(Task {
            id: record.id,
            title: record.title,
            description: record.description,
            completed: record.completed,
            created_at,
            updated_at,
        })
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let status = if self.completed { "✓" } else { "○" };
        write!(f, "[{}] {} - {}", status, self.id, self.title)
    }
}

/// Plain field mapping of a [`Task`], for handing tasks to other tools.
///
/// Timestamps are RFC 3339 strings in UTC with full sub-second precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn parse_timestamp(field: &'static str, value: &str) -> Result<DateTime<Utc>, RecordError> {
    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|source| RecordError::InvalidTimestamp {
            field,
            value: value.to_string(),
            source,
        })
}
