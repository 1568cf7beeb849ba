//! Task values placed on the board.

use super::{BoardValueError, ColumnId, Priority, Tag, TaskId, Title};
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Person responsible for a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AssigneeRecord")]
pub struct Assignee {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,
}

#[derive(Deserialize)]
struct AssigneeRecord {
    name: String,
    #[serde(default)]
    avatar: Option<String>,
}

impl TryFrom<AssigneeRecord> for Assignee {
    type Error = BoardValueError;

    fn try_from(record: AssigneeRecord) -> Result<Self, Self::Error> {
        let assignee = Self::new(record.name)?;
        Ok(match record.avatar {
            Some(avatar) => assignee.with_avatar(avatar),
            None => assignee,
        })
    }
}

impl Assignee {
    /// Creates an assignee with the given display name.
    ///
    /// # Errors
    ///
    /// Returns [`BoardValueError::EmptyAssigneeName`] when the name is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, BoardValueError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardValueError::EmptyAssigneeName);
        }
        Ok(Self {
            name: trimmed.to_owned(),
            avatar: None,
        })
    }

    /// Sets the avatar reference.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the avatar reference, if any.
    #[must_use]
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }
}

/// Task data supplied by the host before the task is placed in a column.
///
/// A draft carries no status; placing it in a column stamps the column's
/// identifier as the status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    id: TaskId,
    title: Title,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    assignee: Option<Assignee>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    due_date: Option<NaiveDate>,
    #[serde(default)]
    priority: Priority,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    tags: BTreeSet<Tag>,
}

impl TaskDraft {
    /// Creates a draft with the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`BoardValueError::EmptyTitle`] when the title is blank.
    pub fn new(id: TaskId, title: impl Into<String>) -> Result<Self, BoardValueError> {
        Ok(Self {
            id,
            title: Title::new(title)?,
            description: None,
            assignee: None,
            due_date: None,
            priority: Priority::default(),
            tags: BTreeSet::new(),
        })
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: Assignee) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Adds tags. Duplicates collapse.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.extend(tags);
        self
    }

    /// Returns the draft's task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Places the draft in a column, producing a task whose status is the
    /// column identifier.
    pub(crate) fn place_in(self, column_id: ColumnId) -> Task {
        Task {
            id: self.id,
            status: column_id,
            title: self.title,
            description: self.description,
            assignee: self.assignee,
            due_date: self.due_date,
            priority: self.priority,
            tags: self.tags,
        }
    }
}

/// A task on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    status: ColumnId,
    title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    assignee: Option<Assignee>,
    #[serde(skip_serializing_if = "Option::is_none")]
    due_date: Option<NaiveDate>,
    priority: Priority,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    tags: BTreeSet<Tag>,
}

impl Task {
    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the identifier of the column currently holding the task.
    #[must_use]
    pub const fn status(&self) -> &ColumnId {
        &self.status
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<&Assignee> {
        self.assignee.as_ref()
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the tags in sorted order.
    #[must_use]
    pub const fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Returns whether the task carries the given tag.
    #[must_use]
    pub fn has_tag(&self, label: &str) -> bool {
        self.tags.iter().any(|tag| tag.as_str() == label.trim())
    }

    /// Returns whether the due date lies strictly before today (UTC).
    ///
    /// Tasks without a due date are never overdue.
    #[must_use]
    pub fn is_overdue(&self, clock: &impl Clock) -> bool {
        self.due_date
            .is_some_and(|due| due < clock.utc().date_naive())
    }

    /// Moves the task under a new status. Only the board calls this, so the
    /// status always tracks the owning column.
    pub(crate) fn restamp(&mut self, column_id: ColumnId) {
        self.status = column_id;
    }
}
