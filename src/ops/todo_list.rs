use std::fmt;

use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::model::task::{FilterMode, Task, TaskId};
use crate::ops::notice::Notice;

/// Error type for todo list operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TodoError {
    #[error("todo text is empty")]
    EmptyInput,
    #[error("This todo already exists")]
    DuplicateTask,
    #[error("todo not found: {0}")]
    NotFound(TaskId),
}

/// The task currently being renamed, with its unsaved text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: TaskId,
    pub draft: String,
}

/// Observer told about every state change of a [`TodoList`]
pub trait Subscriber {
    fn state_changed(&mut self, list: &TodoList);
}

impl<F: FnMut(&TodoList)> Subscriber for F {
    fn state_changed(&mut self, list: &TodoList) {
        self(list)
    }
}

/// Owns the task collection plus the transient UI state around it (filter,
/// edit session, pending deletion, queued notices). Every mutation goes
/// through a method here and ends by publishing to the subscriber.
#[derive(Default)]
pub struct TodoList {
    /// Insertion order; the view reverses it
    tasks: Vec<Task>,
    next_id: u64,
    filter: FilterMode,
    edit: Option<EditSession>,
    pending_delete: Option<TaskId>,
    notices: Vec<Notice>,
    subscriber: Option<Box<dyn Subscriber>>,
}

impl fmt::Debug for TodoList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoList")
            .field("tasks", &self.tasks)
            .field("next_id", &self.next_id)
            .field("filter", &self.filter)
            .field("edit", &self.edit)
            .field("pending_delete", &self.pending_delete)
            .field("notices", &self.notices)
            .field("subscribed", &self.subscriber.is_some())
            .finish()
    }
}

impl TodoList {
    pub fn new() -> Self {
        TodoList::default()
    }

    /// Register the single subscriber, replacing any previous one
    pub fn subscribe(&mut self, subscriber: Box<dyn Subscriber>) {
        self.subscriber = Some(subscriber);
    }

    fn publish(&mut self) {
        if let Some(mut subscriber) = self.subscriber.take() {
            subscriber.state_changed(self);
            self.subscriber = Some(subscriber);
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    pub fn is_editing(&self, id: TaskId) -> bool {
        self.edit.as_ref().is_some_and(|e| e.id == id)
    }

    pub fn pending_delete(&self) -> Option<TaskId> {
        self.pending_delete
    }

    /// Tasks matching the filter, newest first. Computed fresh on each call.
    pub fn visible(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| self.filter.matches(t))
            .rev()
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.tasks.iter().filter(|t| self.filter.matches(t)).count()
    }

    /// Hand queued notices to the caller, oldest first
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn text_exists(&self, text: &str) -> bool {
        self.tasks.iter().any(|t| t.text == text)
    }

    fn find_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    /// Add a task with the trimmed text. Returns the new id.
    pub fn add_task(&mut self, raw: &str) -> Result<TaskId, TodoError> {
        self.add_task_at(raw, Local::now())
    }

    /// [`TodoList::add_task`] with an explicit creation time
    pub fn add_task_at(&mut self, raw: &str, now: DateTime<Local>) -> Result<TaskId, TodoError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(TodoError::EmptyInput);
        }
        if self.text_exists(text) {
            debug!(text, "rejected duplicate todo");
            self.notices.push(Notice::duplicate());
            self.publish();
            return Err(TodoError::DuplicateTask);
        }

        self.next_id += 1;
        let id = TaskId(self.next_id);
        self.tasks.push(Task::new(id, text.to_string(), now));
        info!(%id, text, "todo added");
        self.publish();
        Ok(id)
    }

    /// Flip the completed flag
    pub fn toggle_complete(&mut self, id: TaskId) -> Result<(), TodoError> {
        let task = self.find_mut(id).ok_or(TodoError::NotFound(id))?;
        task.completed = !task.completed;
        debug!(%id, completed = task.completed, "todo toggled");
        self.publish();
        Ok(())
    }

    /// Start editing `id`, dropping any other unsaved edit
    pub fn begin_edit(&mut self, id: TaskId, current_text: impl Into<String>) {
        self.edit = Some(EditSession {
            id,
            draft: current_text.into(),
        });
        debug!(%id, "edit started");
        self.publish();
    }

    /// Replace the draft of the active edit session
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let Some(edit) = &mut self.edit {
            edit.draft = text.into();
            self.publish();
        }
    }

    /// Drop the active edit session without saving
    pub fn cancel_edit(&mut self) {
        if self.edit.take().is_some() {
            debug!("edit cancelled");
            self.publish();
        }
    }

    /// Commit the draft as the new text of `id`.
    ///
    /// The draft is checked against every task's text, the edited task
    /// included, so saving unchanged text is rejected as a duplicate. The
    /// edit session ends whether or not the save succeeds.
    pub fn save_edit(&mut self, id: TaskId) -> Result<(), TodoError> {
        let Some(edit) = self.edit.take() else {
            return Ok(());
        };

        let result = if self.text_exists(&edit.draft) {
            debug!(%id, draft = %edit.draft, "rejected duplicate edit");
            self.notices.push(Notice::duplicate());
            Err(TodoError::DuplicateTask)
        } else {
            if let Some(task) = self.find_mut(id) {
                task.text = edit.draft;
                info!(%id, text = %task.text, "todo edited");
            }
            Ok(())
        };
        self.publish();
        result
    }

    /// Open the confirmation gate for `id`
    pub fn request_delete(&mut self, id: TaskId) {
        self.pending_delete = Some(id);
        self.publish();
    }

    /// Delete the task captured by [`TodoList::request_delete`]
    pub fn confirm_delete(&mut self) -> Option<Task> {
        let id = self.pending_delete.take()?;
        let removed = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .map(|idx| self.tasks.remove(idx));
        if removed.is_some() {
            info!(%id, "todo deleted");
            self.notices.push(Notice::deleted());
        }
        self.publish();
        removed
    }

    /// Close the confirmation gate without deleting anything
    pub fn cancel_delete(&mut self) {
        if self.pending_delete.take().is_some() {
            self.publish();
        }
    }

    pub fn set_filter(&mut self, mode: FilterMode) {
        self.filter = mode;
        self.publish();
    }
}
