use crate::libs::task::{validate_description, validate_title, Task, ValidationError};
use tracing::debug;

/// Owner of all tasks of a session.
///
/// Tasks are kept in insertion order. Ids are minted from a counter that
/// only ever grows, so an id is never handed out twice, even after the
/// task that carried it has been deleted.
///
/// Lookups that find nothing are not errors: they come back as `None` or
/// `false` and the caller decides how to report them. Validation failures
/// are errors and are passed through from [`Task`] unchanged.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    counter: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a task with the next id and appends it.
    ///
    /// A refused task changes nothing, and its id is not used up.
    pub fn add_task(&mut self, title: &str, description: &str) -> Result<Task, ValidationError> {
        let task = Task::new((self.counter + 1).to_string(), title, description)?;
        self.counter += 1;
        debug!(task_id = task.id(), "task added");
        self.tasks.push(task.clone());

        Ok(task)
    }

    /// Returns a copy of every task in insertion order.
    pub fn get_all_tasks(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    pub fn get_task_by_id(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    fn get_task_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }

    /// Changes the title and/or description of a task.
    ///
    /// Returns `Ok(false)` when no task has this id. Both values are checked
    /// before either is applied, so a refused update leaves the task as it
    /// was. Passing neither value is a successful no-op.
    pub fn update_task(&mut self, id: &str, title: Option<&str>, description: Option<&str>) -> Result<bool, ValidationError> {
        let Some(task) = self.get_task_mut(id) else {
            return Ok(false);
        };

        if let Some(title) = title {
            validate_title(title)?;
        }
        if let Some(description) = description {
            validate_description(description)?;
        }

        if let Some(title) = title {
            task.update_title(title)?;
        }
        if let Some(description) = description {
            task.update_description(description)?;
        }
        debug!(task_id = id, "task updated");

        Ok(true)
    }

    pub fn complete_task(&mut self, id: &str) -> bool {
        match self.get_task_mut(id) {
            Some(task) => {
                task.mark_complete();
                debug!(task_id = id, "task completed");
                true
            }
            None => false,
        }
    }

    pub fn incomplete_task(&mut self, id: &str) -> bool {
        match self.get_task_mut(id) {
            Some(task) => {
                task.mark_incomplete();
                debug!(task_id = id, "task reopened");
                true
            }
            None => false,
        }
    }

    /// Removes one task. Remaining ids and the counter are left alone.
    pub fn delete_task(&mut self, id: &str) -> bool {
        match self.tasks.iter().position(|task| task.id() == id) {
            Some(index) => {
                self.tasks.remove(index);
                debug!(task_id = id, "task deleted");
                true
            }
            None => false,
        }
    }

    pub fn get_completed_tasks(&self) -> Vec<Task> {
        self.tasks.iter().filter(|task| task.completed()).cloned().collect()
    }

    pub fn get_pending_tasks(&self) -> Vec<Task> {
        self.tasks.iter().filter(|task| !task.completed()).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
