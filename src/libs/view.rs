use super::config::Config;
use super::messages::Message;
use super::task::{Task, TaskRecord};
use prettytable::{row, Cell, Row, Table};

/// Placeholder shown for a task without a description.
const EMPTY_DESCRIPTION: &str = "-";

pub struct View {}

impl View {
    /// Builds the task table. With `color` the status cells carry terminal
    /// styles (green for done, yellow for pending).
    pub fn tasks_table(tasks: &[Task], color: bool) -> Table {
        let mut table = Table::new();

        table.set_titles(row![b->"ID", b->"STATUS", b->"TITLE", b->"DESCRIPTION"]);
        for task in tasks {
            let (status, style) = if task.completed() {
                (Message::StatusDone, "Fgb")
            } else {
                (Message::StatusPending, "Fyb")
            };
            let status = Cell::new(&status.to_string());
            let status = if color { status.style_spec(style) } else { status };
            let description = match task.description() {
                "" => EMPTY_DESCRIPTION,
                description => description,
            };

            table.add_row(Row::new(vec![
                Cell::new(task.id()).style_spec("r"),
                status,
                Cell::new(task.title()),
                Cell::new(description),
            ]));
        }

        table
    }

    pub fn tasks(tasks: &[Task], config: &Config) {
        let table = Self::tasks_table(tasks, config.color);
        if config.color {
            table.printstd();
        } else {
            print!("{}", table);
        }
    }

    /// Serializes tasks as a pretty-printed JSON array of records.
    pub fn tasks_json(tasks: &[Task]) -> serde_json::Result<String> {
        let records: Vec<TaskRecord> = tasks.iter().map(Task::to_record).collect();
        serde_json::to_string_pretty(&records)
    }
}
