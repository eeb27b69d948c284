use crate::core::models::{NewSchedule, NewTodo, Schedule, Todo};
use crate::core::persist::Snapshot;
use crate::core::repository::Repository;
use crate::errors::Result;
use chrono::Local;

/// Where todos and schedules live. The planner reads and writes only through
/// this trait; list results come back in id order.
pub trait PlannerStore {
    fn list_todos(&self) -> Result<Vec<Todo>>;
    fn create_todo(&mut self, new: NewTodo) -> Result<Todo>;
    fn set_todo_completed(&mut self, id: i64, completed: bool) -> Result<Todo>;
    fn delete_todo(&mut self, id: i64) -> Result<()>;

    fn list_schedules(&self) -> Result<Vec<Schedule>>;
    fn create_schedule(&mut self, new: NewSchedule) -> Result<Schedule>;
    fn delete_schedule(&mut self, id: i64) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct MemoryStore {
    todos: Repository<Todo>,
    schedules: Repository<Schedule>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            todos: Repository::new("Todo"),
            schedules: Repository::new("Schedule"),
        }
    }

    /// Loads records with their stored ids. Duplicate or non-positive ids are rejected.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self> {
        let mut store = Self::new();
        for todo in snapshot.todos {
            store.todos.insert_with_id(todo)?;
        }
        for schedule in snapshot.schedules {
            store.schedules.insert_with_id(schedule)?;
        }
        Ok(store)
    }

    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            todos: self.todos.values().into_iter().cloned().collect(),
            schedules: self
                .schedules
                .values()
                .into_iter()
                .cloned()
                .collect(),
        }
    }

    pub fn todo_count(&self) -> usize {
        self.todos.len()
    }

    pub fn schedule_count(&self) -> usize {
        self.schedules.len()
    }
}

fn timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}

impl PlannerStore for MemoryStore {
    fn list_todos(&self) -> Result<Vec<Todo>> {
        Ok(self.todos.values().into_iter().cloned().collect())
    }

    fn create_todo(&mut self, new: NewTodo) -> Result<Todo> {
        let content = Some(new.content).filter(|c| !c.trim().is_empty());
        let todo = Todo {
            id: 0,
            user_id: new.user_id,
            title: new.title,
            content,
            start_date: new.start_date,
            end_date: new.end_date,
            completed: false,
            created_at: Some(timestamp()),
            completed_at: None,
        };
        Ok(self.todos.insert(todo).clone())
    }

    fn set_todo_completed(&mut self, id: i64, completed: bool) -> Result<Todo> {
        let todo = self.todos.get_mut(id)?;
        if todo.completed != completed {
            todo.completed = completed;
            todo.completed_at = completed.then(timestamp);
        }
        Ok(todo.clone())
    }

    fn delete_todo(&mut self, id: i64) -> Result<()> {
        self.todos.delete(id).map(|_| ())
    }

    fn list_schedules(&self) -> Result<Vec<Schedule>> {
        Ok(self
            .schedules
            .values()
            .into_iter()
            .cloned()
            .collect())
    }

    fn create_schedule(&mut self, new: NewSchedule) -> Result<Schedule> {
        let schedule = Schedule {
            id: 0,
            weekday: new.weekday,
            start_time: new.start_time,
            end_time: new.end_time,
            title: new.title,
            content: new.content,
            color: new.color,
            user_id: new.user_id,
        };
        Ok(self.schedules.insert(schedule).clone())
    }

    fn delete_schedule(&mut self, id: i64) -> Result<()> {
        self.schedules.delete(id).map(|_| ())
    }
}
