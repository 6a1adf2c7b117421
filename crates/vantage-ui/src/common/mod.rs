mod liveness;
mod task;

pub use liveness::Liveness;
pub use task::{TaskCompleted, TaskId, TaskKind, TaskSeq, TaskStarted, TaskState, Tasks};
