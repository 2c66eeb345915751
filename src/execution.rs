//! Execution mode selection for operations with a parallel code path.

/// How an operation distributes its work.
///
/// Parallel execution is synchronous fan-out/fan-in on the engine's thread
/// pool: the caller blocks until every spawned task has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExecutionMode {
    #[default]
    Sequential,
    Parallel,
}
