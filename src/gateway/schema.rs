//! Operation schema: the explicit name-to-operation dispatch table.

use std::collections::HashMap;

/// Whether an operation reads or mutates task state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Read-only; must not mutate state.
    Query,
    /// Performs exactly one repository mutation.
    Mutation,
}

/// The full set of gateway operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `tasks`: list every task.
    Tasks,
    /// `task(id)`: find one task, `null` when absent.
    Task,
    /// `createTask(title)`: persist a new task.
    CreateTask,
    /// `updateTask(id, title?, completed?)`: partial update.
    UpdateTask,
    /// `deleteTask(id)`: hard delete.
    DeleteTask,
}

impl Operation {
    /// Every operation the gateway serves.
    pub const ALL: [Self; 5] = [
        Self::Tasks,
        Self::Task,
        Self::CreateTask,
        Self::UpdateTask,
        Self::DeleteTask,
    ];

    /// Returns the wire-level operation name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tasks => "tasks",
            Self::Task => "task",
            Self::CreateTask => "createTask",
            Self::UpdateTask => "updateTask",
            Self::DeleteTask => "deleteTask",
        }
    }

    /// Returns whether the operation is a query or a mutation.
    #[must_use]
    pub const fn kind(self) -> OperationKind {
        match self {
            Self::Tasks | Self::Task => OperationKind::Query,
            Self::CreateTask | Self::UpdateTask | Self::DeleteTask => OperationKind::Mutation,
        }
    }
}

/// Dispatch table mapping wire operation names to typed operations.
///
/// Built once at gateway construction; the constructor checks the table
/// covers every declared operation so a name/handler mismatch fails at
/// startup rather than on the first unlucky request.
#[derive(Debug, Clone)]
pub struct Schema {
    by_name: HashMap<&'static str, Operation>,
}

impl Schema {
    /// Builds the dispatch table over all operations.
    ///
    /// # Panics
    ///
    /// Panics when two operations declare the same wire name, which is a
    /// programming error caught the first time a gateway is constructed.
    #[must_use]
    pub fn new() -> Self {
        let mut by_name = HashMap::with_capacity(Operation::ALL.len());
        for operation in Operation::ALL {
            let previous = by_name.insert(operation.name(), operation);
            assert!(
                previous.is_none(),
                "duplicate operation name: {}",
                operation.name()
            );
        }
        Self { by_name }
    }

    /// Resolves a wire operation name.
    ///
    /// Returns `None` for names outside the schema.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<Operation> {
        self.by_name.get(name).copied()
    }

    /// Returns the number of operations in the schema.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns whether the schema is empty. It never is in practice.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}
