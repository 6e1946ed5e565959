use std::fmt;

/// Errors raised while building the component execution order.
///
/// Both variants are structural and fatal: they are detected before any day
/// is simulated, and the run cannot proceed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A component declared a dependency on an id not present in the set.
    UnknownDependency {
        component: String,
        dependency: String,
    },
    /// The dependency graph contains a cycle.
    Cycle,
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::UnknownDependency {
                component,
                dependency,
            } => write!(
                f,
                "component \"{component}\" depends on unknown component \"{dependency}\""
            ),
            GraphError::Cycle => write!(f, "cycle detected in financial component graph"),
        }
    }
}

impl std::error::Error for GraphError {}

pub type Result<T> = std::result::Result<T, GraphError>;
