//! Component graph and deterministic topological ordering.
//!
//! Every engine concern (FX, cash flow, debt, assets, tax, shocks, metrics)
//! implements [`Component`]: an id, a set of dependency ids, and a two-phase
//! prepare/apply step. The scheduler works only against that contract and
//! never special-cases a concrete component.

use rustc_hash::FxHashMap;

use crate::error::{GraphError, Result};
use crate::model::SimulationConfig;
use crate::simulation_state::DayState;

/// A node in the daily execution graph.
pub trait Component {
    /// Unique component identifier.
    fn id(&self) -> &'static str;

    /// Ids of components that must execute earlier the same day.
    fn dependencies(&self) -> &'static [&'static str];

    /// Read-only step: compute intended deltas from the current state into
    /// component scratch fields. Must not mutate state.
    fn prepare(&mut self, day: u32, state: &DayState, config: &SimulationConfig);

    /// Mutation step: apply the deltas computed by `prepare`.
    fn apply(&mut self, day: u32, state: &mut DayState, config: &SimulationConfig);
}

/// Topologically sort components using Kahn's algorithm.
///
/// Ties among simultaneously-ready nodes are broken by ascending
/// lexicographic id, and newly-ready nodes are inserted at their sorted
/// position in the ready queue, so any fixed component set always yields the
/// same order. Returns indices into `components` in execution order.
pub fn topological_sort(components: &[Box<dyn Component>]) -> Result<Vec<usize>> {
    let index_of: FxHashMap<&str, usize> = components
        .iter()
        .enumerate()
        .map(|(i, c)| (c.id(), i))
        .collect();

    let mut in_degree = vec![0usize; components.len()];
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); components.len()];

    for (i, component) in components.iter().enumerate() {
        for dep in component.dependencies() {
            let Some(&dep_idx) = index_of.get(dep) else {
                return Err(GraphError::UnknownDependency {
                    component: component.id().to_string(),
                    dependency: (*dep).to_string(),
                });
            };
            adjacency[dep_idx].push(i);
            in_degree[i] += 1;
        }
    }

    let mut ready: Vec<usize> = (0..components.len())
        .filter(|&i| in_degree[i] == 0)
        .collect();
    ready.sort_by_key(|&i| components[i].id());

    let mut sorted = Vec::with_capacity(components.len());
    while !ready.is_empty() {
        let current = ready.remove(0);
        sorted.push(current);

        for &neighbor in &adjacency[current] {
            in_degree[neighbor] -= 1;
            if in_degree[neighbor] == 0 {
                let pos = ready
                    .iter()
                    .position(|&q| components[q].id() > components[neighbor].id())
                    .unwrap_or(ready.len());
                ready.insert(pos, neighbor);
            }
        }
    }

    if sorted.len() != components.len() {
        return Err(GraphError::Cycle);
    }

    Ok(sorted)
}
