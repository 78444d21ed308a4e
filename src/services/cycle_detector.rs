//! Cycle and deadlock detection over a board's dependency graph.
//!
//! Pure and stateless per invocation: a depth-first traversal with a
//! recursion stack finds back-edges in the dependency graph restricted to
//! non-terminal tasks. Cycles through already-completed ancestors are
//! invisible by construction, so finished work never penalizes its
//! dependents.

use std::collections::{BTreeSet, HashMap, HashSet};

use uuid::Uuid;

use crate::domain::models::{BoardTask, TaskStatus};

/// Result of one cycle analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Every discovered cycle as an ordered path of task IDs (each entry
    /// appears once; the path implicitly closes back on its first element).
    pub cycles: Vec<Vec<Uuid>>,
    /// Pending, non-running tasks that participate in any cycle. These can
    /// never become ready and must be failed to unstick the board.
    pub stuck: Vec<Uuid>,
}

impl CycleReport {
    /// Whether any cycle was found.
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    /// The cycle a task participates in, if any.
    pub fn cycle_containing(&self, id: Uuid) -> Option<&[Uuid]> {
        self.cycles
            .iter()
            .find(|cycle| cycle.contains(&id))
            .map(Vec::as_slice)
    }
}

/// Detector for circular dependency chains and the tasks stuck inside them.
#[derive(Debug, Clone, Default)]
pub struct CycleDetector;

impl CycleDetector {
    pub fn new() -> Self {
        Self
    }

    /// Find every dependency cycle among the non-terminal tasks.
    pub fn detect_cycles(&self, tasks: &[BoardTask]) -> Vec<Vec<Uuid>> {
        // Restrict the graph to non-terminal tasks; edges into terminal or
        // unknown tasks cannot be part of a live cycle.
        let live: HashSet<Uuid> = tasks
            .iter()
            .filter(|t| !t.status.is_terminal())
            .map(|t| t.id)
            .collect();

        let mut graph: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for task in tasks.iter().filter(|t| live.contains(&t.id)) {
            graph.entry(task.id).or_default().extend(
                task.dependencies
                    .iter()
                    .filter(|dep| live.contains(dep))
                    .copied(),
            );
        }

        let mut visited = HashSet::new();
        let mut rec_stack = HashSet::new();
        let mut path = Vec::new();
        let mut cycles = Vec::new();
        let mut seen: HashSet<BTreeSet<Uuid>> = HashSet::new();

        let mut roots: Vec<Uuid> = graph.keys().copied().collect();
        roots.sort();
        for root in roots {
            if !visited.contains(&root) {
                collect_cycles(
                    root,
                    &graph,
                    &mut visited,
                    &mut rec_stack,
                    &mut path,
                    &mut cycles,
                    &mut seen,
                );
            }
        }

        cycles
    }

    /// Full analysis: cycles plus the stuck-task subset.
    pub fn analyze(&self, tasks: &[BoardTask], running: &HashSet<Uuid>) -> CycleReport {
        let cycles = self.detect_cycles(tasks);

        let cyclic: HashSet<Uuid> = cycles.iter().flatten().copied().collect();
        let stuck: Vec<Uuid> = tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Pending && !running.contains(&t.id))
            .filter(|t| cyclic.contains(&t.id))
            .map(|t| t.id)
            .collect();

        CycleReport { cycles, stuck }
    }
}

/// DFS helper: record each back-edge's cycle, deduplicated by membership.
#[allow(clippy::too_many_arguments)]
fn collect_cycles(
    node: Uuid,
    graph: &HashMap<Uuid, Vec<Uuid>>,
    visited: &mut HashSet<Uuid>,
    rec_stack: &mut HashSet<Uuid>,
    path: &mut Vec<Uuid>,
    cycles: &mut Vec<Vec<Uuid>>,
    seen: &mut HashSet<BTreeSet<Uuid>>,
) {
    visited.insert(node);
    rec_stack.insert(node);
    path.push(node);

    if let Some(neighbors) = graph.get(&node) {
        for &neighbor in neighbors {
            if !visited.contains(&neighbor) {
                collect_cycles(neighbor, graph, visited, rec_stack, path, cycles, seen);
            } else if rec_stack.contains(&neighbor) {
                // Back edge: the cycle is the path suffix starting at the
                // revisited node.
                if let Some(start) = path.iter().position(|&id| id == neighbor) {
                    let cycle: Vec<Uuid> = path[start..].to_vec();
                    let key: BTreeSet<Uuid> = cycle.iter().copied().collect();
                    if seen.insert(key) {
                        cycles.push(cycle);
                    }
                }
            }
        }
    }

    rec_stack.remove(&node);
    path.pop();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ActorType;

    fn task(board_id: Uuid) -> BoardTask {
        BoardTask::new(board_id, "T", "d", ActorType::Analyst)
    }

    fn link(task: BoardTask, deps: &[Uuid]) -> BoardTask {
        deps.iter().fold(task, |t, &dep| t.with_dependency(dep))
    }

    #[test]
    fn test_no_cycle_in_chain() {
        let board_id = Uuid::new_v4();
        let a = task(board_id);
        let b = link(task(board_id), &[a.id]);
        let c = link(task(board_id), &[b.id]);

        let detector = CycleDetector::new();
        assert!(detector.detect_cycles(&[a, b, c]).is_empty());
    }

    #[test]
    fn test_two_task_cycle() {
        let board_id = Uuid::new_v4();
        let mut a = task(board_id);
        let mut b = task(board_id);
        a.dependencies = vec![b.id];
        b.dependencies = vec![a.id];

        let detector = CycleDetector::new();
        let cycles = detector.detect_cycles(&[a.clone(), b.clone()]);
        assert_eq!(cycles.len(), 1);
        let members: HashSet<Uuid> = cycles[0].iter().copied().collect();
        assert_eq!(members, [a.id, b.id].into_iter().collect());
    }

    #[test]
    fn test_multiple_disjoint_cycles() {
        let board_id = Uuid::new_v4();
        let mut a = task(board_id);
        let mut b = task(board_id);
        a.dependencies = vec![b.id];
        b.dependencies = vec![a.id];

        let mut c = task(board_id);
        let mut d = task(board_id);
        let mut e = task(board_id);
        c.dependencies = vec![e.id];
        d.dependencies = vec![c.id];
        e.dependencies = vec![d.id];

        let free = task(board_id);

        let detector = CycleDetector::new();
        let cycles = detector.detect_cycles(&[a, b, c, d, e, free.clone()]);
        assert_eq!(cycles.len(), 2);
        assert!(cycles.iter().all(|cycle| !cycle.contains(&free.id)));
    }

    #[test]
    fn test_completed_ancestors_do_not_form_cycles() {
        // A <-> B on paper, but B already completed: no live cycle remains.
        let board_id = Uuid::new_v4();
        let mut a = task(board_id);
        let mut b = task(board_id);
        a.dependencies = vec![b.id];
        b.dependencies = vec![a.id];
        b.transition_to(TaskStatus::InProgress).unwrap();
        b.transition_to(TaskStatus::Completed).unwrap();

        let detector = CycleDetector::new();
        let report = detector.analyze(&[a.clone(), b], &HashSet::new());
        assert!(!report.has_cycles());
        assert!(report.stuck.is_empty());
    }

    #[test]
    fn test_stuck_excludes_running_tasks() {
        let board_id = Uuid::new_v4();
        let mut a = task(board_id);
        let mut b = task(board_id);
        a.dependencies = vec![b.id];
        b.dependencies = vec![a.id];

        let running: HashSet<Uuid> = [a.id].into_iter().collect();
        let detector = CycleDetector::new();
        let report = detector.analyze(&[a.clone(), b.clone()], &running);

        assert!(report.has_cycles());
        assert_eq!(report.stuck, vec![b.id]);
        assert!(report.cycle_containing(a.id).is_some());
    }

    #[test]
    fn test_independent_task_not_stuck() {
        let board_id = Uuid::new_v4();
        let mut a = task(board_id);
        let mut b = task(board_id);
        let mut c = task(board_id);
        a.dependencies = vec![c.id];
        b.dependencies = vec![a.id];
        c.dependencies = vec![b.id];
        let d = task(board_id);

        let detector = CycleDetector::new();
        let report = detector.analyze(&[a.clone(), b.clone(), c.clone(), d.clone()], &HashSet::new());

        let stuck: HashSet<Uuid> = report.stuck.iter().copied().collect();
        assert_eq!(stuck, [a.id, b.id, c.id].into_iter().collect());
        assert!(!stuck.contains(&d.id));
    }
}
