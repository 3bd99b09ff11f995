use crate::find::{NodeReference, Predecessors};

/// Walks the predecessor chain back from `goal` and returns the path from `start` to `goal`,
/// both included.
///
/// Returns an empty path when the chain breaks before reaching `start`, i.e. the goal was never
/// reached. A chain longer than the map itself can only come from a cycle and is treated the
/// same way.
pub fn reconstruct_path<R: NodeReference>(
    predecessors: &Predecessors<R>,
    start: R,
    goal: R,
) -> Vec<R> {
    let mut path = vec![goal];
    let mut current = goal;

    while current != start {
        match predecessors.get(&current) {
            Some(&from) if path.len() <= predecessors.len() => {
                path.push(from);
                current = from;
            }
            _ => return Vec::new(),
        }
    }

    path.reverse();
    path
}
