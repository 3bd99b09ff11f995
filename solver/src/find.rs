use std::{
    collections::{HashMap, VecDeque},
    fmt::Debug,
    hash::Hash,
};

/// Supertrait that collects all the requirements on the NodeReference values
/// Must be copy, comparable, hashable and not references (hence 'static)
pub trait NodeReference: Copy + Eq + Hash + Debug + 'static {}

pub trait MapTrait {
    /// The type that can be used to reference nodes in the map
    type Reference: NodeReference;

    /// The type that the map uses for storage
    type Storage<T: Default + Copy + Clone + 'static>: MapStorage<T, Reference = Self::Reference>;

    /// Check if the provided node reference is inside the map
    fn is_valid(&self, node: Self::Reference) -> bool;

    /// Return an iterator over the traversable neighbors of the provided node, in the order they
    /// should be explored
    fn neighbors_of(&self, node: Self::Reference) -> impl Iterator<Item = Self::Reference>;

    /// Create a storage for values of type T
    fn create_storage<T: Default + Copy + Clone + 'static>(&self) -> Self::Storage<T>;
}

pub trait MapStorage<T> {
    type Reference: NodeReference;

    fn is_valid(&self, node: Self::Reference) -> bool;
    fn get(&self, node: Self::Reference) -> T;
    fn get_mut(&mut self, node: Self::Reference) -> &mut T;
}

/// Maps every reached node to the node it was first reached from. The start node has no entry.
pub type Predecessors<R> = HashMap<R, R>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathFinderState {
    Computing,
    NoPathFound,
    GoalReached,
}

impl PathFinderState {
    pub fn is_done(&self) -> bool {
        !matches!(self, PathFinderState::Computing)
    }
}

/// Everything a finished search leaves behind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<R: NodeReference> {
    pub state: PathFinderState,
    pub start: R,
    pub goal: R,
    /// Empty unless the goal was reached
    pub predecessors: Predecessors<R>,
    /// Every node marked visited, in discovery order, starting with `start`
    pub explored: Vec<R>,
}

impl<R: NodeReference> SearchResult<R> {
    pub fn goal_reached(&self) -> bool {
        self.state == PathFinderState::GoalReached
    }
}

/// Breadth-first search over an unweighted map.
///
/// Nodes are expanded in FIFO order and neighbors are taken in the order the map yields them, so
/// among several shortest paths the first one discovered wins.
#[derive(Debug)]
pub struct PathFinder<
    R: NodeReference,
    S: MapStorage<bool, Reference = R>,
    M: MapTrait<Reference = R>,
> {
    start: R,
    goal: R,
    visited: S,
    frontier: VecDeque<R>,
    predecessors: Predecessors<R>,
    explored: Vec<R>,
    state: PathFinderState,
    _map: std::marker::PhantomData<M>,
}

impl<R: NodeReference, S: MapStorage<bool, Reference = R>, M: MapTrait<Reference = R>>
    PathFinder<R, S, M>
{
    pub fn new(start: R, goal: R, mut visited: S) -> Self {
        *visited.get_mut(start) = true;

        Self {
            start,
            goal,
            visited,
            frontier: VecDeque::from([start]),
            predecessors: Predecessors::new(),
            explored: vec![start],
            state: PathFinderState::Computing,
            _map: std::marker::PhantomData,
        }
    }

    pub fn finish(mut self, map: &M) -> SearchResult<R> {
        while !self.step(map).is_done() {}

        SearchResult {
            state: self.state,
            start: self.start,
            goal: self.goal,
            predecessors: self.predecessors,
            explored: self.explored,
        }
    }

    /// Expand a single node from the frontier
    pub fn step(&mut self, map: &M) -> PathFinderState {
        if self.state.is_done() {
            return self.state;
        }

        let Some(current) = self.frontier.pop_front() else {
            // nothing left to expand, whatever was recorded does not lead to the goal
            self.predecessors.clear();
            self.state = PathFinderState::NoPathFound;
            return self.state;
        };

        if current == self.goal {
            self.state = PathFinderState::GoalReached;
            return self.state;
        }

        for neighbor in map.neighbors_of(current) {
            if self.visited.get(neighbor) {
                continue;
            }

            *self.visited.get_mut(neighbor) = true;
            self.frontier.push_back(neighbor);
            self.predecessors.insert(neighbor, current);
            self.explored.push(neighbor);

            // stop as soon as the goal is discovered, no need to wait for it to be dequeued
            if neighbor == self.goal {
                self.state = PathFinderState::GoalReached;
                break;
            }
        }

        self.state
    }

    pub fn state(&self) -> PathFinderState {
        self.state
    }

    pub fn get_visited(&self) -> &S {
        &self.visited
    }

    pub fn explored(&self) -> &[R] {
        &self.explored
    }
}

/// Run a complete breadth-first search from `start` to `goal`
pub fn find_path<M: MapTrait>(
    map: &M,
    start: M::Reference,
    goal: M::Reference,
) -> SearchResult<M::Reference> {
    let visited = map.create_storage();
    PathFinder::<M::Reference, M::Storage<bool>, M>::new(start, goal, visited).finish(map)
}
