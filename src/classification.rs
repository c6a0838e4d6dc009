use std::collections::BTreeSet;

use crate::geometry::Turn;

/// Cached convex/reflex/ear classification of the vertices in a ring.
///
/// Every entry is derived from a vertex's neighbor triangle and may go stale when a
/// neighbor is removed. The cache is never the only source of truth: callers
/// recompute from geometry on a miss, and reclassify both neighbors of every
/// removed vertex.
#[derive(Debug, Clone)]
pub(crate) struct Classification {
    turns: Vec<Option<Turn>>,
    // Mirrors `turns[v] == Some(Turn::Reflex)`, ordered for deterministic scans
    reflex: BTreeSet<usize>,
    // Always a subset of the convex vertices
    ears: BTreeSet<usize>,
}

impl Classification {
    pub fn new(size: usize) -> Self {
        Self {
            turns: vec![None; size],
            reflex: BTreeSet::new(),
            ears: BTreeSet::new(),
        }
    }

    /// The cached turn at `vertex`, if it has one
    pub fn turn(&self, vertex: usize) -> Option<Turn> {
        self.turns.get(vertex).copied().flatten()
    }

    pub fn is_convex(&self, vertex: usize) -> bool {
        self.turn(vertex) == Some(Turn::Convex)
    }

    pub fn is_reflex(&self, vertex: usize) -> bool {
        self.reflex.contains(&vertex)
    }

    pub fn is_ear(&self, vertex: usize) -> bool {
        self.ears.contains(&vertex)
    }

    /// Records the initial turn of `vertex`
    pub fn seed(&mut self, vertex: usize, turn: Turn) {
        self.turns[vertex] = Some(turn);
        if turn == Turn::Reflex {
            self.reflex.insert(vertex);
        }
    }

    /// Records that `vertex` now turns convex. Its ear status must be set separately.
    pub fn mark_convex(&mut self, vertex: usize) {
        self.turns[vertex] = Some(Turn::Convex);
        self.reflex.remove(&vertex);
    }

    /// Records a non-convex turn for `vertex` and drops it from the ears.
    ///
    /// A reflex vertex that flattens to collinear stays reflex, so it keeps
    /// blocking any ear whose triangle touches it.
    pub fn mark_not_convex(&mut self, vertex: usize, turn: Turn) {
        debug_assert_ne!(turn, Turn::Convex);
        self.ears.remove(&vertex);
        match turn {
            Turn::Reflex => {
                self.turns[vertex] = Some(Turn::Reflex);
                self.reflex.insert(vertex);
            }
            _ if self.reflex.contains(&vertex) => { }
            _ => self.turns[vertex] = Some(turn),
        }
    }

    pub fn set_ear(&mut self, vertex: usize, is_ear: bool) {
        if is_ear {
            self.ears.insert(vertex);
        } else {
            self.ears.remove(&vertex);
        }
    }

    /// Drops every classification of `vertex`
    pub fn forget(&mut self, vertex: usize) {
        if let Some(turn) = self.turns.get_mut(vertex) {
            *turn = None;
        }
        self.reflex.remove(&vertex);
        self.ears.remove(&vertex);
    }

    pub fn convex(&self) -> impl Iterator<Item = usize> + '_ {
        self.turns.iter().enumerate().filter_map(|(v, turn)| match turn {
            Some(Turn::Convex) => Some(v),
            _ => None,
        })
    }

    pub fn reflex(&self) -> impl Iterator<Item = usize> + '_ {
        self.reflex.iter().copied()
    }

    pub fn ears(&self) -> impl Iterator<Item = usize> + '_ {
        self.ears.iter().copied()
    }

    pub fn has_ear(&self) -> bool {
        !self.ears.is_empty()
    }

    /// The smallest ear vertex
    pub fn first_ear(&self) -> Option<usize> {
        self.ears.iter().next().copied()
    }
}
