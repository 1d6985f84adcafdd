//! Index-based union-find over dense cell indices.

use std::mem;

pub(super) struct DisjointSets {
    parent: Vec<usize>,
    size: Vec<usize>,
    sets: usize,
}

impl DisjointSets {
    pub(super) fn new(count: usize) -> Self {
        Self { parent: (0..count).collect(), size: vec![1; count], sets: count }
    }

    pub(super) fn set_count(&self) -> usize {
        self.sets
    }

    pub(super) fn find(&mut self, mut index: usize) -> usize {
        while self.parent[index] != index {
            self.parent[index] = self.parent[self.parent[index]];
            index = self.parent[index];
        }
        index
    }

    /// Merges the sets holding `a` and `b`. Returns false when they were
    /// already the same set.
    pub(super) fn union(&mut self, a: usize, b: usize) -> bool {
        let (mut root_a, mut root_b) = (self.find(a), self.find(b));
        if root_a == root_b {
            return false;
        }
        if self.size[root_a] < self.size[root_b] {
            mem::swap(&mut root_a, &mut root_b);
        }
        self.parent[root_b] = root_a;
        self.size[root_a] += self.size[root_b];
        self.sets -= 1;
        true
    }
}
