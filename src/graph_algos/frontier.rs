//! Open lists for the search engines.
//!
//! Entries refer to positions by their slot index in the node map, so the
//! frontier never clones positions.

use std::{
    collections::{BinaryHeap, VecDeque},
    cmp::Ordering,
};


/// Entry on the A* open list
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub index: usize, // slot in the node map - identifies the position
    pub cost: T, // g: cost from start when this entry was pushed
    pub f_cost: T, // g + h(n)
    seq: u64, // discovery order, breaks f_cost ties
}

// BinaryHeap is a max-heap: reverse both keys so the lowest f_cost
// and, among equals, the earliest pushed entry pops first
impl<T: Ord> Ord for Node<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f_cost.cmp(&self.f_cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl<T: Ord> PartialOrd for Node<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.f_cost == other.f_cost && self.seq == other.seq
    }
}
impl<T: PartialEq> Eq for Node<T> {}


/// Priority ordered frontier.
/// Superseded entries are left in the heap; the caller filters them
/// when they pop by comparing `cost` against the node map.
#[derive(Debug)]
pub(crate) struct PriorityFrontier<T> {
    heap: BinaryHeap<Node<T>>,
    pushed: u64,
}

impl<T: Ord> PriorityFrontier<T> {

    pub fn new() -> Self {
        Self { heap: BinaryHeap::new(), pushed: 0 }
    }

    pub fn push(&mut self, index: usize, cost: T, f_cost: T) {
        self.heap.push(Node { index, cost, f_cost, seq: self.pushed });
        self.pushed += 1;
    }

    /// Remove the entry with the lowest f_cost
    pub fn pop(&mut self) -> Option<Node<T>> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Total number of entries ever pushed, stale ones included
    pub fn pushed(&self) -> u64 {
        self.pushed
    }
}


/// First-in first-out frontier of node map slots
#[derive(Debug, Default)]
pub(crate) struct FifoFrontier {
    queue: VecDeque<usize>,
}

impl FifoFrontier {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, index: usize) {
        self.queue.push_back(index);
    }

    pub fn pop(&mut self) -> Option<usize> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}
