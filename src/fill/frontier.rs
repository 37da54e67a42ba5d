//! Frontier containers: the pending-work sequence of a traversal.
//!
//! The removal order is the whole difference between the two fill
//! policies:
//! - **Stack** (LIFO): depth-first, the fill tunnels along one arm of the
//!   region before backtracking.
//! - **Queue** (FIFO): breadth-first, the fill grows as a wavefront
//!   around the seed.
//!
//! Neither container has a capacity limit. A traversal may hold more
//! entries than the grid has pixels, because neighbours are added before
//! anyone checks whether they were already visited.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use crate::error::{FillError, Result};

/// An add / remove-next sequence.
pub trait Frontier<T> {
    /// Add an element. O(1) amortised.
    fn add(&mut self, item: T);

    /// Remove the next element per the container's policy, if any.
    fn pop_next(&mut self) -> Option<T>;

    /// The element `pop_next` would return, without removing it.
    fn peek(&self) -> Option<&T>;

    fn len(&self) -> usize;

    fn clear(&mut self);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove the next element, failing with `EmptyFrontier` if there is none.
    fn remove_next(&mut self) -> Result<T> {
        self.pop_next().ok_or(FillError::EmptyFrontier)
    }
}

/// Last-in, first-out frontier.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Stack<T> {
    #[inline]
    fn add(&mut self, item: T) {
        self.items.push(item);
    }

    #[inline]
    fn pop_next(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return write!(f, "Stack: []");
        }
        write!(f, "Stack: [TOP")?;
        for item in self.items.iter().rev() {
            write!(f, " -> {}", item)?;
        }
        write!(f, "]")
    }
}

/// First-in, first-out frontier.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// The most recently added element.
    pub fn peek_back(&self) -> Option<&T> {
        self.items.back()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Queue<T> {
    #[inline]
    fn add(&mut self, item: T) {
        self.items.push_back(item);
    }

    #[inline]
    fn pop_next(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return write!(f, "Queue: []");
        }
        write!(f, "Queue: [FIRST")?;
        for item in &self.items {
            write!(f, " -> {}", item)?;
        }
        write!(f, " <- REAR]")
    }
}

/// Which frontier drives a fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FillPolicy {
    Stack,
    Queue,
}

impl FillPolicy {
    pub const ALL: [FillPolicy; 2] = [FillPolicy::Stack, FillPolicy::Queue];

    /// Lowercase name used in artifact file names.
    pub const fn name(self) -> &'static str {
        match self {
            FillPolicy::Stack => "stack",
            FillPolicy::Queue => "queue",
        }
    }
}

impl fmt::Display for FillPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FillPolicy {
    type Err = FillError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stack" => Ok(FillPolicy::Stack),
            "queue" => Ok(FillPolicy::Queue),
            _ => Err(FillError::InvalidPolicy(s.to_string())),
        }
    }
}
