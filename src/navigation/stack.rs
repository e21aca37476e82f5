use std::collections::VecDeque;

/// Default number of paths kept for `back()`
pub const DEFAULT_HISTORY_SIZE: usize = 50;

/// A single frame in the history stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationFrame {
    pub path: String,
}

impl NavigationFrame {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

/// Bounded history of previously active paths (VecDeque for O(1) pop_front)
#[derive(Debug, Clone)]
pub struct NavigationStack {
    frames: VecDeque<NavigationFrame>,
    max_size: usize,
}

impl NavigationStack {
    pub fn new(max_size: usize) -> Self {
        let max_size = max_size.max(1);
        Self {
            frames: VecDeque::with_capacity(max_size),
            max_size,
        }
    }

    pub fn push(&mut self, frame: NavigationFrame) {
        if self.frames.len() >= self.max_size {
            self.frames.pop_front(); // drop the oldest
        }
        self.frames.push_back(frame);
    }

    pub fn pop(&mut self) -> Option<NavigationFrame> {
        self.frames.pop_back()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn frames(&self) -> &VecDeque<NavigationFrame> {
        &self.frames
    }
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_SIZE)
    }
}
