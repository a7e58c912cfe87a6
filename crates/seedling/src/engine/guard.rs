use super::OpId;

/// Breaks reference cycles during the recursive write pass.
///
/// Tracks the operations currently being written, innermost last. An
/// operation may only be entered while it is not already on the stack.
#[derive(Debug, Default)]
pub struct ReentrancyGuard {
    stack: Vec<OpId>,
}

impl ReentrancyGuard {
    pub fn new() -> ReentrancyGuard {
        ReentrancyGuard::default()
    }

    /// Pushes `op` and returns `true`, or returns `false` without touching
    /// the stack if `op` is already active.
    pub fn enter(&mut self, op: OpId) -> bool {
        if self.is_active(op) {
            return false;
        }

        self.stack.push(op);
        true
    }

    /// Pops the most recently entered operation.
    #[track_caller]
    pub fn leave(&mut self) -> OpId {
        let Some(op) = self.stack.pop() else {
            panic!("ReentrancyGuard::leave called with no active operation");
        };
        op
    }

    pub fn is_active(&self, op: OpId) -> bool {
        self.stack.contains(&op)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
