use crate::operation::Operation;

/// Ordered list of committed operations; doubles as the undo stack.
///
/// Index order is paint order. Only a commit grows it and only undo shrinks
/// it; drags replace entries in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawHistory {
    operations: Vec<Operation>,
}

impl DrawHistory {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a committed operation, returning its index
    pub fn push(&mut self, operation: Operation) -> usize {
        self.operations.push(operation);
        self.operations.len() - 1
    }

    /// Remove the most recent operation
    pub fn undo(&mut self) -> Option<Operation> {
        self.operations.pop()
    }

    /// Swap in a new value for the entry at `index`. Out-of-range is ignored.
    pub fn replace(&mut self, index: usize, operation: Operation) -> bool {
        match self.operations.get_mut(index) {
            Some(slot) => {
                *slot = operation;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&Operation> {
        self.operations.get(index)
    }

    /// Returns true if there are operations that can be undone
    pub fn can_undo(&self) -> bool {
        !self.operations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn as_slice(&self) -> &[Operation] {
        &self.operations
    }

    pub fn into_vec(self) -> Vec<Operation> {
        self.operations
    }
}
