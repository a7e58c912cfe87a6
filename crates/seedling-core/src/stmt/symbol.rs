use super::Value;

/// Identifies an identity the backing store will assign while executing a
/// batch. Handed out in request order, starting at zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdentityId(pub usize);

/// A column value that is either known now or will only be known once the
/// batch executes.
#[derive(Debug, Clone, PartialEq)]
pub enum Symbol {
    Known(Value),
    Pending(IdentityId),
}

impl Symbol {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }
}

impl From<Value> for Symbol {
    fn from(value: Value) -> Self {
        Self::Known(value)
    }
}

impl From<IdentityId> for Symbol {
    fn from(id: IdentityId) -> Self {
        Self::Pending(id)
    }
}
