/// How a model's primary-key value becomes known.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyType {
    /// Assigned by the backing store when the record is inserted.
    Auto,

    /// Supplied on the record before it is written.
    Manual,

    /// The model has no primary key.
    None,
}

impl KeyType {
    pub fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    pub fn is_manual(self) -> bool {
        matches!(self, Self::Manual)
    }

    pub fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}
