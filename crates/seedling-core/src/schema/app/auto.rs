/// How the backing store populates a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoStrategy {
    /// The store assigns an increasing integer identity on insert
    Increment,
}

impl AutoStrategy {
    /// Returns `true` if the auto is [`Increment`].
    ///
    /// [`Increment`]: AutoStrategy::Increment
    #[must_use]
    pub fn is_increment(&self) -> bool {
        matches!(self, Self::Increment)
    }
}
