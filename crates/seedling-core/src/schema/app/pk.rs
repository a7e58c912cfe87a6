use super::FieldId;

#[derive(Debug, Clone, Default)]
pub struct PrimaryKey {
    /// Fields composing the primary key, in declaration order
    pub fields: Vec<FieldId>,
}

impl PrimaryKey {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn is_composite(&self) -> bool {
        self.fields.len() > 1
    }
}
