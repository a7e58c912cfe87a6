mod auto;
pub use auto::AutoStrategy;

mod field;
pub use field::{Field, FieldId, FieldName};

mod fk;
pub use fk::{ForeignKey, ForeignKeyField};

mod key_type;
pub use key_type::KeyType;

mod model;
pub use model::{Model, ModelId};

mod pk;
pub use pk::PrimaryKey;

mod schema;
pub use schema::Schema;
