mod column_symbol;
pub use column_symbol::ColumnSymbol;

mod symbol;
pub use symbol::{IdentityId, Symbol};

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

mod value_record;
pub use value_record::ValueRecord;
