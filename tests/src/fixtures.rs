//! Model declarations shared by the integration tests.

use seedling::{db::Builder, stmt::Type, Db};

/// `User` owning many `Todo`s, both keyed by store-assigned identities.
pub fn user_todo() -> Builder {
    let mut builder = Db::builder();
    builder
        .model("User", |m| {
            m.field("id", Type::I64).primary_key().auto_increment();
            m.field("name", Type::String);
        })
        .model("Todo", |m| {
            m.field("id", Type::I64).primary_key().auto_increment();
            m.field("user_id", Type::I64);
            m.field("title", Type::String);
            m.foreign_key(["user_id"], "User", ["id"]);
        });
    builder
}

/// `Foreign` referencing `Primary` through the caller-supplied key `K1`.
pub fn primary_foreign() -> Builder {
    let mut builder = Db::builder();
    builder
        .model("Primary", |m| {
            m.field("K1", Type::String).primary_key();
        })
        .model("Foreign", |m| {
            m.field("id", Type::I64).primary_key().auto_increment();
            m.field("primary_k1", Type::String);
            m.foreign_key(["primary_k1"], "Primary", ["K1"]);
        });
    builder
}

/// Keys chained through a composite primary key: a `Membership` is keyed by
/// its `Account`'s identity plus a sequence number, and a `Grant` references
/// the membership by both.
pub fn chained_keys() -> Builder {
    let mut builder = Db::builder();
    builder
        .model("Account", |m| {
            m.field("id", Type::I64).primary_key().auto_increment();
        })
        .model("Membership", |m| {
            m.field("account_id", Type::I64).primary_key();
            m.field("seq", Type::I32).primary_key();
            m.foreign_key(["account_id"], "Account", ["id"]);
        })
        .model("Grant", |m| {
            m.field("id", Type::I64).primary_key().auto_increment();
            m.field("account_id", Type::I64);
            m.field("seq", Type::I32);
            m.foreign_key(["account_id", "seq"], "Membership", ["account_id", "seq"]);
        });
    builder
}

/// Three models referencing each other in a ring: `A -> B -> C -> A`.
pub fn ring() -> Builder {
    let mut builder = Db::builder();
    builder
        .model("A", |m| {
            m.field("id", Type::I64).primary_key().auto_increment();
            m.field("b_id", Type::I64).nullable();
            m.foreign_key(["b_id"], "B", ["id"]);
        })
        .model("B", |m| {
            m.field("id", Type::I64).primary_key().auto_increment();
            m.field("c_id", Type::I64).nullable();
            m.foreign_key(["c_id"], "C", ["id"]);
        })
        .model("C", |m| {
            m.field("id", Type::I64).primary_key().auto_increment();
            m.field("a_id", Type::I64).nullable();
            m.foreign_key(["a_id"], "A", ["id"]);
        });
    builder
}

/// `Doc` with a required author and an optional reviewer.
pub fn reviewed_doc() -> Builder {
    let mut builder = Db::builder();
    builder
        .model("Author", |m| {
            m.field("id", Type::I64).primary_key().auto_increment();
        })
        .model("Reviewer", |m| {
            m.field("id", Type::I64).primary_key().auto_increment();
        })
        .model("Doc", |m| {
            m.field("id", Type::I64).primary_key().auto_increment();
            m.field("author_id", Type::I64);
            m.field("reviewer_id", Type::I64).nullable();
            m.foreign_key(["author_id"], "Author", ["id"]);
            m.foreign_key(["reviewer_id"], "Reviewer", ["id"]);
        });
    builder
}
