pub mod alias_identity;
pub mod alias_kind;

pub use alias_identity::AliasIdentity;
pub use alias_kind::AliasKind;
