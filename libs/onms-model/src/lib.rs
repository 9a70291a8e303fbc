pub mod collection;
pub mod kind;
pub mod producer;
pub mod schema;

pub use kind::{MessageKind, UnknownKind};
pub use schema::{DecodeError, DomainObject, Schema, schema_for};

/// Поле со значением по умолчанию в JSON не попадает.
pub(crate) fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}
