pub mod ordered_map;
pub mod value;

pub use ordered_map::OrderedMap;
pub use value::Value;

/// A stored or projected row: column name to value, in column order.
///
/// A declared column may be missing from a row entirely; that is different
/// from being present with `Value::Null`.
pub type Row = OrderedMap<Value>;
