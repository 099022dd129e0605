use super::{insert_structure, name_value, FlattenStrategy, NAME_KEY};
use crate::token::Token;
use serde_yaml::{Mapping, Value};

/// Spells every element out as `{_name, attribs, subs}`.
///
/// Captured text is not part of this shape and is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct Explicit;

impl FlattenStrategy for Explicit {
    fn render(&self, token: &Token, subs: Vec<Value>) -> Value {
        let mut mapping = Mapping::new();
        mapping.insert(NAME_KEY.into(), name_value(token));
        insert_structure(&mut mapping, token, subs);
        Value::Mapping(mapping)
    }
}
