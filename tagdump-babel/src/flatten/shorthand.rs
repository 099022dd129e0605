use super::{insert_structure, name_value, FlattenStrategy, TEXT_KEY};
use crate::token::Token;
use serde_yaml::{Mapping, Value};

/// Keys every element by its own name: `{<name>: {text, attribs, subs}}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Shorthand;

impl FlattenStrategy for Shorthand {
    fn render(&self, token: &Token, subs: Vec<Value>) -> Value {
        let mut body = Mapping::new();
        if let Some(text) = &token.text {
            body.insert(TEXT_KEY.into(), Value::String(text.clone()));
        }
        insert_structure(&mut body, token, subs);

        let mut mapping = Mapping::with_capacity(1);
        mapping.insert(name_value(token), Value::Mapping(body));
        Value::Mapping(mapping)
    }
}
