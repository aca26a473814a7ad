use std::{cell::RefCell, collections::HashMap};

use serde_json::Value;

use crate::model::session::{SessionRecord, SESSION_USER_KEY};

/// JSON key-value storage holding the session record.
///
/// Backed by browser local storage on the web and by memory elsewhere.
pub trait SessionStore {
    /// Stored value of a key; missing and unreadable values are `None`
    fn get(&self, key: &str) -> Option<Value>;

    fn set(&self, key: &str, value: &Value);

    /// Remove every key, not only the session record
    fn clear(&self);

    /// The logged in user, if any. A stored falsy value (`null`, `false`, `0`
    /// or `""`) counts as logged out.
    fn current_user(&self) -> Option<SessionRecord> {
        let value = self.get(SESSION_USER_KEY)?;

        (!is_falsy(&value)).then(|| SessionRecord(value))
    }

    fn set_current_user(&self, record: &SessionRecord) {
        self.set(SESSION_USER_KEY, &record.0);
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RefCell<HashMap<String, Value>>,
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &Value) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.clone());
    }

    fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}
