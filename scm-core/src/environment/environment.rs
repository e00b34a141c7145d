use std::collections::HashMap;

use super::prelude::Value;

pub type Bindings = HashMap<String, Value>;

/// Handle to an [`Environment`] stored in [`Scopes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

#[derive(Default, Debug, Clone, PartialEq)]
pub struct Environment {
    pub parent: Option<ScopeId>,
    pub store: Bindings,
}

impl Environment {
    pub fn new(parent: Option<ScopeId>) -> Self {
        Self {
            parent,
            store: HashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.store.get(name)
    }

    pub fn set(&mut self, name: String, value: Value) {
        self.store.insert(name, value);
    }
}

/// Arena of environments linked by parent handles.
///
/// Index 0 is the global environment, the only one without a parent.
/// Environments are never removed, so a handle held by a closure stays
/// valid for the lifetime of the arena.
#[derive(Debug, Clone, PartialEq)]
pub struct Scopes {
    scopes: Vec<Environment>,
}

impl Scopes {
    pub fn new(globals: Bindings) -> Self {
        Self {
            scopes: vec![Environment { parent: None, store: globals }],
        }
    }

    pub fn global(&self) -> ScopeId {
        ScopeId(0)
    }

    pub fn get(&self, scope: ScopeId) -> &Environment {
        &self.scopes[scope.0]
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Looks `name` up from `scope` outwards to the global environment.
    pub fn find(&self, scope: ScopeId, name: &str) -> Option<&Value> {
        let mut current = Some(scope);

        while let Some(id) = current {
            let environment = self.get(id);

            if let Some(value) = environment.get(name) {
                return Some(value);
            }

            current = environment.parent;
        }

        None
    }

    /// Inserts or overwrites in `scope` itself, never in a parent.
    pub fn bind(&mut self, scope: ScopeId, name: impl Into<String>, value: Value) {
        self.scopes[scope.0].set(name.into(), value);
    }

    pub fn spawn(&mut self, parent: ScopeId) -> ScopeId {
        self.scopes.push(Environment::new(Some(parent)));

        ScopeId(self.scopes.len() - 1)
    }
}
