//! Lexical scopes.
//!
//! An [`Environment`] is a handle to one [`Scope`]. Scopes link to their
//! enclosing scope, so a closure that keeps its defining environment keeps
//! the whole chain alive.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::Value;
use monkey_ir::Name;

/// Single-threaded shared cell: `Rc<RefCell<T>>` behind one constructor.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

/// Bindings of one scope plus the scope it is nested in.
#[derive(Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Value>,
    outer: Option<Environment>,
}

/// Handle to a scope chain. Cloning shares the scope.
#[derive(Clone)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// A fresh, empty top-level environment.
    pub fn new() -> Self {
        Environment {
            scope: LocalScope::new(Scope::default()),
        }
    }

    /// An empty scope nested in `outer`.
    pub fn new_enclosed(outer: &Environment) -> Self {
        Environment {
            scope: LocalScope::new(Scope {
                bindings: FxHashMap::default(),
                outer: Some(outer.clone()),
            }),
        }
    }

    /// Look `name` up here, then in each enclosing scope.
    pub fn get(&self, name: Name) -> Option<Value> {
        let mut current = self.clone();
        loop {
            let next = {
                let scope = current.scope.borrow();
                if let Some(value) = scope.bindings.get(&name) {
                    return Some(value.clone());
                }
                scope.outer.clone()?
            };
            current = next;
        }
    }

    /// Bind `name` in this scope, shadowing any outer binding.
    pub fn set(&self, name: Name, value: Value) {
        self.scope.borrow_mut().bindings.insert(name, value);
    }

    pub fn local_count(&self) -> usize {
        self.scope.borrow().bindings.len()
    }

    /// Number of scopes in the chain, this one included.
    pub fn depth(&self) -> usize {
        let mut depth = 1usize;
        let mut outer = self.scope.borrow().outer.clone();
        while let Some(env) = outer {
            depth = depth.saturating_add(1);
            outer = env.scope.borrow().outer.clone();
        }
        depth
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.scope.ptr_eq(&other.scope)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    // Bindings can hold closures over this scope; print shape only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("locals", &self.local_count())
            .field("depth", &self.depth())
            .finish()
    }
}

pub fn new_environment() -> Environment {
    Environment::new()
}

pub fn new_enclosed_environment(outer: &Environment) -> Environment {
    Environment::new_enclosed(outer)
}
