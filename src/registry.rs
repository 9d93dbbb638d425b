//! Bidirectional mapping between dense ids (`0..len`) and user-chosen letters or states.
//!
//! Machines compute on ids only; a registry translates at the edges. A registry is
//! produced either from a collection of distinct values, or in identity mode where the
//! value of id `i` is `i` itself.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::types::{ConstructionError, MachineError};

/// Types usable as letters or states.
pub trait Symbol: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Symbol for T {}

/// What a registry names, used to pick the right error variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Letter,
    State,
}

#[derive(Debug, Clone)]
pub struct Registry<T> {
    values: Vec<T>,
    ids: HashMap<T, usize>,
    role: Role,
    identity: bool,
}

impl<T: Symbol> Registry<T> {
    /// Assigns ids to `values` in iteration order.
    ///
    /// Fails on the first value seen twice.
    pub fn from_values<I>(values: I, role: Role) -> Result<Self, ConstructionError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut registry = Self {
            values: Vec::new(),
            ids: HashMap::new(),
            role,
            identity: false,
        };

        for value in values {
            if registry.ids.contains_key(&value) {
                let shown = format!("{:?}", value);
                return Err(match role {
                    Role::Letter => ConstructionError::DuplicateSymbol(shown),
                    Role::State => ConstructionError::DuplicateState(shown),
                });
            }
            registry.ids.insert(value.clone(), registry.values.len());
            registry.values.push(value);
        }

        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when the registry was built in identity mode.
    pub fn is_identity(&self) -> bool {
        self.identity
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn value_of(&self, id: usize) -> Option<&T> {
        self.values.get(id)
    }

    /// Looks up the id of `value`, failing with `UnknownSymbol` or `UnknownState`.
    pub fn id_of<Q>(&self, value: &Q) -> Result<usize, MachineError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.ids.get(value).copied().ok_or_else(|| {
            let shown = format!("{:?}", value);
            match self.role {
                Role::Letter => MachineError::UnknownSymbol(shown),
                Role::State => MachineError::UnknownState(shown),
            }
        })
    }

    /// Iterates over the values in id order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }
}

impl Registry<usize> {
    /// A registry where every id names itself.
    pub fn identity(len: usize, role: Role) -> Self {
        Self {
            values: (0..len).collect(),
            ids: (0..len).map(|id| (id, id)).collect(),
            role,
            identity: true,
        }
    }
}

/// Marker selecting identity mode: letters or states are referred to by their ids.
///
/// The number of ids is taken from the matching dimension of the transition table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ids;

/// Anything a definition can turn into a registry.
///
/// `derived_len` is the count implied by the transition table; only identity mode uses it.
pub trait IntoRegistry<T> {
    fn into_registry(self, derived_len: usize, role: Role) -> Result<Registry<T>, ConstructionError>;
}

impl IntoRegistry<usize> for Ids {
    fn into_registry(
        self,
        derived_len: usize,
        role: Role,
    ) -> Result<Registry<usize>, ConstructionError> {
        Ok(Registry::identity(derived_len, role))
    }
}

impl<T, I> IntoRegistry<T> for I
where
    T: Symbol,
    I: IntoIterator<Item = T>,
{
    fn into_registry(self, _derived_len: usize, role: Role) -> Result<Registry<T>, ConstructionError> {
        Registry::from_values(self, role)
    }
}
