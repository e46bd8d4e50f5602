//! Named collections of fields sharing one grid.

use crate::view::FieldView;
use indexmap::IndexMap;
use log::debug;
use std::sync::Arc;
use thermocline_core::FieldError;
use thermocline_grid::Grid;

/// An insertion-ordered set of named fields that all live on the same grid
/// instance, such as the layer thickness and velocities of a model state.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use thermocline_core::{Centre, Face, Topology};
/// use thermocline_field::{Field1D, FieldRegistry};
/// use thermocline_grid::Grid1D;
///
/// let grid = Arc::new(Grid1D::new(Topology::Periodic, 8, 0.0, 1.0, 1).unwrap());
/// let mut state = FieldRegistry::new(grid.clone());
/// state.insert("h", Field1D::zeros(Centre, grid.clone())).unwrap();
/// state.insert("u", Field1D::zeros(Face, grid)).unwrap();
/// assert_eq!(state.names().collect::<Vec<_>>(), ["h", "u"]);
/// assert!(state.get_as::<Field1D<Face>>("u").is_some());
/// ```
#[derive(Debug)]
pub struct FieldRegistry {
    grid: Arc<dyn Grid>,
    fields: IndexMap<String, Box<dyn FieldView>>,
}

impl FieldRegistry {
    /// An empty registry bound to `grid`.
    pub fn new(grid: Arc<dyn Grid>) -> Self {
        Self {
            grid,
            fields: IndexMap::new(),
        }
    }

    /// The grid every registered field lives on.
    pub fn grid(&self) -> &dyn Grid {
        &*self.grid
    }

    /// Register `field` under `name`.
    ///
    /// Returns `Err(FieldError::GridMismatch)` if the field lives on another
    /// grid instance (even one with an identical layout), or
    /// `Err(FieldError::DuplicateName)` if `name` is taken.
    pub fn insert<F: FieldView>(
        &mut self,
        name: impl Into<String>,
        field: F,
    ) -> Result<(), FieldError> {
        let name = name.into();
        let expected = self.grid.instance_id();
        let actual = field.grid_id();
        if actual != expected {
            return Err(FieldError::GridMismatch { expected, actual });
        }
        if self.fields.contains_key(&name) {
            return Err(FieldError::DuplicateName { name });
        }
        debug!(
            "registered field '{name}' at {:?} with shape {:?} on grid #{expected}",
            field.locations().as_slice(),
            field.shape().as_slice()
        );
        self.fields.insert(name, Box::new(field));
        Ok(())
    }

    /// The field registered under `name`.
    pub fn get(&self, name: &str) -> Option<&dyn FieldView> {
        self.fields.get(name).map(|f| &**f)
    }

    /// The field registered under `name`, if it has concrete type `T`.
    pub fn get_as<T: FieldView>(&self, name: &str) -> Option<&T> {
        self.get(name).and_then(|f| f.downcast_ref::<T>())
    }

    /// The field registered under `name`, mutably, if it has concrete type `T`.
    pub fn get_mut_as<T: FieldView>(&mut self, name: &str) -> Option<&mut T> {
        self.fields
            .get_mut(name)
            .and_then(|f| (**f).downcast_mut::<T>())
    }

    /// Remove and return the field registered under `name`, keeping the
    /// order of the remaining fields.
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn FieldView>> {
        self.fields.shift_remove(name)
    }

    /// Returns `true` if a field is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Field names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    /// `(name, field)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn FieldView)> + '_ {
        self.fields.iter().map(|(k, v)| (k.as_str(), &**v))
    }

    /// Number of registered fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no fields are registered.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
