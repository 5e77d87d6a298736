//! Strongly typed identifier wrappers, plus a string interner for node ids.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and Vec
//! indices without ceremony. The inner integer is `pub` to allow direct
//! indexing into arena `Vec`s via `id.0 as usize`, but callers should prefer
//! the `.index()` helper for clarity.

use std::collections::HashMap;
use std::fmt;

macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }
    };
}

typed_id! {
    /// Index of a node (intersection) in the interned node table.
    pub struct NodeId(u32);
}

typed_id! {
    /// Index of a vehicle. Vehicles are never reused; ids are dense and
    /// monotonic in injection order.
    pub struct VehicleId(u32);
}

typed_id! {
    /// Index of a `Lane` in the flat lane arena owned by `tsim-road`.
    pub struct LaneId(u32);
}

typed_id! {
    /// Index of an `Intersection` in the flat intersection arena.
    pub struct IntersectionId(u32);
}

/// Interns opaque node-id strings (as read from topology/demand CSVs) into
/// dense `NodeId` handles.
///
/// Node ids in the source data are arbitrary strings (spec: "Node id: opaque
/// string"). Everything downstream of loading wants a cheap `Copy` key, so
/// the interner is the one place string comparisons happen.
#[derive(Default, Debug)]
pub struct NodeRegistry {
    by_name: HashMap<String, NodeId>,
    names: Vec<String>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the `NodeId` for `name`, interning it if this is the first
    /// time it has been seen.
    pub fn intern(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = NodeId(self.names.len() as u32);
        self.names.push(name.to_string());
        self.by_name.insert(name.to_string(), id);
        id
    }

    /// Look up an already-interned node id without inserting.
    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// The original string for a `NodeId`, for error messages and CSV output.
    pub fn name(&self, id: NodeId) -> &str {
        &self.names[id.index()]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (NodeId(i as u32), name.as_str()))
    }
}
