//! Structural type table.
//!
//! Types are stored in a `TypeTable` and referenced by `TypeId`. The table only
//! models what the lowering passes inspect: object shapes (property names and
//! their types), intersections, unions, aliases and the annotations attached to
//! a type's declaration.

use serde::Serialize;

/// Index of a type inside a `TypeTable`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TypeId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum IntrinsicKind {
    Any,
    Unknown,
    Never,
    Void,
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Symbol,
}

/// JSDoc-style annotation attached to a type's declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TypeAnnotation {
    /// `@forRange`: calls are lowered to a numeric `for` loop header.
    ForRange,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PropertyInfo {
    pub name: String,
    pub type_id: TypeId,
}

impl PropertyInfo {
    pub fn new(name: impl Into<String>, type_id: TypeId) -> Self {
        Self {
            name: name.into(),
            type_id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum TypeData {
    Intrinsic(IntrinsicKind),
    /// `unique symbol`; every instance is a distinct type.
    UniqueSymbol {
        description: String,
    },
    Object {
        properties: Vec<PropertyInfo>,
        annotations: Vec<TypeAnnotation>,
    },
    Function {
        parameters: Vec<TypeId>,
        return_type: TypeId,
        annotations: Vec<TypeAnnotation>,
    },
    Intersection(Vec<TypeId>),
    Union(Vec<TypeId>),
    /// `type Name = target`
    Alias {
        name: String,
        target: TypeId,
    },
}

/// Arena of types.
#[derive(Debug, Default, Serialize)]
pub struct TypeTable {
    types: Vec<TypeData>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self { types: Vec::new() }
    }

    pub fn add(&mut self, data: TypeData) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(data);
        id
    }

    pub fn get(&self, id: TypeId) -> Option<&TypeData> {
        self.types.get(id.0 as usize)
    }

    pub fn intrinsic(&mut self, kind: IntrinsicKind) -> TypeId {
        self.add(TypeData::Intrinsic(kind))
    }

    pub fn unique_symbol(&mut self, description: impl Into<String>) -> TypeId {
        self.add(TypeData::UniqueSymbol {
            description: description.into(),
        })
    }

    pub fn object(&mut self, properties: Vec<PropertyInfo>) -> TypeId {
        self.add(TypeData::Object {
            properties,
            annotations: Vec::new(),
        })
    }

    pub fn function(&mut self, parameters: Vec<TypeId>, return_type: TypeId) -> TypeId {
        self.add(TypeData::Function {
            parameters,
            return_type,
            annotations: Vec::new(),
        })
    }

    pub fn intersection(&mut self, members: Vec<TypeId>) -> TypeId {
        self.add(TypeData::Intersection(members))
    }

    pub fn union(&mut self, members: Vec<TypeId>) -> TypeId {
        self.add(TypeData::Union(members))
    }

    pub fn alias(&mut self, name: impl Into<String>, target: TypeId) -> TypeId {
        self.add(TypeData::Alias {
            name: name.into(),
            target,
        })
    }

    /// Attach an annotation to an object or function type.
    ///
    /// Returns `false` when the type cannot carry annotations.
    pub fn annotate(&mut self, id: TypeId, annotation: TypeAnnotation) -> bool {
        match self.types.get_mut(id.0 as usize) {
            Some(
                TypeData::Object { annotations, .. } | TypeData::Function { annotations, .. },
            ) => {
                if !annotations.contains(&annotation) {
                    annotations.push(annotation);
                }
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
