//! Recognition of the compiler-recognized language extension types.
//!
//! The declaration files describe every extension as an intersection with a
//! brand object:
//!
//! ```typescript
//! type LuaExtension<TBrand extends string> = {
//!     [T in TBrand]: { readonly __luaExtensionSymbol: unique symbol };
//! };
//! type LuaMultiReturn<T> = T & LuaExtension<"__luaMultiReturnBrand">;
//! ```
//!
//! Recognition is structural: a type is an extension when it has the brand
//! property and that property's type carries the unique extension symbol.
//! The name of the alias the user wrote never matters, so re-exported and
//! re-aliased extension types are recognized too.

use serde::Serialize;
use tslua_program::{
    Frontend, NodeIndex, PropertyInfo, SyntaxKind, TypeAnnotation, TypeId, TypeTable,
};

/// Property every brand object carries.
pub const EXTENSION_SYMBOL_PROPERTY: &str = "__luaExtensionSymbol";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum OperatorKind {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Modulo,
    Power,
    FloorDivision,
    BitwiseAnd,
    BitwiseOr,
    BitwiseExclusiveOr,
    BitwiseLeftShift,
    BitwiseRightShift,
    Concat,
    LessThan,
    GreaterThan,
    Negation,
    BitwiseNot,
    Length,
}

impl OperatorKind {
    pub const ALL: [Self; 18] = [
        Self::Addition,
        Self::Subtraction,
        Self::Multiplication,
        Self::Division,
        Self::Modulo,
        Self::Power,
        Self::FloorDivision,
        Self::BitwiseAnd,
        Self::BitwiseOr,
        Self::BitwiseExclusiveOr,
        Self::BitwiseLeftShift,
        Self::BitwiseRightShift,
        Self::Concat,
        Self::LessThan,
        Self::GreaterThan,
        Self::Negation,
        Self::BitwiseNot,
        Self::Length,
    ];

    /// Lua operator the mapping lowers to.
    pub const fn lua_token(self) -> &'static str {
        match self {
            Self::Addition => "+",
            Self::Subtraction | Self::Negation => "-",
            Self::Multiplication => "*",
            Self::Division => "/",
            Self::Modulo => "%",
            Self::Power => "^",
            Self::FloorDivision => "//",
            Self::BitwiseAnd => "&",
            Self::BitwiseOr => "|",
            Self::BitwiseExclusiveOr | Self::BitwiseNot => "~",
            Self::BitwiseLeftShift => "<<",
            Self::BitwiseRightShift => ">>",
            Self::Concat => "..",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::Length => "#",
        }
    }

    /// Number of operands.
    pub const fn arity(self) -> u8 {
        match self {
            Self::Negation | Self::BitwiseNot | Self::Length => 1,
            _ => 2,
        }
    }

    pub const fn is_unary(self) -> bool {
        self.arity() == 1
    }

    /// Brand of the free-function form, e.g. `LuaAddition<A, B, R>`.
    pub const fn function_brand(self) -> &'static str {
        match self {
            Self::Addition => "__luaAdditionBrand",
            Self::Subtraction => "__luaSubtractionBrand",
            Self::Multiplication => "__luaMultiplicationBrand",
            Self::Division => "__luaDivisionBrand",
            Self::Modulo => "__luaModuloBrand",
            Self::Power => "__luaPowerBrand",
            Self::FloorDivision => "__luaFloorDivisionBrand",
            Self::BitwiseAnd => "__luaBitwiseAndBrand",
            Self::BitwiseOr => "__luaBitwiseOrBrand",
            Self::BitwiseExclusiveOr => "__luaBitwiseExclusiveOrBrand",
            Self::BitwiseLeftShift => "__luaBitwiseLeftShiftBrand",
            Self::BitwiseRightShift => "__luaBitwiseRightShiftBrand",
            Self::Concat => "__luaConcatBrand",
            Self::LessThan => "__luaLessThanBrand",
            Self::GreaterThan => "__luaGreaterThanBrand",
            Self::Negation => "__luaNegationBrand",
            Self::BitwiseNot => "__luaBitwiseNotBrand",
            Self::Length => "__luaLengthBrand",
        }
    }

    /// Brand of the method form, e.g. `LuaAdditionMethod<B, R>`.
    pub const fn method_brand(self) -> &'static str {
        match self {
            Self::Addition => "__luaAdditionMethodBrand",
            Self::Subtraction => "__luaSubtractionMethodBrand",
            Self::Multiplication => "__luaMultiplicationMethodBrand",
            Self::Division => "__luaDivisionMethodBrand",
            Self::Modulo => "__luaModuloMethodBrand",
            Self::Power => "__luaPowerMethodBrand",
            Self::FloorDivision => "__luaFloorDivisionMethodBrand",
            Self::BitwiseAnd => "__luaBitwiseAndMethodBrand",
            Self::BitwiseOr => "__luaBitwiseOrMethodBrand",
            Self::BitwiseExclusiveOr => "__luaBitwiseExclusiveOrMethodBrand",
            Self::BitwiseLeftShift => "__luaBitwiseLeftShiftMethodBrand",
            Self::BitwiseRightShift => "__luaBitwiseRightShiftMethodBrand",
            Self::Concat => "__luaConcatMethodBrand",
            Self::LessThan => "__luaLessThanMethodBrand",
            Self::GreaterThan => "__luaGreaterThanMethodBrand",
            Self::Negation => "__luaNegationMethodBrand",
            Self::BitwiseNot => "__luaBitwiseNotMethodBrand",
            Self::Length => "__luaLengthMethodBrand",
        }
    }
}

/// Closed set of extension brands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ExtensionKind {
    /// `$multi(...)`
    MultiFunction,
    /// `LuaMultiReturn<T>`
    MultiType,
    /// `$range(start, limit, step)`
    RangeFunction,
    /// `LuaIterable<T>`
    IterableType,
    Operator { kind: OperatorKind, method: bool },
    TableGet { method: bool },
    TableSet { method: bool },
    TableNew,
}

impl ExtensionKind {
    /// Every brand, in classification order.
    pub fn all() -> impl Iterator<Item = Self> {
        let operators = OperatorKind::ALL.into_iter().flat_map(|kind| {
            [
                Self::Operator {
                    kind,
                    method: false,
                },
                Self::Operator { kind, method: true },
            ]
        });
        [
            Self::MultiFunction,
            Self::MultiType,
            Self::RangeFunction,
            Self::IterableType,
        ]
        .into_iter()
        .chain(operators)
        .chain([
            Self::TableGet { method: false },
            Self::TableGet { method: true },
            Self::TableSet { method: false },
            Self::TableSet { method: true },
            Self::TableNew,
        ])
    }

    /// Name of the brand property marking this extension.
    pub const fn brand_name(self) -> &'static str {
        match self {
            Self::MultiFunction => "__luaMultiFunctionBrand",
            Self::MultiType => "__luaMultiReturnBrand",
            Self::RangeFunction => "__luaRangeFunctionBrand",
            Self::IterableType => "__luaIterableBrand",
            Self::Operator {
                kind,
                method: false,
            } => kind.function_brand(),
            Self::Operator { kind, method: true } => kind.method_brand(),
            Self::TableGet { method: false } => "__luaTableGetBrand",
            Self::TableGet { method: true } => "__luaTableGetMethodBrand",
            Self::TableSet { method: false } => "__luaTableSetBrand",
            Self::TableSet { method: true } => "__luaTableSetMethodBrand",
            Self::TableNew => "__luaTableNewBrand",
        }
    }

    pub const fn is_operator(self) -> bool {
        matches!(self, Self::Operator { .. })
    }

    pub const fn is_table_extension(self) -> bool {
        matches!(
            self,
            Self::TableGet { .. } | Self::TableSet { .. } | Self::TableNew
        )
    }
}

/// Whether `type_id` carries the brand of `kind`.
pub fn is_extension_type(frontend: &dyn Frontend, type_id: TypeId, kind: ExtensionKind) -> bool {
    let Some(brand) = frontend.property_of_type(type_id, kind.brand_name()) else {
        return false;
    };
    frontend
        .property_of_type(brand, EXTENSION_SYMBOL_PROPERTY)
        .is_some_and(|marker| frontend.is_unique_symbol_type(marker))
}

/// Extension `type_id` is branded with, if any.
pub fn get_extension_kind_for_type(
    frontend: &dyn Frontend,
    type_id: TypeId,
) -> Option<ExtensionKind> {
    ExtensionKind::all().find(|&kind| is_extension_type(frontend, type_id, kind))
}

/// Extension the type of `node` is branded with, if any.
pub fn get_extension_kind_for_node(
    frontend: &dyn Frontend,
    node: NodeIndex,
) -> Option<ExtensionKind> {
    let type_id = frontend.type_at_location(node)?;
    get_extension_kind_for_type(frontend, type_id)
}

pub fn is_multi_function_node(frontend: &dyn Frontend, node: NodeIndex) -> bool {
    get_extension_kind_for_node(frontend, node) == Some(ExtensionKind::MultiFunction)
}

pub fn is_range_function_node(frontend: &dyn Frontend, node: NodeIndex) -> bool {
    get_extension_kind_for_node(frontend, node) == Some(ExtensionKind::RangeFunction)
}

pub fn is_operator_mapping(frontend: &dyn Frontend, node: NodeIndex) -> bool {
    get_extension_kind_for_node(frontend, node).is_some_and(ExtensionKind::is_operator)
}

pub fn is_table_extension_identifier(frontend: &dyn Frontend, node: NodeIndex) -> bool {
    get_extension_kind_for_node(frontend, node).is_some_and(ExtensionKind::is_table_extension)
}

/// Whether the type of `node` is annotated `@forRange`.
pub fn is_for_range_type(frontend: &dyn Frontend, node: NodeIndex) -> bool {
    frontend
        .type_at_location(node)
        .is_some_and(|type_id| frontend.type_annotations(type_id).contains(&TypeAnnotation::ForRange))
}

/// Whether `node` is used other than as the callee of a call or `new`.
///
/// Parentheses around the callee are transparent: `(f)()` calls `f`.
pub fn is_bare_value(frontend: &dyn Frontend, node: NodeIndex) -> bool {
    let mut current = node;
    let mut parent = frontend.parent(current);
    let mut iterations = 0;
    while frontend.kind(parent) == Some(SyntaxKind::ParenthesizedExpression) {
        iterations += 1;
        if iterations > tslua_common::limits::MAX_TREE_WALK_ITERATIONS {
            tracing::warn!(node = node.0, "parenthesized chain exceeds walk limit");
            return true;
        }
        current = parent;
        parent = frontend.parent(current);
    }
    let is_callee = frontend
        .node(parent)
        .filter(|n| n.kind.is_call_like())
        .and_then(|n| n.as_call())
        .is_some_and(|call| call.expression == current);
    !is_callee
}

/// Brand `base` as the extension `kind`, the way the declaration files do.
///
/// Produces `base & { [brand]: { readonly __luaExtensionSymbol: unique symbol } }`.
pub fn create_extension_type(types: &mut TypeTable, kind: ExtensionKind, base: TypeId) -> TypeId {
    let marker = types.unique_symbol(EXTENSION_SYMBOL_PROPERTY);
    let brand = types.object(vec![PropertyInfo::new(EXTENSION_SYMBOL_PROPERTY, marker)]);
    let brand_object = types.object(vec![PropertyInfo::new(kind.brand_name(), brand)]);
    types.intersection(vec![base, brand_object])
}
