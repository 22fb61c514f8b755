//! Tests for the provided `Frontend` helpers.

use super::*;

fn brand_object(program: &mut Program, property: &str) -> TypeId {
    let marker = program.types.unique_symbol("__luaExtensionSymbol");
    let inner = program
        .types
        .object(vec![PropertyInfo::new("__luaExtensionSymbol", marker)]);
    program.types.object(vec![PropertyInfo::new(property, inner)])
}

#[test]
fn test_property_of_object_type() {
    let mut program = Program::new("test.ts");
    let number = program.types.intrinsic(IntrinsicKind::Number);
    let obj = program.types.object(vec![PropertyInfo::new("length", number)]);

    assert_eq!(program.property_of_type(obj, "length"), Some(number));
    assert_eq!(program.property_of_type(obj, "size"), None);
    assert_eq!(program.property_of_type(number, "length"), None);
}

#[test]
fn test_property_of_intersection_and_alias() {
    let mut program = Program::new("test.ts");
    let number = program.types.intrinsic(IntrinsicKind::Number);
    let brand = brand_object(&mut program, "__luaTableGetBrand");
    let func = program.types.function(vec![number], number);
    let both = program.types.intersection(vec![func, brand]);
    let alias = program.types.alias("LuaTableGet", both);

    assert!(program.property_of_type(both, "__luaTableGetBrand").is_some());
    assert!(program.property_of_type(alias, "__luaTableGetBrand").is_some());
    assert!(program.property_of_type(alias, "__luaTableSetBrand").is_none());
}

#[test]
fn test_property_of_union_requires_every_member() {
    let mut program = Program::new("test.ts");
    let a = brand_object(&mut program, "__luaIterableBrand");
    let b = brand_object(&mut program, "__luaIterableBrand");
    let c = program.types.intrinsic(IntrinsicKind::Undefined);

    let all = program.types.union(vec![a, b]);
    assert!(program.property_of_type(all, "__luaIterableBrand").is_some());

    let partial = program.types.union(vec![a, c]);
    assert!(program.property_of_type(partial, "__luaIterableBrand").is_none());
}

#[test]
fn test_property_lookup_survives_alias_cycle() {
    let mut program = Program::new("test.ts");
    // Alias pointing at itself: lookup must terminate.
    let id = program.types.alias("Loop", TypeId(0));
    assert_eq!(id, TypeId(0));
    assert_eq!(program.property_of_type(id, "x"), None);
    assert!(!program.is_unique_symbol_type(id));
}

#[test]
fn test_unique_symbol_through_alias() {
    let mut program = Program::new("test.ts");
    let sym = program.types.unique_symbol("brand");
    let alias = program.types.alias("Brand", sym);
    let string = program.types.intrinsic(IntrinsicKind::String);

    assert!(program.is_unique_symbol_type(sym));
    assert!(program.is_unique_symbol_type(alias));
    assert!(!program.is_unique_symbol_type(string));
}

#[test]
fn test_type_annotations_collected_from_intersection() {
    let mut program = Program::new("test.ts");
    let number = program.types.intrinsic(IntrinsicKind::Number);
    let func = program.types.function(vec![number, number], number);
    assert!(program.types.annotate(func, TypeAnnotation::ForRange));
    assert!(!program.types.annotate(number, TypeAnnotation::ForRange));

    let other = program.types.object(Vec::new());
    let both = program.types.intersection(vec![func, other]);
    let alias = program.types.alias("ForRange", both);

    assert_eq!(program.type_annotations(alias).as_slice(), &[TypeAnnotation::ForRange]);
    assert!(program.type_annotations(other).is_empty());
}

#[test]
fn test_find_ancestor_is_strict() {
    let mut program = Program::new("test.ts");
    let callee = program.identifier("f", 0);
    let inner = program.call(callee, Vec::new());
    let outer_callee = program.identifier("g", 4);
    let outer = program.call(outer_callee, vec![inner]);

    let is_call = |node: &Node| node.kind == SyntaxKind::CallExpression;
    assert_eq!(program.find_ancestor(callee, &is_call), Some(inner));
    assert_eq!(program.find_ancestor(inner, &is_call), Some(outer));
    assert_eq!(program.find_ancestor(outer, &is_call), None);
}

#[test]
fn test_declaring_scope_chain_innermost_first() {
    let mut program = Program::new("test.ts");
    let file = program.add_symbol(Symbol::new("\"test\"", SymbolFlags::SOURCE_FILE));
    let outer = program.add_symbol(
        Symbol::new("Outer", SymbolFlags::NAMESPACE | SymbolFlags::EXPORTED).with_parent(file),
    );
    let inner = program.add_symbol(
        Symbol::new("Inner", SymbolFlags::NAMESPACE | SymbolFlags::EXPORTED).with_parent(outer),
    );
    let value = program.add_symbol(
        Symbol::new("value", SymbolFlags::VARIABLE | SymbolFlags::EXPORTED).with_parent(inner),
    );

    assert_eq!(
        program.declaring_scope_chain(value).as_slice(),
        &[inner, outer, file]
    );
    assert!(program.declaring_scope_chain(file).is_empty());
}

#[test]
fn test_declaring_scope_chain_cycle_is_cut() {
    let mut program = Program::new("test.ts");
    let a = program.add_symbol(Symbol::new("A", SymbolFlags::NAMESPACE));
    let b = program.add_symbol(Symbol::new("B", SymbolFlags::NAMESPACE).with_parent(a));
    if let Some(sym) = program.symbols.get_mut(a) {
        sym.parent = Some(b);
    }

    let chain = program.declaring_scope_chain(a);
    assert_eq!(chain.as_slice(), &[b, a]);
}

#[test]
fn test_symbol_and_type_at_location() {
    let mut program = Program::new("test.ts");
    let ident = program.identifier("x", 0);
    let number = program.types.intrinsic(IntrinsicKind::Number);
    let sym = program.add_symbol(Symbol::new("x", SymbolFlags::VARIABLE));
    program.set_type(ident, number);
    program.bind(ident, sym);
    program.add_declaration(sym, ident);

    assert_eq!(program.type_at_location(ident), Some(number));
    assert_eq!(program.symbol_at_location(ident), Some(sym));
    assert_eq!(
        program.symbol(sym).map(|s| s.declarations.clone()),
        Some(vec![ident])
    );
    let frontend: &dyn Frontend = &program;
    assert_eq!(frontend.type_data(number), Some(&TypeData::Intrinsic(IntrinsicKind::Number)));
}
