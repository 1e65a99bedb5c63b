use crate::test_utils::Fixture;
use crate::{TypeKind, TypeTable};

#[test]
fn keywords() {
    let f = Fixture::new();
    let rendered: Vec<_> = [
        f.void, f.byte, f.short, f.int, f.single, f.float, f.boolean, f.bytes, f.dynamic, f.array,
        f.type_ref, f.dynobj,
    ]
    .into_iter()
    .map(|ty| f.table.type_str(ty))
    .collect();

    insta::assert_snapshot!(rendered.join(" "), @"void i8 i16 i32 f32 f64 bool bytes dynamic array type dynobj");
}

#[test]
fn structured() {
    let f = Fixture::new();
    let rendered: Vec<_> = [
        f.fn1, f.fn_dyn_arg, f.base, f.ref_int, f.v1, f.fd, f.color, f.anon_enum, f.null_base,
    ]
    .into_iter()
    .map(|ty| f.table.type_str(ty))
    .collect();

    insta::assert_snapshot!(rendered.join("\n"), @r"
    (#Mid (#Base))
    (void (dynamic))
    #Base
    ref<i32>
    virtual<a:i32,b:bool,c:bytes>
    hl_fdesc
    enum<Color>
    enum
    null<#Base>
    ");
}

#[test]
fn virtual_fields_in_order() {
    let mut b = TypeTable::builder();
    let int = b.builtin(TypeKind::I32);
    let boolean = b.builtin(TypeKind::Bool);
    let x = b.field("x", int).unwrap();
    let y = b.field("y", boolean).unwrap();
    let v = b.virtual_type([x, y]);
    let table = b.build().unwrap();

    assert_eq!(table.type_str(v), "virtual<x:i32,y:bool>");
    assert_eq!(table.type_str(v), table.type_str(v));
}

#[test]
fn nested_functions() {
    let mut b = TypeTable::builder();
    let void = b.builtin(TypeKind::Void);
    let int = b.builtin(TypeKind::I32);
    let boolean = b.builtin(TypeKind::Bool);
    let callback = b.function([int], void);
    let nullable_cb = b.nullable(callback);
    let register = b.function([nullable_cb, int], boolean);
    let table = b.build().unwrap();

    insta::assert_snapshot!(table.type_str(register), @"(bool (null<(void (i32))>,i32))");
}

#[test]
fn zero_arg_function() {
    let mut b = TypeTable::builder();
    let int = b.builtin(TypeKind::I32);
    let thunk = b.function(Vec::new(), int);
    let table = b.build().unwrap();

    assert_eq!(table.type_str(thunk), "(i32 ())");
}

#[test]
fn self_referential_class() {
    let mut b = TypeTable::builder();
    let node = b.reserve();
    let next_ty = b.nullable(node);
    let next = b.field("next", next_ty).unwrap();
    let name = b.intern("Node");
    let class = b.add_class(crate::ClassDesc::new(name).with_fields([next]));
    b.define(node, crate::TypeDesc::Object(class)).unwrap();
    let table = b.build().unwrap();

    // Objects render by name, so recursion stops at the class.
    assert_eq!(table.type_str(next_ty), "null<#Node>");
}

#[test]
fn self_referential_record() {
    let mut b = TypeTable::builder();
    let node = b.reserve();
    let next_ty = b.nullable(node);
    let next = b.field("next", next_ty).unwrap();
    let virt = b.add_virtual([next]);
    b.define(node, crate::TypeDesc::Virtual(virt)).unwrap();
    let table = b.build().unwrap();

    assert_eq!(table.type_str(node), "virtual<next:null<virtual<...>>>");
    assert_eq!(table.type_str(next_ty), "null<virtual<next:null<virtual<...>>>>");
}

#[test]
fn mutually_recursive_records() {
    let mut b = TypeTable::builder();
    let int = b.builtin(TypeKind::I32);
    let a = b.reserve();
    let to_a = b.nullable(a);
    let back = b.field("back", to_a).unwrap();
    let value = b.field("value", int).unwrap();
    let tail = b.virtual_type([back, value]);
    let to_tail = b.nullable(tail);
    let head = b.field("head", to_tail).unwrap();
    let head_virt = b.add_virtual([head]);
    b.define(a, crate::TypeDesc::Virtual(head_virt)).unwrap();
    let table = b.build().unwrap();

    insta::assert_snapshot!(
        table.type_str(a),
        @"virtual<head:null<virtual<back:null<virtual<...>>,value:i32>>>"
    );
    insta::assert_snapshot!(
        table.type_str(tail),
        @"virtual<back:null<virtual<head:null<virtual<...>>>>,value:i32>"
    );
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "foreign enum handle")]
fn dangling_enum_is_reported() {
    let f = Fixture::new();
    f.table.without_enums().type_str(f.color);
}

#[test]
#[cfg(not(debug_assertions))]
fn dangling_enum_renders_placeholder() {
    let f = Fixture::new();
    assert_eq!(f.table.without_enums().type_str(f.color), "???");
}

#[test]
fn display_matches_type_str() {
    let f = Fixture::new();

    for (ty, _) in f.table.iter() {
        assert_eq!(f.table.display(ty).to_string(), f.table.type_str(ty));
    }
}

#[test]
fn write_into_existing_buffer() {
    let f = Fixture::new();
    let mut out = String::from("x: ");

    f.table.write_type_str(&mut out, f.v2).unwrap();
    assert_eq!(out, "x: virtual<a:i32,b:bool>");
}
