use indoc::indoc;
use tessera_core::Colors;

use crate::test_utils::Fixture;
use crate::{Dynamic, Payload, PrintTracer, TypeKind};

#[test]
fn reflexive() {
    let f = Fixture::new();

    for ty in f.one_per_kind() {
        assert!(f.table.safe_cast(ty, ty), "{}", f.table.type_str(ty));
    }
}

#[test]
fn dynamic_is_top_for_dynamic_kinds_except_virtual() {
    let f = Fixture::new();

    for ty in f.one_per_kind() {
        let kind = f.table.kind(ty);
        let expected = kind.is_dynamic() && kind != TypeKind::Virtual;
        assert_eq!(f.table.safe_cast(ty, f.dynamic), expected, "{kind:?}");
    }
}

#[test]
fn dynamic_rejects_static_kinds() {
    let f = Fixture::new();

    for ty in [f.fd, f.bytes, f.int, f.boolean, f.type_ref, f.ref_int, f.color] {
        assert!(!f.table.safe_cast(ty, f.dynamic));
    }
}

#[test]
fn mismatched_kinds_fail() {
    let f = Fixture::new();

    assert!(!f.table.safe_cast(f.int, f.float));
    assert!(!f.table.safe_cast(f.dynamic, f.base));
    assert!(!f.table.safe_cast(f.null_int, f.int));
}

#[test]
fn virtual_prefix() {
    let f = Fixture::new();

    assert!(f.table.safe_cast(f.v1, f.v2));
    assert!(!f.table.safe_cast(f.v2, f.v1));
    assert!(!f.table.safe_cast(f.v3, f.v2));
    assert!(!f.table.safe_cast(f.v1, f.v3));
}

#[test]
fn virtual_same_fields_distinct_descriptor() {
    let f = Fixture::new();

    assert!(f.table.safe_cast(f.v2, f.v2_copy));
    assert!(f.table.safe_cast(f.v2_copy, f.v2));
}

#[test]
fn object_chain() {
    let f = Fixture::new();

    assert!(f.table.safe_cast(f.leaf, f.base));
    assert!(f.table.safe_cast(f.leaf, f.mid));
    assert!(f.table.safe_cast(f.mid, f.base));
    assert!(!f.table.safe_cast(f.base, f.leaf));
    assert!(!f.table.safe_cast(f.base, f.mid));
    assert!(!f.table.safe_cast(f.other, f.base));
}

#[test]
fn function_return_is_covariant() {
    let f = Fixture::new();

    assert!(f.table.safe_cast(f.fn2, f.fn1));
    assert!(!f.table.safe_cast(f.fn1, f.fn2));
}

#[test]
fn function_args_must_cast() {
    let f = Fixture::new();

    // `(#Leaf (#Mid))` to `(#Mid (#Base))`: the argument cast `#Mid -> #Base` holds.
    assert!(f.table.safe_cast(f.fn3, f.fn1));
    // `(#Leaf (#Base))` to `(#Leaf (#Mid))`: `#Base -> #Mid` does not.
    assert!(!f.table.safe_cast(f.fn2, f.fn3));
}

#[test]
fn function_arity_must_match() {
    let mut b = crate::TypeTable::builder();
    let void = b.builtin(TypeKind::Void);
    let int = b.builtin(TypeKind::I32);
    let one = b.function([int], void);
    let two = b.function([int, int], void);
    let table = b.build().unwrap();

    assert!(!table.safe_cast(one, two));
    assert!(!table.safe_cast(two, one));
}

#[test]
fn dynamic_argument_escape() {
    let f = Fixture::new();

    // A `dynamic` source argument accepts a dynamic target argument...
    assert!(f.table.safe_cast(f.fn_dyn_arg, f.fn_obj_arg));
    // ...but not a static one.
    assert!(!f.table.safe_cast(f.fn_dyn_arg, f.fn_int_arg));
    // `#Base -> dynamic` already holds through the top-type rule.
    assert!(f.table.safe_cast(f.fn_obj_arg, f.fn_dyn_arg));
}

#[test]
fn record_arguments_escape_only_from_dynamic_source() {
    let mut b = crate::TypeTable::builder();
    let void = b.builtin(TypeKind::Void);
    let int = b.builtin(TypeKind::I32);
    let dynamic = b.builtin(TypeKind::Dynamic);
    let a = b.field("a", int).unwrap();
    let record = b.virtual_type([a]);
    let takes_record = b.function([record], void);
    let takes_dynamic = b.function([dynamic], void);
    let table = b.build().unwrap();

    assert_eq!(table.type_str(takes_record), "(void (virtual<a:i32>))");
    // A record never widens to `dynamic` implicitly, not even as an argument.
    assert!(!table.safe_cast(takes_record, takes_dynamic));
    // A `dynamic` source argument accepts any dynamic target argument.
    assert!(table.safe_cast(takes_dynamic, takes_record));
}

#[test]
fn wrappers_fall_back_to_same_type() {
    let f = Fixture::new();

    assert!(f.table.safe_cast(f.null_int, f.null_int_copy));
    assert!(!f.table.safe_cast(f.null_int, f.null_base));
    assert!(f.table.safe_cast(f.fd, f.fd_again));
    assert!(!f.table.safe_cast(f.fd, f.socket));
}

#[test]
fn type_check_null() {
    let f = Fixture::new();

    assert!(f.table.type_check(f.base, None));
    assert!(f.table.type_check(f.null_int, None));
    assert!(!f.table.type_check(f.int, None));
}

#[test]
fn type_check_value() {
    let f = Fixture::new();
    let leaf = Dynamic::new(f.leaf, Payload::Object(0x1000));
    let int = Dynamic::new(f.int, Payload::Int(7));

    assert!(f.table.type_check(f.base, Some(&leaf)));
    assert!(f.table.type_check(f.dynamic, Some(&leaf)));
    assert!(!f.table.type_check(f.other, Some(&leaf)));
    assert!(f.table.type_check(f.int, Some(&int)));
    assert!(!f.table.type_check(f.dynamic, Some(&int)));
}

#[test]
fn trace_object_chain() {
    let f = Fixture::new();
    let mut tracer = PrintTracer::new(&f.table, Colors::OFF);

    assert!(f.table.safe_cast_traced(f.leaf, f.base, &mut tracer));
    insta::assert_snapshot!(tracer.finish(), @r"
    #Leaf -> #Base
      object chain: true
    ");
}

#[test]
fn trace_function() {
    let f = Fixture::new();
    let mut tracer = PrintTracer::new(&f.table, Colors::OFF);

    assert!(f.table.safe_cast_traced(f.fn3, f.fn1, &mut tracer));
    assert_eq!(
        tracer.finish(),
        indoc! {"
            (#Leaf (#Mid)) -> (#Mid (#Base))
              #Leaf -> #Mid
                object chain: true
              #Mid -> #Base
                object chain: true
              function: true
        "}
    );
}

#[test]
fn trace_dynamic_escape() {
    let f = Fixture::new();
    let mut tracer = PrintTracer::new(&f.table, Colors::OFF);

    assert!(f.table.safe_cast_traced(f.fn_dyn_arg, f.fn_obj_arg, &mut tracer));
    insta::assert_snapshot!(tracer.finish(), @r"
    (void (dynamic)) -> (void (#Base))
      void -> void
        identity: true
      dynamic -> #Base
        kind mismatch: false
      function: true
    ");
}

#[test]
fn trace_colored_verdict() {
    let f = Fixture::new();
    let mut tracer = PrintTracer::new(&f.table, Colors::ON);

    assert!(!f.table.safe_cast_traced(f.int, f.dynamic, &mut tracer));
    let log = tracer.finish();
    assert_eq!(log.lines().count(), 2);
    assert!(log.lines().nth(1).unwrap().contains("\x1b[31mfalse"));
}
