use crate::test_utils::Fixture;
use crate::{Dynamic, GlobalStore, Payload, TypeKind};

#[test]
fn type_name_for_nominal_kinds() {
    let f = Fixture::new();

    assert_eq!(f.table.type_name(f.base), Some("Base"));
    assert_eq!(f.table.type_name(f.color), Some("Color"));
    assert_eq!(f.table.type_name(f.fd), Some("hl_fdesc"));
    assert_eq!(f.table.type_name(f.anon_enum), None);
    assert_eq!(f.table.type_name(f.v1), None);
    assert_eq!(f.table.type_name(f.int), None);
    assert_eq!(f.table.type_name(f.null_base), None);
}

#[test]
fn enum_constructs() {
    let f = Fixture::new();

    assert_eq!(f.table.enum_constructs(f.color), Some(vec!["Red", "Rgb"]));
    assert_eq!(f.table.enum_constructs(f.anon_enum), Some(vec![]));
    assert_eq!(f.table.enum_constructs(f.base), None);
}

#[test]
fn construct_args() {
    let f = Fixture::new();

    assert_eq!(f.table.construct_args(f.color, 0), Some(&[][..]));
    assert_eq!(
        f.table.construct_args(f.color, 1),
        Some(&[f.int, f.int, f.int][..])
    );
    assert_eq!(f.table.construct_args(f.color, 2), None);
    assert_eq!(f.table.construct_args(f.fn1, 0), None);
}

#[test]
fn arg_count() {
    let f = Fixture::new();

    assert_eq!(f.table.arg_count(f.fn1), 1);
    assert_eq!(f.table.arg_count(f.base), 0);
    assert_eq!(f.table.arg_count(f.int), 0);
}

#[test]
fn instance_fields_inherited_first() {
    let f = Fixture::new();

    assert_eq!(f.table.instance_fields(f.base), Some(vec!["x".to_owned()]));
    assert_eq!(
        f.table.instance_fields(f.mid),
        Some(vec!["x".to_owned(), "y".to_owned()])
    );
    assert_eq!(
        f.table.instance_fields(f.leaf),
        Some(vec!["x".to_owned(), "y".to_owned(), "z".to_owned()])
    );
    assert_eq!(f.table.instance_fields(f.other), Some(vec![]));
    assert_eq!(f.table.instance_fields(f.v1), None);
}

#[test]
fn virtual_fields() {
    let f = Fixture::new();

    assert_eq!(f.table.virtual_fields(f.v3), Some(vec!["a", "x"]));
    assert_eq!(f.table.virtual_fields(f.base), None);
}

#[test]
fn super_type() {
    let f = Fixture::new();

    assert_eq!(f.table.super_type(f.leaf), Some(f.mid));
    assert_eq!(f.table.super_type(f.mid), Some(f.base));
    assert_eq!(f.table.super_type(f.base), None);
    assert_eq!(f.table.super_type(f.int), None);
}

#[test]
fn static_value_of_class() {
    let f = Fixture::new();
    let mut globals = GlobalStore::for_table(&f.table);
    assert_eq!(globals.len(), 2);
    assert_eq!(f.table.static_value(f.base, &globals), None);

    let value = Dynamic::new(f.base, Payload::Object(0x40));
    globals.set(f.base_slot, value.clone());

    assert_eq!(f.table.static_value(f.base, &globals), Some(&value));
    assert_eq!(f.table.static_value(f.mid, &globals), None);
}

#[test]
fn static_value_of_enum() {
    let f = Fixture::new();
    let mut globals = GlobalStore::for_table(&f.table);
    let value = Dynamic::new(f.color, Payload::Int(1));
    globals.set(f.color_slot, value.clone());

    assert_eq!(f.table.static_value(f.color, &globals), Some(&value));
    assert_eq!(f.table.static_value(f.anon_enum, &globals), None);

    globals.clear(f.color_slot);
    assert_eq!(f.table.static_value(f.color, &globals), None);
}

#[test]
fn static_value_absent_for_other_kinds() {
    let f = Fixture::new();
    let globals = GlobalStore::for_table(&f.table);

    for ty in f.one_per_kind() {
        if !matches!(f.table.kind(ty), TypeKind::Object | TypeKind::Enum) {
            assert_eq!(f.table.static_value(ty, &globals), None);
        }
    }
}
