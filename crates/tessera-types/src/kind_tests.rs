use super::*;

#[test]
fn from_u8_follows_discriminant_order() {
    assert_eq!(TypeKind::from_u8(0), Some(TypeKind::Void));
    assert_eq!(TypeKind::from_u8(8), Some(TypeKind::Dynamic));
    assert_eq!(TypeKind::from_u8(14), Some(TypeKind::Virtual));
    assert_eq!(TypeKind::from_u8(18), Some(TypeKind::Nullable));

    for kind in TypeKind::ALL {
        assert_eq!(TypeKind::from_u8(kind as u8), Some(kind));
    }
}

#[test]
fn from_u8_invalid() {
    assert_eq!(TypeKind::from_u8(19), None);
    assert_eq!(TypeKind::from_u8(255), None);
}

#[test]
fn scalar_sizes() {
    assert_eq!(TypeKind::Void.size_of(), 0);
    assert_eq!(TypeKind::I8.size_of(), 1);
    assert_eq!(TypeKind::Bool.size_of(), 1);
    assert_eq!(TypeKind::I16.size_of(), 2);
    assert_eq!(TypeKind::I32.size_of(), 4);
    assert_eq!(TypeKind::F32.size_of(), 4);
    assert_eq!(TypeKind::F64.size_of(), 8);
}

#[test]
fn reference_kinds_are_one_word() {
    let word = std::mem::size_of::<usize>();
    let refs = [
        TypeKind::Bytes,
        TypeKind::Dynamic,
        TypeKind::Function,
        TypeKind::Object,
        TypeKind::Array,
        TypeKind::TypeRef,
        TypeKind::Ref,
        TypeKind::Virtual,
        TypeKind::DynObj,
        TypeKind::Abstract,
        TypeKind::Enum,
        TypeKind::Nullable,
    ];

    for kind in refs {
        assert_eq!(kind.size_of(), word, "{kind:?}");
        assert_eq!(kind.size_for_word(4), 4, "{kind:?}");
    }
    assert_eq!(TypeKind::Void.size_for_word(4), 0);
    assert_eq!(TypeKind::F64.size_for_word(4), 8);
}

#[test]
fn every_nonzero_size_is_power_of_two() {
    for kind in TypeKind::ALL {
        let size = kind.size_of();
        assert!(size == 0 || size.is_power_of_two(), "{kind:?}");
    }
}

#[test]
fn dynamic_kinds() {
    let dynamic: Vec<_> = TypeKind::ALL
        .into_iter()
        .filter(|k| k.is_dynamic())
        .collect();

    assert_eq!(
        dynamic,
        [
            TypeKind::Dynamic,
            TypeKind::Function,
            TypeKind::Object,
            TypeKind::Array,
            TypeKind::Virtual,
            TypeKind::DynObj,
            TypeKind::Nullable,
        ]
    );
}

#[test]
fn keywords() {
    assert_eq!(TypeKind::Void.keyword(), Some("void"));
    assert_eq!(TypeKind::Dynamic.keyword(), Some("dynamic"));
    assert_eq!(TypeKind::TypeRef.keyword(), Some("type"));
    assert_eq!(TypeKind::DynObj.keyword(), Some("dynobj"));
    assert_eq!(TypeKind::Function.keyword(), None);
    assert_eq!(TypeKind::Enum.keyword(), None);
}

#[test]
fn payload_free_matches_keyword_table() {
    assert!(TypeKind::Array.is_payload_free());
    assert!(TypeKind::Bytes.is_payload_free());
    assert!(!TypeKind::Ref.is_payload_free());
    assert!(!TypeKind::Abstract.is_payload_free());
}

#[test]
fn wrapper_kinds() {
    assert!(TypeKind::Ref.is_wrapper());
    assert!(TypeKind::Nullable.is_wrapper());
    assert!(!TypeKind::Array.is_wrapper());
    assert!(!TypeKind::Function.is_wrapper());
}
