use crate::{ClassDesc, EnumConstruct, EnumDesc, GlobalId, TypeDesc, TypeId, TypeKind, TypeTable};

/// A table covering every kind, with a three-level class chain
/// (`Base <- Mid <- Leaf`), three records and a few function types.
pub struct Fixture {
    pub table: TypeTable,

    pub void: TypeId,
    pub byte: TypeId,
    pub short: TypeId,
    pub int: TypeId,
    pub single: TypeId,
    pub float: TypeId,
    pub boolean: TypeId,
    pub bytes: TypeId,
    pub dynamic: TypeId,
    pub array: TypeId,
    pub type_ref: TypeId,
    pub dynobj: TypeId,

    pub base: TypeId,
    pub mid: TypeId,
    pub leaf: TypeId,
    /// Class outside the chain, with no fields.
    pub other: TypeId,
    pub base_slot: GlobalId,

    /// `virtual<a:i32,b:bool,c:bytes>`
    pub v1: TypeId,
    /// `virtual<a:i32,b:bool>`
    pub v2: TypeId,
    /// `virtual<a:i32,x:bool>`
    pub v3: TypeId,
    /// Same fields as `v2`, distinct descriptor.
    pub v2_copy: TypeId,

    /// `(#Mid (#Base))`
    pub fn1: TypeId,
    /// `(#Leaf (#Base))`
    pub fn2: TypeId,
    /// `(#Leaf (#Mid))`
    pub fn3: TypeId,
    /// `(void (dynamic))`
    pub fn_dyn_arg: TypeId,
    /// `(void (#Base))`
    pub fn_obj_arg: TypeId,
    /// `(void (i32))`
    pub fn_int_arg: TypeId,

    /// `enum<Color>` with constructs `Red`, `Rgb(i32, i32, i32)`.
    pub color: TypeId,
    pub color_slot: GlobalId,
    pub anon_enum: TypeId,

    pub fd: TypeId,
    /// Second `Abstract` descriptor with the same interned name as `fd`.
    pub fd_again: TypeId,
    pub socket: TypeId,

    pub ref_int: TypeId,
    pub null_int: TypeId,
    /// Structurally identical to `null_int`, distinct handle.
    pub null_int_copy: TypeId,
    pub null_base: TypeId,
}

impl Fixture {
    pub fn new() -> Self {
        let mut b = TypeTable::builder();

        let void = b.builtin(TypeKind::Void);
        let byte = b.builtin(TypeKind::I8);
        let short = b.builtin(TypeKind::I16);
        let int = b.builtin(TypeKind::I32);
        let single = b.builtin(TypeKind::F32);
        let float = b.builtin(TypeKind::F64);
        let boolean = b.builtin(TypeKind::Bool);
        let bytes = b.builtin(TypeKind::Bytes);
        let dynamic = b.builtin(TypeKind::Dynamic);
        let array = b.builtin(TypeKind::Array);
        let type_ref = b.builtin(TypeKind::TypeRef);
        let dynobj = b.builtin(TypeKind::DynObj);

        // `Leaf` is declared before its parent.
        let mid = b.reserve();
        let base_slot = b.global();
        let x = b.field("x", int).unwrap();
        let base_name = b.intern("Base");
        let base = b.class(
            ClassDesc::new(base_name)
                .with_fields([x])
                .with_global(base_slot),
        );
        let z = b.field("z", bytes).unwrap();
        let leaf_name = b.intern("Leaf");
        let leaf = b.class(ClassDesc::new(leaf_name).with_super(mid).with_fields([z]));
        let y = b.field("y", boolean).unwrap();
        let mid_name = b.intern("Mid");
        let mid_class = b.add_class(ClassDesc::new(mid_name).with_super(base).with_fields([y]));
        b.define(mid, TypeDesc::Object(mid_class)).unwrap();
        let other_name = b.intern("Other");
        let other = b.class(ClassDesc::new(other_name));

        let a = b.field("a", int).unwrap();
        let vb = b.field("b", boolean).unwrap();
        let c = b.field("c", bytes).unwrap();
        let vx = b.field("x", boolean).unwrap();
        let v1 = b.virtual_type([a, vb, c]);
        let v2 = b.virtual_type([a, vb]);
        let v3 = b.virtual_type([a, vx]);
        let v2_copy = b.virtual_type([a, vb]);

        let fn1 = b.function([base], mid);
        let fn2 = b.function([base], leaf);
        let fn3 = b.function([mid], leaf);
        let fn_dyn_arg = b.function([dynamic], void);
        let fn_obj_arg = b.function([base], void);
        let fn_int_arg = b.function([int], void);

        let color_slot = b.global();
        let color_name = b.intern("Color");
        let red = b.intern("Red");
        let rgb = b.intern("Rgb");
        let color = b.enum_type(EnumDesc {
            name: Some(color_name),
            constructs: vec![
                EnumConstruct {
                    name: red,
                    args: vec![],
                },
                EnumConstruct {
                    name: rgb,
                    args: vec![int, int, int],
                },
            ],
            global: Some(color_slot),
        });
        let anon_enum = b.enum_type(EnumDesc {
            name: None,
            constructs: vec![],
            global: None,
        });

        let fd = b.abstract_type("hl_fdesc");
        let fd_again = b.abstract_type("hl_fdesc");
        let socket = b.abstract_type("hl_socket");

        let ref_int = b.reference(int);
        let null_int = b.nullable(int);
        let null_int_copy = b.nullable(int);
        let null_base = b.nullable(base);

        Self {
            table: b.build().unwrap(),
            void,
            byte,
            short,
            int,
            single,
            float,
            boolean,
            bytes,
            dynamic,
            array,
            type_ref,
            dynobj,
            base,
            mid,
            leaf,
            other,
            base_slot,
            v1,
            v2,
            v3,
            v2_copy,
            fn1,
            fn2,
            fn3,
            fn_dyn_arg,
            fn_obj_arg,
            fn_int_arg,
            color,
            color_slot,
            anon_enum,
            fd,
            fd_again,
            socket,
            ref_int,
            null_int,
            null_int_copy,
            null_base,
        }
    }

    /// One representative handle per kind, in kind order.
    pub fn one_per_kind(&self) -> [TypeId; 19] {
        [
            self.void,
            self.byte,
            self.short,
            self.int,
            self.single,
            self.float,
            self.boolean,
            self.bytes,
            self.dynamic,
            self.fn1,
            self.base,
            self.array,
            self.type_ref,
            self.ref_int,
            self.v1,
            self.dynobj,
            self.fd,
            self.color,
            self.null_int,
        ]
    }
}
