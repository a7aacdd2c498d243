//! Integration tests for the IR model's public API.

use bitres_ir::{
    BasicBlock, Constant, Function, Global, Instruction, Module, Opcode, Operand, Type,
};
use proptest::prelude::*;

#[test]
fn test_build_and_enumerate_in_order() {
    let mut module = Module::new("ordered");
    module.push_global(Global::new("a", Type::int(8), None));
    module.push_global(Global::new("b", Type::int(16), None));
    module.push_function(Function::new("first"));
    module.push_function(Function::new("second"));

    let names: Vec<&str> = module.globals.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, ["a", "b"]);
    let fns: Vec<&str> = module.functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(fns, ["first", "second"]);
}

#[test]
fn test_snapshot_roundtrip_preserves_constants() {
    let mut module = Module::new("snap");
    module.push_global(Global::new(
        "msg",
        Type::array(Type::int(8), 4),
        Some(Constant::DataSequence {
            elem_bits: 8,
            elems: vec![1, 2, 3, 4],
        }),
    ));
    let mut f = Function::new("main");
    let mut entry = BasicBlock::new("entry");
    entry.push(Instruction::new(
        Opcode::Call,
        vec![
            Operand::Const(Constant::FunctionRef {
                name: "main".into(),
            }),
            Operand::Local("x".into()),
        ],
    ));
    f.push_block(entry);
    module.push_function(f);

    let restored = Module::from_bytes(&module.to_bytes().unwrap()).unwrap();
    assert_eq!(module, restored);
    assert!(restored.validate().is_ok());
}

proptest! {
    #[test]
    fn prop_int_constructor_masks_to_width(bits in 1u32..=64, value: u64) {
        let c = Constant::int(bits, value);
        let (got_bits, got_value) = c.int_payload().unwrap();
        prop_assert_eq!(got_bits, bits);
        if bits < 64 {
            prop_assert_eq!(got_value >> bits, 0);
            prop_assert_eq!(got_value, value & ((1u64 << bits) - 1));
        } else {
            prop_assert_eq!(got_value, value);
        }
    }

    #[test]
    fn prop_int_roundtrips_through_bytes(bits in 1u32..=64, value: u64) {
        let mut module = Module::new("prop");
        module.push_global(Global::new(
            "g",
            Type::int(bits),
            Some(Constant::int(bits, value)),
        ));
        let restored = Module::from_bytes(&module.to_bytes().unwrap()).unwrap();
        prop_assert_eq!(module, restored);
    }
}
