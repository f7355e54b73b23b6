//! Cycle guard behavior on self-referential and mutually recursive type
//! graphs: population terminates, the re-entered type yields the policy
//! terminal value, and the guard only blocks the active path.

use populate_core::{
    CyclePolicy, MemberDescriptor, PopulateConfig, Populator, TypeDescriptor, TypeRef,
    TypeRegistry, Value,
};
use std::sync::Arc;

fn node_registry() -> Arc<TypeRegistry> {
    let mut registry = TypeRegistry::new();
    registry.register(
        TypeDescriptor::structure("Node")
            .with_member(MemberDescriptor::new("value", TypeRef::Int))
            .with_member(MemberDescriptor::new("next", TypeRef::named("Node"))),
    );
    Arc::new(registry)
}

#[test]
fn self_referential_type_terminates() {
    let populator = Populator::new(node_registry());

    let node = populator.populate("Node").unwrap();

    assert!(!node.is_null());
    assert!(node.field("value").unwrap().as_i64().is_some());
    // re-entry stops with the policy terminal value
    assert!(node.field("next").unwrap().is_null());
}

#[test]
fn mutually_recursive_types_terminate() {
    let mut registry = TypeRegistry::new();
    registry.register(
        TypeDescriptor::structure("Order")
            .with_member(MemberDescriptor::new("id", TypeRef::Int))
            .with_member(MemberDescriptor::new("customer", TypeRef::named("Customer"))),
    );
    registry.register(
        TypeDescriptor::structure("Customer")
            .with_member(MemberDescriptor::new("name", TypeRef::String))
            .with_member(MemberDescriptor::new("last_order", TypeRef::named("Order"))),
    );

    let populator = Populator::new(Arc::new(registry));
    let order = populator.populate("Order").unwrap();

    assert!(!order.is_null());
    let customer = order.field("customer").unwrap();
    assert!(customer.field("name").unwrap().as_str().is_some());
    // the cycle closes back at Order and stops there
    assert!(customer.field("last_order").unwrap().is_null());
}

#[test]
fn recursive_collections_terminate() {
    let mut registry = TypeRegistry::new();
    registry.register(
        TypeDescriptor::structure("Tree")
            .with_member(MemberDescriptor::new("label", TypeRef::String))
            .with_member(MemberDescriptor::new(
                "children",
                TypeRef::list_of(TypeRef::named("Tree")),
            )),
    );

    let config = PopulateConfig::new().collection_size_range(1, 3).unwrap();
    let populator = Populator::with_config(Arc::new(registry), config);

    let tree = populator.populate("Tree").unwrap();

    assert!(tree.field("label").unwrap().as_str().is_some());
    for child in tree.field("children").unwrap().as_slice().unwrap() {
        assert!(child.is_null());
    }
}

#[test]
fn guard_is_scoped_to_the_active_path() {
    let mut registry = TypeRegistry::new();
    registry.register(
        TypeDescriptor::structure("Wheel")
            .with_member(MemberDescriptor::new("diameter", TypeRef::Float)),
    );
    registry.register(
        TypeDescriptor::structure("Bike")
            .with_member(MemberDescriptor::new("front", TypeRef::named("Wheel")))
            .with_member(MemberDescriptor::new("rear", TypeRef::named("Wheel"))),
    );

    let populator = Populator::new(Arc::new(registry));
    let bike = populator.populate("Bike").unwrap();

    // sibling members of the same type are both populated; the guard only
    // blocks re-entry on the path currently under construction
    assert!(bike.at("front.diameter").unwrap().as_f64().is_some());
    assert!(bike.at("rear.diameter").unwrap().as_f64().is_some());
}

#[test]
fn default_cycle_policy_yields_a_default_instance() {
    let config = PopulateConfig::new().cycle_policy(CyclePolicy::Default);
    let populator = Populator::with_config(node_registry(), config);

    let node = populator.populate("Node").unwrap();

    let next = node.field("next").unwrap();
    assert_eq!(next.object_type(), Some("Node"));
    assert_eq!(next.field("value").unwrap(), &Value::Null);
    assert_eq!(next.field("next").unwrap(), &Value::Null);
}

#[test]
fn guard_resets_between_root_calls() {
    let populator = Populator::new(node_registry());

    let first = populator.populate("Node").unwrap();
    let second = populator.populate("Node").unwrap();

    // independent root calls see a fresh guard and produce equal output
    assert_eq!(first, second);
}
