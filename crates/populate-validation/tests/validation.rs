//! End-to-end behavior of the validation-tag registry plugged into the
//! population engine.

use chrono::Utc;
use populate_core::{
    FieldPredicate, MemberDescriptor, PopulateConfig, Populator, RandomizerContext,
    TypeDescriptor, TypeRef, TypeRegistry, Value,
};
use populate_validation::{tags, ValidationRandomizerRegistry};
use std::sync::Arc;

fn subscription_registry() -> Arc<TypeRegistry> {
    let mut registry = TypeRegistry::new();
    registry.register(
        TypeDescriptor::structure("Subscription")
            .with_member(MemberDescriptor::new("name", TypeRef::String))
            .with_member(MemberDescriptor::new("expires", TypeRef::Date).with_tag(tags::FUTURE))
            .with_member(
                MemberDescriptor::new("created", TypeRef::Date).with_tag(tags::PAST_OR_PRESENT),
            )
            .with_member(MemberDescriptor::new("renewed", TypeRef::Date)),
    );
    Arc::new(registry)
}

fn populator_with_validation(config: PopulateConfig) -> Populator {
    let registry = ValidationRandomizerRegistry::new(&config);
    Populator::with_config(subscription_registry(), config).with_randomizer_registry(Arc::new(registry))
}

#[test]
fn future_tagged_dates_are_strictly_after_today() {
    let today = Utc::now().date_naive();

    for seed in 0..10u64 {
        let populator = populator_with_validation(PopulateConfig::new().seed(seed));
        let subscription = populator.populate("Subscription").unwrap();

        let expires = subscription.field("expires").unwrap().as_date().unwrap();
        assert!(expires > today, "expected a future date, got {expires}");
    }
}

#[test]
fn past_or_present_tagged_dates_are_not_after_today() {
    let today = Utc::now().date_naive();

    for seed in 0..10u64 {
        let populator = populator_with_validation(PopulateConfig::new().seed(seed));
        let subscription = populator.populate("Subscription").unwrap();

        let created = subscription.field("created").unwrap().as_date().unwrap();
        assert!(created <= today, "expected past or present, got {created}");
    }
}

#[test]
fn untagged_dates_use_the_ambient_range() {
    let populator = populator_with_validation(PopulateConfig::new());

    let subscription = populator.populate("Subscription").unwrap();

    assert!(subscription.field("renewed").unwrap().as_date().is_some());
    assert!(subscription.field("name").unwrap().as_str().is_some());
}

#[test]
fn explicit_overrides_take_precedence_over_tag_handlers() {
    let pinned = chrono::NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let config = PopulateConfig::new().randomize(
        FieldPredicate::named("expires"),
        move |_: &mut RandomizerContext<'_>| -> Result<Value, populate_core::PopulateError> {
            Ok(Value::Date(pinned))
        },
    );
    let populator = populator_with_validation(config);

    let subscription = populator.populate("Subscription").unwrap();

    // the override wins even though the member carries a future tag
    assert_eq!(subscription.field("expires").unwrap().as_date(), Some(pinned));
}

#[test]
fn handler_output_is_deterministic_under_a_fixed_seed() {
    let first = populator_with_validation(PopulateConfig::new().seed(42))
        .populate("Subscription")
        .unwrap();
    let second = populator_with_validation(PopulateConfig::new().seed(42))
        .populate("Subscription")
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn handler_state_survives_repeated_calls() {
    let populator = populator_with_validation(PopulateConfig::new().seed(42));
    let today = Utc::now().date_naive();

    // the narrowed configuration is built once and reused
    for _ in 0..3 {
        let subscription = populator.populate("Subscription").unwrap();
        let expires = subscription.field("expires").unwrap().as_date().unwrap();
        assert!(expires > today);
    }
}
