/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rds::input::{DescribeEventsInput, ModifyCurrentDbClusterCapacityInput};
use rds::model::{Filter, SourceType, Tag, TimeoutAction};
use rds::DateTime;
use smithy_types::{HashCode, Shape};

#[test]
fn new_shapes_have_every_member_absent() {
    let input = ModifyCurrentDbClusterCapacityInput::default();
    assert!(input.is_empty());
    assert_eq!(input.db_cluster_identifier(), None);
    assert_eq!(input.capacity(), None);
    assert_eq!(input.seconds_before_timeout(), None);
    assert_eq!(input.timeout_action(), None);

    let events = DescribeEventsInput::default();
    assert!(events.is_empty());
    assert_eq!(events.start_time(), None);
    assert_eq!(events.filters(), None);
}

#[test]
fn set_then_clear_returns_to_absent() {
    let mut input = ModifyCurrentDbClusterCapacityInput::default();
    input.set_capacity(Some(0));
    assert_eq!(input.capacity(), Some(0));
    input.set_capacity(None);
    assert_eq!(input.capacity(), None);
    assert_eq!(input, ModifyCurrentDbClusterCapacityInput::default());

    let mut filter = Filter::default();
    filter.set_values(Some(vec![]));
    assert_eq!(filter.values(), Some(&[][..]));
    filter.set_values(None);
    assert_eq!(filter.values(), None);
}

#[test]
fn debug_string_omits_absent_members() {
    let input = ModifyCurrentDbClusterCapacityInput::default()
        .with_capacity(4)
        .with_timeout_action("ForceApplyCapacityChange");
    assert_eq!(
        input.to_string(),
        "{Capacity: 4,TimeoutAction: ForceApplyCapacityChange}"
    );
}

#[test]
fn debug_string_uses_declaration_order() {
    let input = DescribeEventsInput::default()
        .with_marker("abc")
        .with_filters(vec![Filter::default()
            .with_name("engine")
            .with_values(vec!["aurora".to_owned()])])
        .with_start_time(DateTime::from_secs(0))
        .with_source_type(SourceType::DbCluster);
    assert_eq!(
        input.to_string(),
        "{SourceType: db-cluster,StartTime: 1970-01-01T00:00:00Z,\
         Filters: [{Name: engine,Values: [aurora]}],Marker: abc}"
    );
}

#[test]
fn with_appends_and_set_replaces() {
    let appended = Filter::default()
        .with_values(vec!["x".to_owned()])
        .with_values(vec!["y".to_owned()]);
    assert_eq!(appended.values(), Some(&["x".to_owned(), "y".to_owned()][..]));

    let mut replaced = Filter::default();
    replaced.set_values(Some(vec!["x".to_owned()]));
    replaced.set_values(Some(vec!["y".to_owned()]));
    assert_eq!(replaced.values(), Some(&["y".to_owned()][..]));
}

#[test]
fn zero_element_append_initializes_list() {
    let filter = Filter::default().with_values(Vec::<String>::new());
    assert_eq!(filter.values(), Some(&[][..]));
    assert_eq!(filter.to_string(), "{Values: []}");
    assert_ne!(filter, Filter::default());

    let filter = Filter::default()
        .with_values(vec!["x".to_owned()])
        .with_values(Vec::<String>::new());
    assert_eq!(filter.values(), Some(&["x".to_owned()][..]));
}

#[test]
fn last_write_wins_for_scalars() {
    let input = ModifyCurrentDbClusterCapacityInput::default()
        .with_capacity(2)
        .with_capacity(8);
    assert_eq!(input.capacity(), Some(8));
}

#[test]
fn enum_normalization() {
    let typed = ModifyCurrentDbClusterCapacityInput::default()
        .with_timeout_action(TimeoutAction::ForceApplyCapacityChange);
    let raw = ModifyCurrentDbClusterCapacityInput::default()
        .with_timeout_action("ForceApplyCapacityChange");
    assert_eq!(typed, raw);
    assert_eq!(typed.to_string(), raw.to_string());

    let unknown = ModifyCurrentDbClusterCapacityInput::default()
        .with_timeout_action(TimeoutAction::from("WaitForever"));
    assert_eq!(unknown.timeout_action(), Some("WaitForever"));
}

#[test]
fn absent_differs_from_zero_values() {
    let zero = ModifyCurrentDbClusterCapacityInput::default().with_capacity(0);
    assert_ne!(zero, ModifyCurrentDbClusterCapacityInput::default());

    let empty = Tag::default().with_key("");
    assert_ne!(empty, Tag::default());
    // "".hash_code() is 0, the same contribution as an absent member
    assert_eq!(empty.hash_code(), Tag::default().hash_code());
}

#[test]
fn known_hash_codes() {
    assert_eq!(Tag::default().hash_code(), 31 * 31);
    let input = ModifyCurrentDbClusterCapacityInput::default().with_capacity(4);
    // seed 1, then DBClusterIdentifier, Capacity, SecondsBeforeTimeout, TimeoutAction
    assert_eq!(input.hash_code(), (31 * 31 + 4) * 31 * 31);
}

fn capacity_input() -> impl Strategy<Value = ModifyCurrentDbClusterCapacityInput> {
    (
        proptest::option::of("[a-z][a-z0-9-]{0,20}"),
        proptest::option::of(any::<i32>()),
        proptest::option::of(any::<i32>()),
        proptest::option::of(prop_oneof![
            Just(TimeoutAction::ForceApplyCapacityChange.to_string()),
            Just(TimeoutAction::RollbackCapacityChange.to_string()),
            ".*",
        ]),
    )
        .prop_map(|(id, capacity, timeout, action)| {
            let mut input = ModifyCurrentDbClusterCapacityInput::default();
            input
                .set_db_cluster_identifier(id)
                .set_capacity(capacity)
                .set_seconds_before_timeout(timeout)
                .set_timeout_action(action);
            input
        })
}

proptest! {
    #[test]
    fn equality_is_reflexive_and_symmetric(a in capacity_input(), b in capacity_input()) {
        prop_assert_eq!(&a, &a.clone());
        prop_assert_eq!(a == b, b == a);
    }

    #[test]
    fn equal_shapes_have_equal_hash_codes(a in capacity_input()) {
        let b = a.clone();
        prop_assert_eq!(a.hash_code(), b.hash_code());
        prop_assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn assignment_order_does_not_matter(id in "[a-z]{1,10}", capacity: i32, timeout: i32) {
        let forward = ModifyCurrentDbClusterCapacityInput::default()
            .with_db_cluster_identifier(id.clone())
            .with_capacity(capacity)
            .with_seconds_before_timeout(timeout);
        let backward = ModifyCurrentDbClusterCapacityInput::default()
            .with_seconds_before_timeout(timeout)
            .with_capacity(capacity)
            .with_db_cluster_identifier(id);
        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(forward.hash_code(), backward.hash_code());
    }

    #[test]
    fn chained_construction_matches_setters(capacity: i32, action in ".*") {
        let chained = ModifyCurrentDbClusterCapacityInput::default()
            .with_capacity(capacity)
            .with_timeout_action(action.clone());
        let mut separate = ModifyCurrentDbClusterCapacityInput::default();
        separate.set_capacity(Some(capacity));
        separate.set_timeout_action(Some(action));
        prop_assert_eq!(chained, separate);
    }

    #[test]
    fn appends_preserve_insertion_order(
        first in proptest::collection::vec("[a-z]{1,5}", 0..5),
        second in proptest::collection::vec("[a-z]{1,5}", 0..5),
    ) {
        let filter = Filter::default()
            .with_values(first.clone())
            .with_values(second.clone());
        let expected: Vec<String> = first.into_iter().chain(second).collect();
        prop_assert_eq!(filter.values(), Some(expected.as_slice()));
    }
}
