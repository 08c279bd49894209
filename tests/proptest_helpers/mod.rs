#![allow(dead_code)]

use scrycsv::search::CardRecord;
use serde_json::Value;
use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

/// Field names drawn from the real card schema.
pub const FIELD_POOL: &[&str] = &[
    "name",
    "rarity",
    "set",
    "set_name",
    "booster",
    "arena_id",
    "foil",
    "image_uris",
    "mana_cost",
    "oracle_text",
];

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

fn arb_value() -> BoxedStrategy<Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<u32>().prop_map(Value::from),
        "[a-zA-Z ;,\"']{0,12}".prop_map(Value::String),
    ]
    .boxed()
}

/// A record holding a random subset of [`FIELD_POOL`].
pub fn arb_record() -> BoxedStrategy<CardRecord> {
    prop::collection::vec((0..FIELD_POOL.len(), arb_value()), 0..FIELD_POOL.len())
        .prop_map(|entries| {
            let mut record = CardRecord::new();
            for (idx, value) in entries {
                record.insert(FIELD_POOL[idx].to_string(), value);
            }
            record
        })
        .boxed()
}

pub fn arb_records(max: usize) -> BoxedStrategy<Vec<CardRecord>> {
    prop::collection::vec(arb_record(), 0..=max).boxed()
}

/// A duplicate-free field list drawn from [`FIELD_POOL`].
pub fn arb_field_list() -> BoxedStrategy<Vec<String>> {
    prop::sample::subsequence(FIELD_POOL.to_vec(), 0..=FIELD_POOL.len())
        .prop_shuffle()
        .prop_map(|fields| fields.into_iter().map(str::to_string).collect())
        .boxed()
}
