use std::collections::{BTreeMap, HashMap};

use indexmap::{indexmap, IndexMap};
use maplit::{btreemap, hashmap};
use str_macro::str;

use mapkit::{
    BuildError, BuildOptions, Builder, DuplicateKey, Leniency, MapExt, Record, Value,
    build_from_mapping,
};

#[derive(Debug, Default, Clone, PartialEq)]
struct Person {
    name: String,
    age: i64,
}

mapkit::buildable! {
    Person {
        "Name" => name,
        "Age" => age,
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn flatten_values_concatenates_groups_in_order() {
    let grouped: IndexMap<&str, Vec<u32>> = indexmap![
        "first" => vec![3, 1],
        "empty" => vec![],
        "second" => vec![2],
    ];

    let produced = grouped.flatten_values();

    assert_eq!(vec![3, 1, 2], produced);
    assert_eq!(grouped.values().map(Vec::len).sum::<usize>(), produced.len());

    let empty: BTreeMap<&str, Vec<u32>> = BTreeMap::new();
    assert_eq!(Vec::<u32>::new(), empty.flatten_values());
}

#[test]
fn merge_from_unions_disjoint_mappings() {
    let mut a = hashmap![str!("x") => 1, str!("y") => 2];
    let b = hashmap![str!("z") => 3];
    let (len_a, len_b) = (a.len(), b.len());

    a.merge_from(&b);

    assert_eq!(len_a + len_b, a.len());
    assert_eq!(hashmap![str!("x") => 1, str!("y") => 2, str!("z") => 3], a);
}

#[test]
fn merge_from_takes_source_value_on_shared_key() {
    let mut a = btreemap!["k" => "old", "j" => "kept"];
    let b = btreemap!["k" => "new"];

    a.merge_from(&b);

    assert_eq!(Some(&"new"), a.get("k"));
    assert_eq!(Some(&"kept"), a.get("j"));
    assert_eq!(btreemap!["k" => "new"], b);
}

#[test]
fn try_merge_from_rejects_duplicates() {
    init_tracing();

    let mut a = indexmap![1 => 'a'];
    let b = indexmap![2 => 'b', 1 => 'c'];

    assert_eq!(Err(DuplicateKey(1)), a.try_merge_from(&b));
    assert_eq!(indexmap![1 => 'a'], a);
}

#[test]
fn extend_by_key_is_last_write_wins() {
    let x1 = Person { name: str!("Sam"), age: 1 };
    let x2 = Person { name: str!("Sam"), age: 2 };

    let mut target: HashMap<String, Person> = HashMap::new();
    target.extend_by_key(vec![x1, x2.clone()], |p| p.name.clone());

    assert_eq!(1, target.len());
    assert_eq!(Some(&x2), target.get("Sam"));
}

#[test]
fn find_key_by_value_returns_first_match() {
    let mapping = indexmap![str!("a") => 1, str!("b") => 2, str!("c") => 1];
    assert_eq!(Some(&str!("a")), mapping.find_key_by_value(&1));

    let empty: IndexMap<String, i32> = IndexMap::new();
    assert_eq!(None, empty.find_key_by_value(&1));
}

#[test]
fn build_from_mapping_assigns_matching_fields() {
    init_tracing();

    let source = Record::from_json_str(r#"{"Name": "Alice", "Age": 30, "Unknown": "x"}"#).unwrap();

    let produced: Person = build_from_mapping(&source);

    assert_eq!(Person { name: str!("Alice"), age: 30 }, produced);
}

#[test]
fn build_strict_reports_mismatch() {
    let mut source = Record::new();
    source.insert("Name", "Alice");
    source.insert("Age", Value::Mapping(Record::new()));

    let builder = Builder::new(BuildOptions::new().leniency(Leniency::Strict));

    match builder.build::<Person, _>(&source) {
        Err(BuildError::TypeMismatch { field, .. }) => assert_eq!("Age", field),
        other => panic!("unexpected result: {:?}", other),
    }
}
