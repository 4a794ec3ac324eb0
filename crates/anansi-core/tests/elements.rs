//! Element paths over nested documents

use anansi_core::document::{Document, DocumentKind};
use anansi_core::{element_path, elements, leaf_elements, lookup, split_element_path};
use serde_json::{json, Value};

fn complex() -> Value {
    json!({
        "string": "A String",
        "integer": 42,
        "list": ["zero", "one", "two", "three"],
        "array": ["four", "five", "six"],
        "boolean.array": [false, true, true, false, true],
        "map": {
            "foo[abc]bar": "Another String",
            "people": [
                {"name": "Alice", "age": 37},
                {"name": "Bob", "age": 55},
                {"name": "Carol", "age": 23},
                {"name": "Dave", "age": 27}
            ],
            "owner": {"name": "Elise", "age": 43}
        }
    })
}

fn complex_leaves() -> Vec<(&'static str, Value)> {
    vec![
        ("string", json!("A String")),
        ("integer", json!(42)),
        ("list[0]", json!("zero")),
        ("list[1]", json!("one")),
        ("list[2]", json!("two")),
        ("list[3]", json!("three")),
        ("array[0]", json!("four")),
        ("array[1]", json!("five")),
        ("array[2]", json!("six")),
        ("boolean\\.array[0]", json!(false)),
        ("boolean\\.array[1]", json!(true)),
        ("boolean\\.array[2]", json!(true)),
        ("boolean\\.array[3]", json!(false)),
        ("boolean\\.array[4]", json!(true)),
        ("map.foo\\[abc\\]bar", json!("Another String")),
        ("map.people[0].name", json!("Alice")),
        ("map.people[0].age", json!(37)),
        ("map.people[1].name", json!("Bob")),
        ("map.people[1].age", json!(55)),
        ("map.people[2].name", json!("Carol")),
        ("map.people[2].age", json!(23)),
        ("map.people[3].name", json!("Dave")),
        ("map.people[3].age", json!(27)),
        ("map.owner.name", json!("Elise")),
        ("map.owner.age", json!(43)),
    ]
}

#[test]
fn test_leaf_elements_complex() {
    let root = complex();
    let actual: Vec<(String, Value)> = leaf_elements(&root)
        .map(|path| (element_path(&path), (*path.to_vertex()).clone()))
        .collect();
    let expected: Vec<(String, Value)> = complex_leaves()
        .into_iter()
        .map(|(path, value)| (path.to_string(), value))
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_complex_paths_split_back_to_their_values() {
    let root = complex();
    for (path, value) in complex_leaves() {
        let segments = split_element_path(path).unwrap();
        assert_eq!(lookup(&root, &segments), Some(&value), "{}", path);
    }
}

#[test]
fn test_elements_complex_is_one_level() {
    let root = complex();
    let paths: Vec<String> = elements(&root).map(|path| element_path(&path)).collect();
    assert_eq!(
        paths,
        vec!["string", "integer", "list", "array", "boolean\\.array", "map"]
    );
    let map = elements(&root).last().unwrap();
    assert_eq!(*map.to_vertex(), &root["map"]);
}

#[test]
fn test_yaml_document_matches_json() {
    let yaml = "\
string: A String
integer: 42
list: [zero, one, two, three]
array: [four, five, six]
boolean.array: [false, true, true, false, true]
map:
  foo[abc]bar: Another String
  people:
    - {name: Alice, age: 37}
    - {name: Bob, age: 55}
    - {name: Carol, age: 23}
    - {name: Dave, age: 27}
  owner: {name: Elise, age: 43}
";
    let Document::Yaml(root) = Document::parse(yaml, DocumentKind::Yaml).unwrap() else {
        panic!("expected a YAML document");
    };
    let paths: Vec<String> = leaf_elements(&root).map(|path| element_path(&path)).collect();
    let expected: Vec<&str> = complex_leaves().into_iter().map(|(path, _)| path).collect();
    assert_eq!(paths, expected);
}
