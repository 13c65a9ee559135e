use minitrees::prelude::*;

use std::path::PathBuf;


fn golf() -> Table {
    let mut path = std::env::current_dir().unwrap();
    path.push("tests/dataset/golf.data");

    TableReader::default()
        .file(path)
        .labels(["Outlook", "Temperature", "Humidity", "Wind", "Play golf"])
        .read()
        .unwrap()
}


fn temp_file(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("minitrees-{}-{name}", std::process::id()));
    path
}


#[test]
fn json_file_round_trip() {
    let table = golf();
    for alpha in [0f64, 0.5, 1f64, 2f64, f64::INFINITY] {
        let f = DecisionTreeBuilder::new()
            .entropy(Measure::renyi(alpha).unwrap())
            .build()
            .produce(&table)
            .unwrap();

        let path = temp_file(&format!("output_{alpha}.json"));
        f.to_json_file(&path).unwrap();
        let g = DecisionTreeClassifier::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(f, g, "alpha = {alpha}");
    }
}


#[test]
fn json_without_gains() {
    let json = r#"
    {
        "label": "Outlook",
        "branches": [
            {
                "value": "Rainy",
                "children": {
                    "label": "Humidity",
                    "branches": [
                        { "value": "High",   "children": [{ "value": "No",  "count": 3 }] },
                        { "value": "Normal", "children": [{ "value": "Yes", "count": 2 }] }
                    ]
                }
            },
            { "value": "Overcast", "children": [{ "value": "Yes", "count": 4 }] },
            {
                "value": "Sunny",
                "children": {
                    "label": "Wind",
                    "branches": [
                        { "value": "False", "children": [{ "value": "Yes", "count": 3 }] },
                        { "value": "True",  "children": [{ "value": "No",  "count": 2 }] }
                    ]
                }
            }
        ]
    }"#;
    let f = DecisionTreeClassifier::from_json(json).unwrap();
    assert_eq!(f.total_count(), 14);
    assert_eq!(f.depth(), 2);

    // Same structure as the grown tree, up to the gains.
    let table = golf();
    let grown = DecisionTreeBuilder::new().build().produce(&table).unwrap();
    assert_eq!(f.predict_all(&table), grown.predict_all(&table));
    assert_eq!(f.to_dot(), grown.to_dot());
}


#[test]
fn degenerate_tree_is_a_json_array() {
    let table = Table::from_rows([["a", "Yes"], ["b", "Yes"]]).unwrap();
    let f = DecisionTreeBuilder::new().build().produce(&table).unwrap();

    let json = f.to_json().unwrap();
    assert_eq!(json, r#"[{"value":"Yes","count":2}]"#);
    assert_eq!(DecisionTreeClassifier::from_json(&json).unwrap(), f);
}


#[test]
fn dot_has_one_edge_per_branch() {
    let table = golf();
    let f = DecisionTreeBuilder::new().build().produce(&table).unwrap();

    struct Counter {
        nodes: usize,
        branches: usize,
    }
    impl TreeVisitor for Counter {
        fn visit_decision(&mut self, node: &DecisionNode, _depth: usize) {
            self.nodes += 1;
            self.branches += node.branches().len();
        }
        fn visit_leaves(&mut self, _leaves: &LeafGroup, _depth: usize) {
            self.nodes += 1;
        }
    }
    let mut counter = Counter { nodes: 0, branches: 0 };
    f.walk(&mut counter);
    assert_eq!(counter.nodes, 8);
    assert_eq!(counter.branches, 7);

    let dot = f.to_dot();
    assert_eq!(dot.matches(" -- ").count(), counter.branches);
    assert_eq!(dot.matches("[ label = ").count(), counter.nodes + counter.branches);
    assert!(dot.contains("label = \"No (3)\", shape = box"));

    let path = temp_file("diagram.dot");
    f.to_dot_file(&path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(written, dot);
}
