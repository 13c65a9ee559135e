use minitrees::entropy::*;
use minitrees::common::group_by;
use minitrees::TreeError;

const TEST_TOLERANCE: f64 = 1e-9;


#[test]
fn identical_values_have_zero_entropy() {
    let values = vec!["Yes"; 14];
    assert!(shannon_entropy(&values).abs() < TEST_TOLERANCE);
    for alpha in [0f64, 0.5, 2f64, 99f64, f64::INFINITY] {
        let h = renyi_entropy(&values, alpha).unwrap();
        assert!(h.abs() < TEST_TOLERANCE, "alpha = {alpha}, got {h}");
    }
}


#[test]
fn equally_frequent_values_have_log2_n_entropy() {
    for n in 1..=16_usize {
        let values = (0..3 * n).map(|i| i % n).collect::<Vec<_>>();
        let expect = (n as f64).log2();

        let h = shannon_entropy(&values);
        assert!((h - expect).abs() < TEST_TOLERANCE, "n = {n}, got {h}");

        for alpha in [0f64, 0.5, 2f64, f64::INFINITY] {
            let h = renyi_entropy(&values, alpha).unwrap();
            assert!(
                (h - expect).abs() < TEST_TOLERANCE,
                "n = {n}, alpha = {alpha}, got {h}"
            );
        }
    }
}


#[test]
fn renyi_of_order_one_is_shannon() {
    let values = [
        "No", "No", "Yes", "Yes", "Yes", "No", "Yes",
        "No", "Yes", "Yes", "Yes", "Yes", "Yes", "No",
    ];
    let shannon = shannon_entropy(&values);
    let renyi = renyi_entropy(&values, 1f64).unwrap();
    assert!((shannon - renyi).abs() < TEST_TOLERANCE);
    assert!((shannon - 0.940_285_958).abs() < 1e-6, "got {shannon}");

    let measure = Measure::renyi(1f64).unwrap();
    assert!((measure.entropy(&values).unwrap() - shannon).abs() < TEST_TOLERANCE);
}


#[test]
fn negative_order_is_rejected() {
    let result = renyi_entropy(&["a", "b", "c"], -1f64);
    assert!(
        matches!(result, Err(TreeError::InvalidParameter(..))),
        "expected `InvalidParameter`, got {result:?}"
    );
    assert!(matches!(Measure::renyi(-1f64), Err(TreeError::InvalidParameter(..))));
}


#[test]
fn joint_entropy_of_pairs() {
    // Two independent fair coins.
    let pairs = [(0, 0), (0, 1), (1, 0), (1, 1)];
    assert!((shannon_entropy(&pairs) - 2f64).abs() < TEST_TOLERANCE);
}


#[test]
fn group_by_is_a_partition() {
    let values = ["b", "a", "c", "a", "b", "b", "d"];
    let groups = group_by(values.iter().copied(), |v| *v);

    let keys = groups.iter().map(|(k, _)| *k).collect::<Vec<_>>();
    assert_eq!(keys, vec!["b", "a", "c", "d"]);

    let n_items = groups.iter().map(|(_, vs)| vs.len()).sum::<usize>();
    assert_eq!(n_items, values.len());

    for (key, group) in groups {
        assert!(group.iter().all(|v| *v == key));
    }
}
