#![cfg(feature = "dev")]
//! Tests for the weighted 1-D partitioner.
//!
//! ## Test Organization
//!
//! 1. **Known Partitions** - Hand-checked inputs with obvious groupings
//! 2. **Clamping** - K larger than the number of distinct means
//! 3. **Conditioning** - Means sharing a large common offset
//! 4. **Validation** - Error cases
//! 5. **Properties** - Optimality against brute force, contiguity, determinism

use approx::assert_relative_eq;
use proptest::prelude::*;

use catclust_rs::internals::algorithms::partition::{
    OptimalPartitioner, PartitionStrategy, WeightedPartition,
};
use catclust_rs::internals::primitives::errors::CatClustError;

fn both_strategies() -> [OptimalPartitioner; 2] {
    [
        OptimalPartitioner::new(PartitionStrategy::Exhaustive),
        OptimalPartitioner::new(PartitionStrategy::DivideAndConquer),
    ]
}

/// Exact optimum by enumerating every set of cut points on the sorted data.
fn brute_force_objective(means: &[f64], weights: &[f64], k: usize) -> f64 {
    let mut order: Vec<usize> = (0..means.len()).collect();
    order.sort_by(|&a, &b| means[a].partial_cmp(&means[b]).unwrap());
    let m: Vec<f64> = order.iter().map(|&i| means[i]).collect();
    let w: Vec<f64> = order.iter().map(|&i| weights[i]).collect();
    let n = m.len();

    let segment_cost = |s: usize, e: usize| {
        let total: f64 = w[s..e].iter().sum();
        if total <= 0.0 {
            return 0.0;
        }
        let mean = (s..e).map(|i| w[i] * m[i]).sum::<f64>() / total;
        (s..e).map(|i| w[i] * (m[i] - mean).powi(2)).sum::<f64>()
    };

    let mut best = f64::INFINITY;
    for mask in 0u32..(1 << (n - 1)) {
        if mask.count_ones() as usize > k - 1 {
            continue;
        }
        let mut cost = 0.0;
        let mut start = 0;
        for cut in 1..n {
            if mask & (1 << (cut - 1)) != 0 {
                cost += segment_cost(start, cut);
                start = cut;
            }
        }
        cost += segment_cost(start, n);
        best = best.min(cost);
    }
    best
}

/// Assignments read in sorted-mean order (input order on ties) never decrease.
fn is_contiguous(means: &[f64], partition: &WeightedPartition<f64>) -> bool {
    let mut order: Vec<usize> = (0..means.len()).collect();
    order.sort_by(|&a, &b| means[a].partial_cmp(&means[b]).unwrap());
    order
        .windows(2)
        .all(|p| partition.assignments[p[0]] <= partition.assignments[p[1]])
}

// ============================================================================
// Known Partitions
// ============================================================================

#[test]
fn test_three_obvious_groups() {
    let means = [0.0, 0.1, 10.0, 10.2, 20.0];
    let weights = [0.2; 5];

    for partitioner in both_strategies() {
        let result = partitioner.partition(&means, &weights, 3).unwrap();
        assert_eq!(result.assignments, vec![1, 1, 2, 2, 3]);
        assert_eq!(result.clusters_used(), 3);
        assert_eq!(result.clusters_effective, 3);
        assert_relative_eq!(result.cluster_means[0], 0.05, epsilon = 1e-12);
        assert_relative_eq!(result.cluster_means[1], 10.1, epsilon = 1e-12);
        assert_relative_eq!(result.cluster_means[2], 20.0, epsilon = 1e-12);
        assert_relative_eq!(result.cluster_weights[0], 0.4, epsilon = 1e-12);
    }
}

/// Assignments are reported in input order, not sorted order.
#[test]
fn test_assignments_follow_input_order() {
    let means = [10.2, 0.0, 20.0, 0.1, 10.0];
    let weights = [1.0; 5];

    let result = OptimalPartitioner::default()
        .partition(&means, &weights, 3)
        .unwrap();
    assert_eq!(result.assignments, vec![2, 1, 3, 1, 2]);
}

/// Weights pull the cluster mean toward heavy points and change the objective.
#[test]
fn test_weighted_cluster_mean() {
    let means = [0.0, 1.0, 100.0];
    let weights = [3.0, 1.0, 1.0];

    let result = OptimalPartitioner::default()
        .partition(&means, &weights, 2)
        .unwrap();
    assert_eq!(result.assignments, vec![1, 1, 2]);
    assert_relative_eq!(result.cluster_means[0], 0.25, epsilon = 1e-12);
    // 3 * 0.25^2 + 1 * 0.75^2
    assert_relative_eq!(result.objective, 0.75, epsilon = 1e-12);
}

/// Cluster ids increase with cluster mean.
#[test]
fn test_cluster_means_increase_with_id() {
    let means = [5.0, -3.0, 2.0, 8.0, -1.0, 6.5];
    let weights = [1.0, 2.0, 1.0, 0.5, 1.0, 1.5];

    for partitioner in both_strategies() {
        let result = partitioner.partition(&means, &weights, 3).unwrap();
        assert!(result.cluster_means.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_single_cluster_is_weighted_variance() {
    let means = [1.0, 2.0, 3.0];
    let weights = [1.0, 1.0, 1.0];

    let result = OptimalPartitioner::default()
        .partition(&means, &weights, 1)
        .unwrap();
    assert_eq!(result.assignments, vec![1, 1, 1]);
    assert_relative_eq!(result.objective, 2.0, epsilon = 1e-12);
}

/// Zero-weight points cost nothing but still receive a cluster.
#[test]
fn test_zero_weight_points() {
    let means: [f64; 3] = [0.0, 5.0, 10.0];
    let weights = [1.0, 0.0, 1.0];

    let result = OptimalPartitioner::default()
        .partition(&means, &weights, 2)
        .unwrap();
    assert_relative_eq!(result.objective, 0.0, epsilon = 1e-12);
    assert!(result.assignments.iter().all(|&c| c == 1 || c == 2));
    assert!(result.cluster_means.iter().all(|m| m.is_finite()));
}

// ============================================================================
// Clamping
// ============================================================================

#[test]
fn test_all_equal_means_use_one_cluster() {
    let means = [4.0; 6];
    let weights = [1.0; 6];

    for partitioner in both_strategies() {
        let result = partitioner.partition(&means, &weights, 3).unwrap();
        assert_eq!(result.clusters_effective, 1);
        assert_eq!(result.clusters_used(), 1);
        assert_eq!(result.assignments, vec![1; 6]);
        assert_relative_eq!(result.objective, 0.0);
        assert_relative_eq!(result.cluster_means[0], 4.0);
    }
}

#[test]
fn test_k_clamped_to_distinct_means() {
    let means = [1.0, 1.0, 5.0];
    let weights = [1.0, 1.0, 1.0];

    let result = OptimalPartitioner::default()
        .partition(&means, &weights, 3)
        .unwrap();
    assert_eq!(result.clusters_effective, 2);
    assert_eq!(result.assignments, vec![1, 1, 2]);
    assert_relative_eq!(result.objective, 0.0);
}

#[test]
fn test_k_equal_to_n_is_exact() {
    let means = [3.0, 1.0, 2.0, 4.0];
    let weights = [1.0; 4];

    let result = OptimalPartitioner::default()
        .partition(&means, &weights, 4)
        .unwrap();
    assert_eq!(result.assignments, vec![3, 1, 2, 4]);
    assert_relative_eq!(result.objective, 0.0);
}

#[test]
fn test_single_point() {
    let result = OptimalPartitioner::default()
        .partition(&[7.0], &[1.0], 2)
        .unwrap();
    assert_eq!(result.assignments, vec![1]);
    assert_eq!(result.clusters_effective, 1);
    assert_relative_eq!(result.cluster_means[0], 7.0);
}

// ============================================================================
// Conditioning
// ============================================================================

/// A large common offset leaves the partition and objective unchanged.
#[test]
fn test_large_offset_keeps_partition() {
    let base = [0.0, 1e-3, 1.0, 1.001, 1.002];
    let weights = [0.2; 5];

    for offset in [0.0, 1e6, 1e8] {
        let means: Vec<f64> = base.iter().map(|v| offset + v).collect();

        for partitioner in both_strategies() {
            let result = partitioner.partition(&means, &weights, 2).unwrap();
            assert_eq!(result.assignments, vec![1, 1, 2, 2, 2], "offset {offset}");
            assert_eq!(result.clusters_used(), 2);

            // 0.2 * (2 * 0.0005^2 + 2 * 0.001^2)
            assert_relative_eq!(result.objective, 0.2 * 2.5e-6, max_relative = 1e-4);
            assert_relative_eq!(result.cluster_means[0], offset + 5e-4, epsilon = 1e-6);
            assert_relative_eq!(result.cluster_means[1], offset + 1.001, epsilon = 1e-6);
        }
    }
}

/// Input order does not matter under an offset either.
#[test]
fn test_large_offset_unsorted_input() {
    let offset = 1e8;
    let means = [offset + 1.002, offset, offset + 1.0, offset + 1e-3, offset + 1.001];
    let weights = [1.0; 5];

    let result = OptimalPartitioner::default()
        .partition(&means, &weights, 2)
        .unwrap();
    assert_eq!(result.assignments, vec![2, 1, 2, 1, 2]);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_partition_errors() {
    let partitioner = OptimalPartitioner::default();

    assert_eq!(
        partitioner.partition::<f64>(&[], &[], 2).unwrap_err(),
        CatClustError::EmptyInput
    );
    assert!(matches!(
        partitioner.partition(&[1.0, 2.0], &[1.0], 2),
        Err(CatClustError::MismatchedInputs { .. })
    ));
    assert_eq!(
        partitioner.partition(&[1.0], &[1.0], 0).unwrap_err(),
        CatClustError::InvalidClusters { got: 0, min: 1 }
    );
    assert!(matches!(
        partitioner.partition(&[1.0, f64::NAN], &[1.0, 1.0], 2),
        Err(CatClustError::InvalidNumericValue(_))
    ));
    assert!(matches!(
        partitioner.partition(&[1.0, 2.0], &[1.0, f64::INFINITY], 2),
        Err(CatClustError::InvalidNumericValue(_))
    ));
    assert_eq!(
        partitioner
            .partition(&[1.0, 2.0, 3.0], &[1.0, -0.5, 1.0], 2)
            .unwrap_err(),
        CatClustError::InvalidWeight { index: 1 }
    );
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    #[test]
    fn dp_matches_brute_force(
        points in prop::collection::vec((-10.0f64..10.0, 0.01f64..1.0), 1..8),
        k in 1usize..4,
    ) {
        let means: Vec<f64> = points.iter().map(|p| p.0).collect();
        let weights: Vec<f64> = points.iter().map(|p| p.1).collect();
        let expected = brute_force_objective(&means, &weights, k);

        for partitioner in both_strategies() {
            let result = partitioner.partition(&means, &weights, k).unwrap();
            prop_assert!((result.objective - expected).abs() <= 1e-9 * (1.0 + expected));
            prop_assert!(is_contiguous(&means, &result));
            prop_assert!(result.clusters_used() <= k);
        }
    }

    #[test]
    fn strategies_agree_on_objective(
        points in prop::collection::vec((-100.0f64..100.0, 0.01f64..1.0), 1..40),
        k in 1usize..6,
    ) {
        let means: Vec<f64> = points.iter().map(|p| p.0).collect();
        let weights: Vec<f64> = points.iter().map(|p| p.1).collect();

        let exhaustive = OptimalPartitioner::new(PartitionStrategy::Exhaustive)
            .partition(&means, &weights, k)
            .unwrap();
        let divide = OptimalPartitioner::new(PartitionStrategy::DivideAndConquer)
            .partition(&means, &weights, k)
            .unwrap();

        let scale = 1.0 + exhaustive.objective.abs();
        prop_assert!((exhaustive.objective - divide.objective).abs() <= 1e-9 * scale);
    }

    #[test]
    fn partition_is_deterministic_and_well_formed(
        points in prop::collection::vec((-5.0f64..5.0, 0.01f64..1.0), 1..30),
        k in 1usize..5,
    ) {
        let means: Vec<f64> = points.iter().map(|p| p.0).collect();
        let weights: Vec<f64> = points.iter().map(|p| p.1).collect();
        let partitioner = OptimalPartitioner::default();

        let first = partitioner.partition(&means, &weights, k).unwrap();
        let second = partitioner.partition(&means, &weights, k).unwrap();
        prop_assert_eq!(&first, &second);

        // Every id in 1..=clusters_used appears.
        let used = first.clusters_used();
        for id in 1..=used {
            prop_assert!(first.assignments.contains(&id));
        }
        prop_assert!(first.objective >= 0.0);
        let total: f64 = first.cluster_weights.iter().sum();
        let expected: f64 = weights.iter().sum();
        prop_assert!((total - expected).abs() <= 1e-9);
    }
}
