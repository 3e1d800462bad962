use doe_sampler::sampler::sobol::{MAX_DIMENSION, MAX_SAMPLE_COUNT};
use doe_sampler::sampler::{SamplingMode, SamplingStrategy, SobolSampler};
use doe_sampler::{Error, Range};
use indexmap::IndexMap;

fn ranges(bounds: &[(&str, f64, f64)]) -> IndexMap<String, Range> {
    bounds
        .iter()
        .map(|&(name, low, high)| (name.to_owned(), Range::new(low, high).unwrap()))
        .collect()
}

#[test]
fn matrix_shape_matches_count_and_dimension() {
    let ranges = ranges(&[("a", 0.0, 1.0), ("b", -1.0, 1.0), ("c", 10.0, 20.0)]);
    let matrix = SamplingStrategy::sobol()
        .compute(25, &ranges, SamplingMode::Float)
        .unwrap();
    assert_eq!((matrix.nrows(), matrix.ncols()), (25, 3));
}

#[test]
fn all_columns_respect_their_bounds() {
    let ranges = ranges(&[("a", -7.5, -2.5), ("b", 0.0, 1e6)]);
    let matrix = SamplingStrategy::sobol()
        .compute(200, &ranges, SamplingMode::Float)
        .unwrap();

    for row in 0..matrix.nrows() {
        assert!((-7.5..=-2.5).contains(&matrix[(row, 0)]));
        assert!((0.0..=1e6).contains(&matrix[(row, 1)]));
    }
}

#[test]
fn raw_sequence_is_independent_of_bounds() {
    // The underlying unit-hypercube sequence depends only on (count, D, seed),
    // so two identically shaped range sets with different bounds must map the
    // same raw point through their own bounds.
    let narrow = ranges(&[("a", 0.0, 1.0)]);
    let wide = ranges(&[("a", 0.0, 100.0)]);

    let strategy = SamplingStrategy::sobol();
    let from_narrow = strategy.compute(32, &narrow, SamplingMode::Float).unwrap();
    let from_wide = strategy.compute(32, &wide, SamplingMode::Float).unwrap();

    for row in 0..32 {
        assert_eq!(from_narrow[(row, 0)] * 100.0, from_wide[(row, 0)]);
    }
}

#[test]
fn repeated_computes_are_bit_identical() {
    let ranges = ranges(&[("a", 0.0, 3.0), ("b", -2.0, 2.0)]);
    let strategy = SamplingStrategy::sobol();

    let first = strategy.compute(64, &ranges, SamplingMode::Float).unwrap();
    let second = strategy.compute(64, &ranges, SamplingMode::Float).unwrap();
    assert_eq!(first, second);
}

#[test]
fn seeded_samplers_are_reproducible() {
    let ranges = ranges(&[("a", 0.0, 1.0)]);

    let a = SamplingStrategy::Sobol(SobolSampler::with_seed(7))
        .compute(16, &ranges, SamplingMode::Float)
        .unwrap();
    let b = SamplingStrategy::Sobol(SobolSampler::with_seed(7))
        .compute(16, &ranges, SamplingMode::Float)
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn oversized_sample_count_fails_without_panicking() {
    let ranges = ranges(&[("a", 0.0, 1.0)]);
    let err = SamplingStrategy::sobol()
        .compute(70_000, &ranges, SamplingMode::Float)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::SampleCountTooLarge {
            count: 70_000,
            max: MAX_SAMPLE_COUNT,
        }
    ));
}

#[test]
fn oversized_dimension_fails_without_panicking() {
    let ranges: IndexMap<String, Range> = (0..300)
        .map(|i| (format!("p{i}"), Range::new(0.0, 1.0).unwrap()))
        .collect();
    let err = SamplingStrategy::sobol()
        .compute(8, &ranges, SamplingMode::Float)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::DimensionTooLarge {
            dimension: 300,
            max: MAX_DIMENSION,
        }
    ));
}

#[test]
fn input_ranges_are_not_mutated() {
    let ranges = ranges(&[("a", 0.0, 1.0), ("b", 2.0, 3.0)]);
    let before = ranges.clone();

    SamplingStrategy::sobol()
        .compute(8, &ranges, SamplingMode::Float)
        .unwrap();
    assert_eq!(ranges, before);
}
