use doe_sampler::sampler::{SamplingMode, SamplingStrategy};
use doe_sampler::Range;
use indexmap::IndexMap;
use proptest::prelude::*;

fn ranges(bounds: &[(&str, f64, f64)]) -> IndexMap<String, Range> {
    bounds
        .iter()
        .map(|&(name, low, high)| (name.to_owned(), Range::new(low, high).unwrap()))
        .collect()
}

#[test]
fn endpoints_are_inclusive_and_exact() {
    let ranges = ranges(&[("a", 0.25, 0.75), ("b", -10.0, 10.0)]);
    let matrix = SamplingStrategy::linear_grid()
        .compute(6, &ranges, SamplingMode::Float)
        .unwrap();

    assert_eq!(matrix[(0, 0)], 0.25);
    assert_eq!(matrix[(5, 0)], 0.75);
    assert_eq!(matrix[(0, 1)], -10.0);
    assert_eq!(matrix[(5, 1)], 10.0);
}

#[test]
fn single_sample_is_the_low_bound() {
    let ranges = ranges(&[("a", 3.0, 9.0)]);
    let matrix = SamplingStrategy::linear_grid()
        .compute(1, &ranges, SamplingMode::Float)
        .unwrap();
    assert_eq!((matrix.nrows(), matrix.ncols()), (1, 1));
    assert_eq!(matrix[(0, 0)], 3.0);
}

#[test]
fn rows_are_aligned_by_index_across_columns() {
    // No factorial expansion: row count equals the sample count no matter
    // how many dimensions are swept.
    let ranges = ranges(&[("a", 0.0, 1.0), ("b", 0.0, 1.0), ("c", 0.0, 1.0)]);
    let matrix = SamplingStrategy::linear_grid()
        .compute(5, &ranges, SamplingMode::Float)
        .unwrap();
    assert_eq!((matrix.nrows(), matrix.ncols()), (5, 3));
}

proptest! {
    #[test]
    fn columns_hit_bounds_and_never_decrease(
        low in -1e6_f64..1e6,
        span in 1e-6_f64..1e6,
        count in 2_usize..128,
    ) {
        let high = low + span;
        let ranges = ranges(&[("p", low, high)]);
        let matrix = SamplingStrategy::linear_grid()
            .compute(count, &ranges, SamplingMode::Float)
            .unwrap();

        prop_assert_eq!(matrix[(0, 0)], low);
        prop_assert_eq!(matrix[(count - 1, 0)], high);
        for row in 1..count {
            prop_assert!(matrix[(row, 0)] >= matrix[(row - 1, 0)]);
        }
    }
}
