use rand::Rng;

/// Default number of samples produced for demo data.
pub const DEFAULT_COUNT: usize = 15;
/// Default lower bound for demo data.
pub const DEFAULT_MIN: i64 = 10;
/// Default upper bound for demo data.
pub const DEFAULT_MAX: i64 = 100;

/// Draws `count` independent, uniformly distributed integers from
/// `[min, max]` (both inclusive) and returns them as `f64`.
///
/// The random source is supplied by the caller, so seeded generators give
/// reproducible output. Bounds passed in reverse order are swapped.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg32;
/// use statlens_stats::random::generate_data;
///
/// let mut rng = Pcg32::seed_from_u64(7);
/// let data = generate_data(&mut rng, 15, 10, 100);
/// assert_eq!(data.len(), 15);
/// assert!(data.iter().all(|v| (10.0..=100.0).contains(v) && v.fract() == 0.0));
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn generate_data<R>(rng: &mut R, count: usize, min: i64, max: i64) -> Vec<f64>
where
    R: Rng + ?Sized,
{
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    (0..count)
        .map(|_| rng.random_range(low..=high) as f64)
        .collect()
}
