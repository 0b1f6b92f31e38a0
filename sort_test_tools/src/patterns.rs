//! Input shapes shared by the tests and benchmarks. All of them produce `i32` values, callers map
//! them into other types while keeping their relative order.
//!
//! Randomness is seeded once per process, so a failing test prints one seed that reproduces every
//! pattern it used. `OVERRIDE_SEED=<u64>` pins that seed.

use std::env;
use std::sync::Mutex;

use rand::distributions::Uniform;
use rand::prelude::*;
use rand::rngs::StdRng;

use zipf::ZipfDistribution;

pub fn random(len: usize) -> Vec<i32> {
    let mut rng = seeded_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

/// Values drawn uniformly from `range`, for example `0..4` for an input made of four distinct keys.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    let dist: Uniform<i32> = range.into();
    let mut rng = seeded_rng();

    (0..len).map(|_| rng.sample(dist)).collect()
}

/// Zipf distributed ranks in `1..=len`, a few values are very common and most are rare.
///
/// # Panics
///
/// Panics if `len` is zero or `exponent` is not positive.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    let dist = ZipfDistribution::new(len, exponent).unwrap();
    let mut rng = seeded_rng();

    (0..len).map(|_| rng.sample(&dist) as i32).collect()
}

/// A sorted prefix covering `sorted_percent` of the input, followed by random values.
pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    let mut v = random(len);
    let prefix_len = ((len as f64) * sorted_percent / 100.0).round() as usize;
    v[..prefix_len.min(len)].sort_unstable();
    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// Random values cut into `saw_count` chunks, each chunk sorted either ascending or descending.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    let mut v = random(len);
    if len == 0 {
        return v;
    }

    let chunk_len = (len / saw_count.max(1)).max(1);
    let directions = random_uniform(len / chunk_len + 1, 0..=1);

    for (chunk, direction) in v.chunks_mut(chunk_len).zip(directions) {
        if direction == 0 {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by(|a, b| b.cmp(a));
        }
    }

    v
}

/// Ascending first half, descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut v = random(len);
    let (rise, fall) = v.split_at_mut(len / 2);
    rise.sort_unstable();
    fall.sort_unstable_by(|a, b| b.cmp(a));
    v
}

/// `0, 1, .., period - 1` repeated, every value shows up about `len / period` times.
pub fn modulo_ramp(len: usize, period: usize) -> Vec<i32> {
    let period = period.max(1);
    (0..len).map(|i| (i % period) as i32).collect()
}

/// Permutation of `1..=len` on which picking the median of first, middle and last element as pivot
/// splits off only two elements per partition.
pub fn median_of_3_killer(len: usize) -> Vec<i32> {
    let half = len / 2;
    let mut v = vec![0; len];

    for i in 0..half {
        v[i] = if i % 2 == 0 {
            i as i32 + 1
        } else {
            (half + i + (half % 2)) as i32
        };
        v[half + i] = 2 * (i as i32 + 1);
    }

    if len % 2 == 1 {
        v[len - 1] = len as i32;
    }

    v
}

/// Makes every following call draw a fresh seed, instead of reusing the per process one.
/// Benchmarks call this so consecutive batches don't measure the exact same input.
///
/// # Panics
///
/// Panics if `OVERRIDE_SEED` is set.
pub fn use_random_seed_each_time() {
    let mut state = SEED.lock().unwrap();
    if let Seed::Override(_) = current_seed(&mut state) {
        panic!("OVERRIDE_SEED is set, refusing to switch to a new seed per call");
    }

    *state = Some(Seed::EachCall);
}

/// The seed patterns are currently generated from.
pub fn random_init_seed() -> u64 {
    let mut state = SEED.lock().unwrap();
    match current_seed(&mut state) {
        Seed::Override(seed) | Seed::PerProcess(seed) => seed,
        Seed::EachCall => thread_rng().gen(),
    }
}

#[derive(Copy, Clone)]
enum Seed {
    Override(u64),
    PerProcess(u64),
    EachCall,
}

static SEED: Mutex<Option<Seed>> = Mutex::new(None);

fn current_seed(state: &mut Option<Seed>) -> Seed {
    *state.get_or_insert_with(|| match env::var("OVERRIDE_SEED") {
        Ok(seed) => Seed::Override(
            seed.parse()
                .unwrap_or_else(|_| panic!("OVERRIDE_SEED is not a u64: {seed:?}")),
        ),
        Err(_) => Seed::PerProcess(thread_rng().gen()),
    })
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
