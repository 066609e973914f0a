//! Seeded `i32` inputs for the test suite and the benchmarks.
//!
//! All patterns in one process share a seed, printed by the test suite and overridable with
//! `OVERRIDE_SEED=<u64>` to replay a failure.

use std::env;
use std::str::FromStr;
use std::sync::Mutex;

use rand::distributions::Uniform;
use rand::prelude::*;

pub fn random(len: usize) -> Vec<i32> {
    let mut rng = seeded_rng();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}

/// `len` values drawn uniformly from `range`, e.g. `1..=10_000`.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    let dist: Uniform<i32> = range.into();

    seeded_rng().sample_iter(dist).take(len).collect()
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

/// Ascending first half, descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut vals = random(len);
    let (rising, falling) = vals.split_at_mut(len / 2);

    rising.sort_unstable();
    falling.sort_unstable_by(|a, b| b.cmp(a));

    vals
}

/// Makes every later pattern call draw a fresh seed. Benchmarks use this so repeated runs do
/// not sort the same input.
pub fn use_random_seed_each_time() {
    if let SeedSource::Override(_) = seed_source() {
        panic!("use_random_seed_each_time conflicts with OVERRIDE_SEED");
    }

    *SEED_SOURCE.lock().unwrap() = Some(SeedSource::EachCall);
}

pub fn random_init_seed() -> u64 {
    match seed_source() {
        SeedSource::PerProcess(seed) | SeedSource::Override(seed) => seed,
        SeedSource::EachCall => thread_rng().gen(),
    }
}

#[derive(Copy, Clone)]
enum SeedSource {
    PerProcess(u64),
    Override(u64),
    EachCall,
}

static SEED_SOURCE: Mutex<Option<SeedSource>> = Mutex::new(None);

fn seed_source() -> SeedSource {
    let mut source = SEED_SOURCE.lock().unwrap();

    *source.get_or_insert_with(|| match env::var("OVERRIDE_SEED") {
        Ok(seed) => SeedSource::Override(u64::from_str(&seed).unwrap()),
        Err(_) => SeedSource::PerProcess(thread_rng().gen()),
    })
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
