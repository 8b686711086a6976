//! Random-operation driver.
//!
//! Spawns worker threads that issue randomly chosen put/get/delete calls
//! against one shared map, joins them, then prints the bucket dump and the
//! load factor. Runs are reproducible via `--seed`.

use std::sync::{Arc, Barrier};
use std::thread;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tsmap::StripedMap;

#[derive(Parser)]
#[command(name = "tsmap-stress")]
#[command(about = "Exercise a shared tsmap::StripedMap from many threads")]
struct Args {
    /// Number of worker threads
    num_threads: usize,

    /// Number of buckets in the shared map
    capacity: usize,

    /// Operations issued per thread
    #[clap(long, default_value_t = 1_000)]
    ops: usize,

    /// Keys are drawn uniformly from 0..key_space
    #[clap(long, default_value_t = 100)]
    key_space: i64,

    /// Seed for the per-thread generators; random when absent
    #[clap(long)]
    seed: Option<u64>,
}

fn main() -> tsmap::Result<()> {
    env_logger::Builder::from_default_env().init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("rerun with --seed {seed} to reproduce");

    let map = Arc::new(StripedMap::with_capacity(args.capacity)?);
    let barrier = Arc::new(Barrier::new(args.num_threads));

    let mut handles = Vec::with_capacity(args.num_threads);
    for tid in 0..args.num_threads {
        let map = Arc::clone(&map);
        let barrier = Arc::clone(&barrier);
        let (ops, key_space) = (args.ops, args.key_space);

        handles.push(thread::spawn(move || {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(tid as u64));
            barrier.wait();
            for _ in 0..ops {
                let key = rng.gen_range(0..key_space);
                match rng.gen_range(0..3) {
                    0 => {
                        map.put(key, rng.gen());
                    }
                    1 => {
                        map.get(key);
                    }
                    _ => {
                        map.remove(key);
                    }
                }
            }
        }));
    }

    for handle in handles {
        handle.join().expect("worker thread panicked");
    }

    print!("{map}");
    println!(
        "{} entries over {} buckets (load factor {:.2})",
        map.len(),
        map.capacity(),
        map.load_factor()
    );

    Ok(())
}
