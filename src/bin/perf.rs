use arbitrary::Arbitrary;
use log::info;
use rand::{prelude::random, rngs::SmallRng, Rng, SeedableRng};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use structopt::StructOpt;

use std::{ops::Bound, time};

use rbdict::RbTree;

/// Command line options.
#[derive(Clone, StructOpt)]
pub struct Opt {
    #[structopt(long = "seed")]
    seed: Option<u64>,

    #[structopt(long = "loads", default_value = "1000000")] // default 1M
    loads: usize,

    #[structopt(long = "sets", default_value = "0")]
    sets: usize,

    #[structopt(long = "dels", default_value = "0")]
    dels: usize,

    #[structopt(long = "gets", default_value = "0")]
    gets: usize,

    #[structopt(long = "ranges", default_value = "0")]
    ranges: usize,

    #[structopt(long = "validate")]
    validate: bool,

    #[structopt(long = "verbose")]
    verbose: bool,
}

fn main() {
    let opts = Opt::from_args();

    let level = if opts.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto).ok();

    let seed = opts.seed.unwrap_or_else(random);
    info!("perf seed {}", seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut index: RbTree<u64, u64> = RbTree::default();

    // initial load
    let start = time::Instant::now();
    for _i in 0..opts.loads {
        let (key, val): (u64, u64) = (rng.gen(), rng.gen());
        index.insert(key, val);
    }
    info!("loaded {} items in {:?}", opts.loads, start.elapsed());

    do_incremental(&mut rng, &opts, &mut index);

    let start = time::Instant::now();
    let n = index.iter().count();
    info!("iter for iterating {}, took {:?}", n, start.elapsed());

    if opts.validate {
        let start = time::Instant::now();
        match index.validate() {
            Ok(()) => info!("validated {} entries in {:?}", index.len(), start.elapsed()),
            Err(err) => panic!("validate failed: {}", err),
        }
    }
}

fn do_incremental(rng: &mut SmallRng, opts: &Opt, index: &mut RbTree<u64, u64>) {
    let start = time::Instant::now();
    let total = opts.sets + opts.dels + opts.gets + opts.ranges;
    let mut n = total;
    let mut n_items = 0;
    while n > 0 {
        let op = rng.gen::<usize>() % total;

        let key = rng.gen::<u64>();
        if op < opts.sets {
            let val = rng.gen::<u64>();
            index.insert(key, val);
        } else if op < (opts.sets + opts.dels) {
            index.delete(&key);
        } else if op < (opts.sets + opts.dels + opts.gets) {
            index.get(&key);
        } else {
            let bytes = rng.gen::<[u8; 32]>();
            let mut uns = arbitrary::unstructured::Unstructured::new(&bytes);
            let (l, h): (Limit<u64>, Limit<u64>) = match uns.arbitrary() {
                Ok(limits) => limits,
                Err(_) => (Limit::Unbounded, Limit::Unbounded),
            };
            let r = (Bound::from(l), Bound::from(h));
            n_items += index.range(r).take(100).count();
        }
        n -= 1;
    }
    info!(
        "incremental for operations {}, ranged over {} items, took {:?}",
        total,
        n_items,
        start.elapsed()
    );
}

#[derive(Clone, Debug, Arbitrary, Eq, PartialEq)]
enum Limit<T> {
    Unbounded,
    Included(T),
    Excluded(T),
}

impl<T> From<Limit<T>> for Bound<T> {
    fn from(limit: Limit<T>) -> Self {
        match limit {
            Limit::Unbounded => Bound::Unbounded,
            Limit::Included(v) => Bound::Included(v),
            Limit::Excluded(v) => Bound::Excluded(v),
        }
    }
}
