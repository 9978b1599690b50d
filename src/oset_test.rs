use rand::{prelude::random, rngs::SmallRng, Rng, SeedableRng};

use super::*;

use std::collections::BTreeSet;

#[test]
fn test_oset() {
    let seed: u64 = random();
    println!("test_oset {}", seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut set: OSet<u16> = OSet::new();
    let mut btset: BTreeSet<u16> = BTreeSet::new();

    for i in 0..100_000 {
        let key = rng.gen::<u16>() % 1024;
        match rng.gen::<u8>() % 4 {
            0 | 1 => assert_eq!(set.insert(key), btset.insert(key), "insert {}", key),
            2 => assert_eq!(set.remove(&key), btset.remove(&key), "remove {}", key),
            _ => assert_eq!(set.contains(&key), btset.contains(&key), "contains {}", key),
        }
        assert_eq!(set.len(), btset.len());

        if i % 10_000 == 0 {
            set.validate().unwrap();
            let a: Vec<u16> = set.iter().cloned().collect();
            let b: Vec<u16> = btset.iter().cloned().collect();
            assert_eq!(a, b);

            let (l, h) = (key / 2, key);
            let a: Vec<u16> = set.range(l..h).cloned().collect();
            let b: Vec<u16> = btset.range(l..h).cloned().collect();
            assert_eq!(a, b, "range {}..{}", l, h);
        }
    }

    assert_eq!(set.to_vec(), btset.iter().cloned().collect::<Vec<u16>>());
    assert_eq!(set.first(), btset.iter().next());
    assert_eq!(set.last(), btset.iter().next_back());
}

#[test]
fn test_oset_collect() {
    let set: OSet<&str> = vec!["pear", "apple", "fig", "apple"].into_iter().collect();
    assert_eq!(set.len(), 3);
    assert_eq!(set.to_vec(), vec!["apple", "fig", "pear"]);
    assert_eq!(format!("{:?}", set), r#"{"apple", "fig", "pear"}"#);

    let mut set = set;
    set.extend(vec!["kiwi"]);
    assert_eq!(set.first(), Some(&"apple"));
    assert_eq!(set.last(), Some(&"pear"));
    set.clear();
    assert_eq!(set.is_empty(), true);
}
