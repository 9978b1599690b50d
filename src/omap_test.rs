use arbitrary::{self, unstructured::Unstructured, Arbitrary};
use rand::{prelude::random, rngs::SmallRng, Rng, SeedableRng};

use super::*;

use std::{collections::BTreeMap, ops::Bound};

#[test]
fn test_omap() {
    let seed: u64 = random();
    // let seed: u64 = 1975828765599451809;
    println!("test_omap {}", seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut index: OMap<u8, u64> = OMap::new();
    let mut btmap: BTreeMap<u8, u64> = BTreeMap::new();

    let mut counts = [0_usize; 11];

    for _i in 0..200_000 {
        let bytes = rng.gen::<[u8; 32]>();
        let mut uns = Unstructured::new(&bytes);

        let op: Op<u8, u64> = match uns.arbitrary() {
            Ok(op) => op,
            Err(_) => continue,
        };
        // println!("op -- {:?}", op);
        match op {
            Op::Len => {
                counts[0] += 1;
                assert_eq!(index.len(), btmap.len());
            }
            Op::IsEmpty => {
                counts[1] += 1;
                assert_eq!(index.is_empty(), btmap.is_empty());
            }
            Op::Set(key, val) => {
                counts[2] += 1;
                match (index.set(key, val), btmap.insert(key, val)) {
                    (None, None) => (),
                    (Some(v), Some(r)) => assert_eq!(v, r, "for key {}", key),
                    (None, Some(_)) => panic!("set no key {} in omap", key),
                    (Some(_), None) => panic!("set no key {} in btree", key),
                }
            }
            Op::Remove(key) => {
                counts[3] += 1;
                match (index.remove(&key), btmap.remove(&key)) {
                    (None, None) => (),
                    (Some(v), Some(r)) => assert_eq!(v, r, "for key {}", key),
                    (None, Some(_)) => panic!("remove no key {} in omap", key),
                    (Some(_), None) => panic!("remove no key {} in btree", key),
                }
            }
            Op::Validate => {
                counts[4] += 1;
                index.validate().unwrap();
            }
            Op::Get(key) => {
                counts[5] += 1;
                match (index.get(&key), btmap.get(&key)) {
                    (None, None) => (),
                    (Some(v), Some(r)) => assert_eq!(v, *r, "for key {}", key),
                    (None, Some(_)) => panic!("get no key {} in omap", key),
                    (Some(_), None) => panic!("get no key {} in btree", key),
                }
                assert_eq!(index.contains_key(&key), btmap.contains_key(&key));
            }
            Op::Iter => {
                counts[6] += 1;
                let a: Vec<(u8, u64)> = index.iter().map(|(k, v)| (*k, *v)).collect();
                let b: Vec<(u8, u64)> = btmap.iter().map(|(k, v)| (*k, *v)).collect();
                assert_eq!(a, b);
                assert_eq!(index.first(), btmap.iter().next());
                assert_eq!(index.last(), btmap.iter().next_back());
            }
            Op::Range((l, h)) if asc_range(&l, &h) => {
                counts[7] += 1;
                let r = (Bound::from(l), Bound::from(h));
                let a: Vec<(u8, u64)> = index.range(r).map(|(k, v)| (*k, *v)).collect();
                let b: Vec<(u8, u64)> = btmap.range(r).map(|(k, v)| (*k, *v)).collect();
                assert_eq!(a, b, "range {:?}", r);
            }
            Op::Range((l, h)) => {
                counts[7] += 1;
                let r = (Bound::from(l), Bound::from(h));
                assert_eq!(index.range(r).count(), 0, "range {:?}", r);
            }
            Op::Reverse((l, h)) if asc_range(&l, &h) => {
                counts[8] += 1;
                let r = (Bound::from(l), Bound::from(h));
                let a: Vec<(u8, u64)> = index.reverse(r).map(|(k, v)| (*k, *v)).collect();
                let b: Vec<(u8, u64)> = btmap.range(r).rev().map(|(k, v)| (*k, *v)).collect();
                assert_eq!(a, b, "reverse {:?}", r);
            }
            Op::Reverse((l, h)) => {
                counts[8] += 1;
                let r = (Bound::from(l), Bound::from(h));
                assert_eq!(index.reverse(r).count(), 0, "reverse {:?}", r);
            }
            Op::Update(key, val) => {
                counts[9] += 1;
                let refv = btmap.get_mut(&key).map(|v| std::mem::replace(v, val));
                assert_eq!(index.update(&key, val), refv, "for key {}", key);
            }
            Op::Extend(items) => {
                counts[10] += 1;
                index.extend(items.clone());
                btmap.extend(items.clone())
            }
        }
    }

    let a: Vec<(u8, u64)> = index.iter().map(|(k, v)| (*k, *v)).collect();
    let b: Vec<(u8, u64)> = btmap.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(a, b);
    assert_eq!(index.keys(), btmap.keys().cloned().collect::<Vec<u8>>());
    assert_eq!(index.values(), btmap.values().cloned().collect::<Vec<u64>>());

    println!("counts {:?} len:{}/{}", counts, index.len(), btmap.len());
}

#[test]
fn test_omap_collect() {
    let index: OMap<u32, char> = vec![(3, 'c'), (1, 'a'), (2, 'b')].into_iter().collect();
    assert_eq!(index.keys(), vec![1, 2, 3]);
    assert_eq!(format!("{:?}", index), "{1: 'a', 2: 'b', 3: 'c'}");

    let mut n = 0;
    for (key, value) in &index {
        assert_eq!(*value as u32 - 'a' as u32 + 1, *key);
        n += 1;
    }
    assert_eq!(n, 3);

    let mut index = index;
    index.clear();
    assert_eq!(index.is_empty(), true);
    assert_eq!(index.first(), None);
}

#[derive(Debug, Arbitrary)]
enum Op<K, V> {
    Len,
    IsEmpty,
    Set(K, V),
    Remove(K),
    Validate,
    Get(K),
    Iter,
    Range((Limit<K>, Limit<K>)),
    Reverse((Limit<K>, Limit<K>)),
    Update(K, V),
    Extend(Vec<(K, V)>),
}

#[derive(Clone, Copy, Debug, Arbitrary, Eq, PartialEq)]
enum Limit<T> {
    Unbounded,
    Included(T),
    Excluded(T),
}

fn asc_range<T: PartialOrd>(from: &Limit<T>, to: &Limit<T>) -> bool {
    match (from, to) {
        (Limit::Unbounded, _) => true,
        (_, Limit::Unbounded) => true,
        (Limit::Included(a), Limit::Included(b)) => a <= b,
        (Limit::Included(a), Limit::Excluded(b)) => a <= b,
        (Limit::Excluded(a), Limit::Included(b)) => a <= b,
        (Limit::Excluded(a), Limit::Excluded(b)) => b > a,
    }
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
