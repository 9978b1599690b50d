use rand::{prelude::random, rngs::SmallRng, Rng, SeedableRng};

use super::*;

#[test]
fn test_arena_sentinel() {
    let arena: Arena<u8, u64> = Arena::new();
    assert_eq!(arena.len(), 0);
    assert_eq!(arena[Handle::NIL].is_black(), true);
    assert_eq!(arena[Handle::NIL].entry.is_none(), true);
}

#[test]
fn test_arena_reuse() {
    let mut arena: Arena<u8, u64> = Arena::new();
    let a = arena.alloc(Node::new(1, 10, Handle::NIL));
    let b = arena.alloc(Node::new(2, 20, Handle::NIL));
    assert_ne!(a, Handle::NIL);
    assert_ne!(a, b);
    assert_eq!(arena.len(), 2);

    let entry = arena.free(a);
    assert_eq!((entry.key, entry.value), (1, 10));
    assert_eq!(arena.len(), 1);

    let c = arena.alloc(Node::new(3, 30, b));
    assert_eq!(c, a);
    assert_eq!(arena[c].as_entry().key, 3);
    assert_eq!(arena[c].parent, b);
    assert_eq!(arena.len(), 2);
}

#[test]
fn test_arena_release() {
    let mut arena: Arena<u32, u32> = Arena::new();
    let handles: Vec<Handle> = (0..1000)
        .map(|k| arena.alloc(Node::new(k, k, Handle::NIL)))
        .collect();
    assert_eq!(arena.capacity(), 1001);

    for handle in handles[1..].iter() {
        arena.free(*handle);
    }
    // one live node pins the peak size.
    assert_eq!(arena.len(), 1);
    assert_eq!(arena.capacity(), 1001);

    assert_eq!(arena.free(handles[0]).key, 0);
    assert_eq!(arena.len(), 0);
    assert_eq!(arena.capacity(), 1);
    assert_eq!(arena[Handle::NIL].is_black(), true);

    let a = arena.alloc(Node::new(7, 70, Handle::NIL));
    assert_eq!(a.to_index(), 1);
    assert_eq!(arena.len(), 1);
}

#[test]
#[should_panic(expected = "freeing sentinel")]
fn test_arena_free_sentinel() {
    let mut arena: Arena<u8, u64> = Arena::new();
    arena.free(Handle::NIL);
}

#[test]
fn test_arena_model() {
    let seed: u64 = random();
    println!("test_arena_model {}", seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut arena: Arena<u32, u32> = Arena::new();
    let mut model: Vec<(Handle, u32)> = vec![];

    for _i in 0..10_000 {
        match rng.gen::<u8>() % 3 {
            0 | 1 => {
                let key: u32 = rng.gen();
                let handle = arena.alloc(Node::new(key, key, Handle::NIL));
                model.push((handle, key));
            }
            _ if model.is_empty() => (),
            _ => {
                let (handle, key) = model.swap_remove(rng.gen::<usize>() % model.len());
                assert_eq!(arena.free(handle).key, key);
            }
        }
        assert_eq!(arena.len(), model.len());
    }

    for (handle, key) in model.into_iter() {
        assert_eq!(arena[handle].as_entry().key, key);
    }
}
