//! Random operation sequences checked against a `Vec` model.

use nexus_slist::{ArenaListStorage, ListError, SList, SinglyLinkedList};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const SEEDS: [u64; 4] = [1, 42, 0xDEAD_BEEF, 12345];
const OPS: usize = 5_000;

fn run(seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut list: SinglyLinkedList<u32> = SinglyLinkedList::new();
    let mut model: Vec<u32> = Vec::new();

    for _ in 0..OPS {
        let len = model.len();
        let position = rng.gen_range(0..len + 3);
        let value = rng.gen_range(0..64u32);

        match rng.gen_range(0..10) {
            0 => {
                list.push_front(value);
                model.insert(0, value);
            }
            1 => {
                list.push_back(value);
                model.push(value);
            }
            2 => match list.insert_at(position, value) {
                Ok(()) => model.insert(position, value),
                Err(err) => {
                    assert!(position > len);
                    assert_eq!(err.into_inner(), value);
                }
            },
            3 => {
                list.insert_at_or_back(position, value);
                model.insert(position.min(len), value);
            }
            4 => {
                let expected = (!model.is_empty()).then(|| model.remove(0));
                assert_eq!(list.pop_front(), expected);
            }
            5 => assert_eq!(list.pop_back(), model.pop()),
            6 => {
                let expected = if len == 0 {
                    Err(ListError::Empty)
                } else if position >= len {
                    Err(ListError::OutOfRange { position, len })
                } else {
                    Ok(model.remove(position))
                };
                assert_eq!(list.remove_at(position), expected);
            }
            7 => {
                let expected = if len == 0 {
                    Err(ListError::Empty)
                } else {
                    match model.iter().position(|&v| v == value) {
                        Some(i) => Ok(model.remove(i)),
                        None => Err(ListError::ValueNotFound),
                    }
                };
                assert_eq!(list.remove_value(&value), expected);
            }
            8 => {
                let expected = if len == 0 {
                    Err(ListError::Empty)
                } else {
                    model
                        .get(position)
                        .ok_or(ListError::OutOfRange { position, len })
                };
                assert_eq!(list.get(position), expected);
            }
            _ => {
                if rng.gen_ratio(1, 50) {
                    list.clear();
                    model.clear();
                }
            }
        }

        assert_eq!(list.len(), model.len());
        assert_eq!(list.front(), model.first());
        assert_eq!(list.back(), model.last());
    }

    assert!(list.iter().eq(model.iter()));
}

#[test]
fn random_ops_match_vec() {
    for seed in SEEDS {
        run(seed);
    }
}

#[test]
fn shared_storage_lists_stay_disjoint() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut storage: ArenaListStorage<u32> = ArenaListStorage::new();
    let mut lists: [SList<u32, ArenaListStorage<u32>>; 3] =
        [SList::new(), SList::new(), SList::new()];
    let mut models: [Vec<u32>; 3] = Default::default();

    for i in 0..2_000u32 {
        let which = rng.gen_range(0..3);
        if rng.gen_bool(0.6) {
            lists[which].push_back(&mut storage, i);
            models[which].push(i);
        } else {
            let expected = (!models[which].is_empty()).then(|| models[which].remove(0));
            assert_eq!(lists[which].pop_front(&mut storage), expected);
        }
    }

    let total: usize = models.iter().map(Vec::len).sum();
    assert_eq!(storage.len(), total);
    for (list, model) in lists.iter().zip(&models) {
        assert!(list.iter(&storage).eq(model.iter()));
    }
}
