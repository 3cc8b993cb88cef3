use proptest::prelude::*;

use super::*;

// Generate arbitrary sequence of manipulations to both a vector and an array
// Apply those manipulations in order, then check that the state of both is the same
// If the contents match AND the invariants of the array hold, we're good
#[derive(Debug, Clone)]
enum Action {
    Push(usize),
    Insert(usize, usize),
    Prepend(usize),
    Pop,
    Delete(usize),
    Remove(usize),
    Clear,
}

impl Action {
    fn act_on_vector(self, mut vec: Vec<usize>) -> Vec<usize> {
        match self {
            Action::Push(value) => vec.push(value),
            Action::Insert(index, value) => {
                if index < vec.len() {
                    vec.insert(index, value)
                }
            }
            Action::Prepend(value) => {
                if !vec.is_empty() {
                    vec.insert(0, value)
                }
            }
            Action::Pop => {
                vec.pop();
            }
            Action::Delete(index) => {
                if index < vec.len() {
                    vec.remove(index);
                }
            }
            Action::Remove(value) => vec.retain(|x| *x != value),
            Action::Clear => vec.clear(),
        }
        vec
    }

    fn act_on_array<P: CapacityPolicy>(
        self,
        mut array: GenericArray<usize, P>,
    ) -> GenericArray<usize, P> {
        let len = array.len();
        match self {
            Action::Push(value) => array.push(value),
            Action::Insert(index, value) => {
                assert_eq!(array.insert(index, value).is_ok(), index < len)
            }
            Action::Prepend(value) => assert_eq!(array.prepend(value).is_ok(), len > 0),
            Action::Pop => assert_eq!(array.pop().is_ok(), len > 0),
            Action::Delete(index) => assert_eq!(array.delete(index).is_ok(), index < len),
            Action::Remove(value) => {
                array.remove(&value);
                assert!(array.find(&value).is_none());
            }
            Action::Clear => array.clear(),
        }
        array
    }
}

fn crunch_actions_for_vec(initial: Vec<usize>, actions: Vec<Action>) -> Vec<usize> {
    actions
        .into_iter()
        .fold(initial, |vec, action| action.act_on_vector(vec))
}

fn crunch_actions_for_array<P: CapacityPolicy>(
    initial: GenericArray<usize, P>,
    actions: Vec<Action>,
) -> GenericArray<usize, P> {
    actions.into_iter().fold(initial, |array, action| {
        let array = action.act_on_array(array);
        array.assert_invariants();
        array
    })
}

// Small values so that `Remove` regularly hits something
fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => (0..16usize).prop_map(Action::Push),
        1 => (0..64usize, 0..16usize).prop_map(|(index, value)| Action::Insert(index, value)),
        1 => (0..16usize).prop_map(Action::Prepend),
        2 => Just(Action::Pop),
        1 => (0..64usize).prop_map(Action::Delete),
        1 => (0..16usize).prop_map(Action::Remove),
        1 => Just(Action::Clear),
    ]
}

fn actions_strategy() -> impl Strategy<Value = Vec<Action>> {
    prop::collection::vec(action_strategy(), 0..100)
}

fn vec_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..16usize, 0..200)
}

fn random_test_runner<P: CapacityPolicy>(capacity: usize, vec: Vec<usize>, actions: Vec<Action>) {
    let mut array: GenericArray<usize, P> =
        GenericArray::with_capacity(capacity).expect("Capacity is never zero");
    array.extend(vec.clone());

    let array = crunch_actions_for_array(array, actions.clone());
    let vec = crunch_actions_for_vec(vec, actions);

    assert_eq!(array.len(), vec.len());
    assert!(Iterator::eq(array.into_iter(), vec.into_iter()));
}

proptest! {
    #[test]
    fn operations_in_order_match_squaring(capacity in 1..8usize, vec in vec_strategy(), actions in actions_strategy()) {
        random_test_runner::<SquaringPolicy>(capacity, vec, actions);
    }

    #[test]
    fn operations_in_order_match_doubling(capacity in 1..8usize, vec in vec_strategy(), actions in actions_strategy()) {
        random_test_runner::<DoublingPolicy>(capacity, vec, actions);
    }

    #[test]
    fn indexing_correctly_lines_up(size in 0..1000usize) {
        let array = (0..size).collect::<DynamicArray<_>>();
        assert_eq!(array.len(), size);
        for i in 0..array.len() {
            assert_eq!(i, *array.at(i).unwrap());
        }
    }

    #[test]
    fn capacity_squares_exactly_when_full(capacity in 2..6usize, pushes in 0..700usize) {
        let mut array = DynamicArray::with_capacity(capacity).unwrap();
        let mut expected = capacity;
        for i in 0..pushes {
            if array.len() == expected {
                expected *= expected;
            }
            array.push(i);
            assert_eq!(array.capacity(), expected);
        }
    }

    #[test]
    fn capacity_halves_when_quarter_full(vec in prop::collection::vec(0..16usize, 1..1000)) {
        let mut array: DynamicArray<usize> = vec.into_iter().collect();
        while !array.is_empty() {
            let before = array.capacity();
            array.pop().unwrap();
            let after = array.capacity();
            if array.len() <= before / 4 && before / 2 > 0 {
                assert_eq!(after, before / 2);
            } else {
                assert_eq!(after, before);
            }
            assert!(after >= array.len());
        }
    }

    #[test]
    fn find_returns_lowest_index(vec in vec_strategy(), needle in 0..16usize) {
        let array: DynamicArray<usize> = vec.clone().into();
        assert_eq!(array.find(&needle), vec.iter().position(|x| *x == needle));
    }

    #[test]
    fn insert_shifts_trailing_elements(vec in prop::collection::vec(0..16usize, 1..200), index in 0..200usize, value in 100..200usize) {
        let index = index % vec.len();
        let mut array: DynamicArray<usize> = vec.clone().into();
        array.insert(index, value).unwrap();

        assert_eq!(array.at(index), Ok(&value));
        for (offset, original) in vec[index..].iter().enumerate() {
            assert_eq!(array.at(index + offset + 1), Ok(original));
        }
        for (i, original) in vec[..index].iter().enumerate() {
            assert_eq!(array.at(i), Ok(original));
        }
    }
}
