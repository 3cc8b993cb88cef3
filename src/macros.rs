// Code coverage doesn't pick up doc tests, duplicate these down here
// just to make sure no obvious regressions happen.
#[cfg(test)]
macro_rules! public_api_tests {
    ($mod_name:tt, $type:tt, $array_macro:tt) => {
        use crate::$array_macro;
        use crate::error::ArrayError;

        #[test]
        fn new_is_empty() {
            let array: $type<usize> = $type::new();
            assert_eq!(array.len(), 0);
            assert_eq!(array.size(), 0);
            assert!(array.is_empty());
            assert_eq!(array.capacity(), crate::array::DEFAULT_CAPACITY);
        }

        #[test]
        fn with_capacity() {
            let array: $type<usize> = $type::with_capacity(5).unwrap();
            assert_eq!(array.size(), 0);
            assert_eq!(array.capacity(), 5);
        }

        #[test]
        fn with_zero_capacity() {
            let result: Result<$type<usize>, _> = $type::with_capacity(0);
            assert_eq!(
                result.unwrap_err(),
                ArrayError::InvalidCapacity { requested: 0 }
            );
        }

        #[test]
        fn push() {
            let mut array = $type::with_capacity(2).unwrap();
            array.push(2);
            array.push(12);
            assert_eq!(array.size(), 2);
            assert_eq!(array, $array_macro![2, 12]);
        }

        #[test]
        fn is_empty() {
            let mut array = $type::with_capacity(2).unwrap();
            assert!(array.is_empty());
            array.push("applesauce");
            assert!(!array.is_empty());
        }

        #[test]
        fn at() {
            let mut array = $type::with_capacity(12).unwrap();
            for i in 0..12 {
                array.push(i + 3);
            }
            assert_eq!(array.at(6), Ok(&9));
            assert_eq!(array[6], 9);
            assert_eq!(
                array.at(12),
                Err(ArrayError::IndexOutOfBounds { index: 12, len: 12 })
            );
        }

        #[test]
        fn get() {
            let mut array = $array_macro![1, 2, 3, 4, 5];
            assert_eq!(array.get(3), Some(&4));
            assert!(array.get(1000).is_none());

            *array.get_mut(0).unwrap() = 10;
            assert_eq!(array.first(), Some(&10));
            assert_eq!(array.last(), Some(&5));
        }

        #[test]
        #[should_panic(expected = "index out of bounds")]
        fn index_out_of_bounds_panics() {
            let array = $array_macro![1, 2, 3];
            let _value = array[3];
        }

        #[test]
        fn insert() {
            let mut array = $type::with_capacity(5).unwrap();
            for i in 0..5 {
                array.push(i + 5);
            }
            array.insert(2, 47).unwrap();
            assert_eq!(array[2], 47);
            assert_eq!(array[3], 7);
            assert_eq!(array, $array_macro![5, 6, 47, 7, 8, 9]);
        }

        #[test]
        fn insert_at_len_is_rejected() {
            let mut array = $array_macro![1, 2, 3];
            assert_eq!(
                array.insert(3, 4),
                Err(ArrayError::IndexOutOfBounds { index: 3, len: 3 })
            );
            assert_eq!(array, $array_macro![1, 2, 3]);
        }

        #[test]
        fn prepend() {
            let mut array = $type::with_capacity(5).unwrap();
            for i in 0..3 {
                array.push(i + 1);
            }
            array.prepend(15).unwrap();
            assert_eq!(array[0], 15);
            assert_eq!(array[1], 1);
        }

        #[test]
        fn prepend_to_empty_is_rejected() {
            let mut array: $type<usize> = $type::new();
            assert_eq!(
                array.prepend(1),
                Err(ArrayError::IndexOutOfBounds { index: 0, len: 0 })
            );
        }

        #[test]
        fn pop() {
            let mut array = $type::with_capacity(5).unwrap();
            for i in 0..3 {
                array.push(i + 1);
            }
            assert_eq!(array.size(), 3);
            assert_eq!(array.pop(), Ok(3));
            assert_eq!(array.pop(), Ok(2));
            assert_eq!(array.size(), 1);
        }

        #[test]
        fn pop_empty() {
            let mut array: $type<usize> = $type::new();
            assert_eq!(array.pop(), Err(ArrayError::EmptyContainer));
        }

        #[test]
        fn delete() {
            let mut array = $array_macro![1, 2, 3, 4, 5];
            assert_eq!(array.delete(1), Ok(2));
            assert_eq!(array, $array_macro![1, 3, 4, 5]);
            assert_eq!(
                array.delete(4),
                Err(ArrayError::IndexOutOfBounds { index: 4, len: 4 })
            );

            let mut empty: $type<usize> = $type::new();
            assert_eq!(empty.delete(0), Err(ArrayError::EmptyContainer));
        }

        #[test]
        fn remove() {
            let mut array = $type::with_capacity(5).unwrap();
            for value in [12, 3, 41, 12, 12, 12] {
                array.push(value);
            }
            assert_eq!(array.remove(&12), 4);
            assert_eq!(array.size(), 2);
            assert_eq!(array, $array_macro![3, 41]);
            assert!(array.find(&12).is_none());
        }

        #[test]
        fn find() {
            let array = $array_macro![1, 2, 3, 4, 5];
            assert_eq!(array.find(&1), Some(0));
            assert_eq!(array.find(&5), Some(4));
            assert_eq!(array.find(&3), Some(2));

            let array = $array_macro![1, 2, 3, 4];
            assert_eq!(array.find(&7), None);
            assert!(!array.contains(&7));
        }

        #[test]
        fn find_returns_first_occurrence() {
            let array = $array_macro![4, 1, 4, 1];
            assert_eq!(array.find(&1), Some(1));
        }

        #[test]
        fn clear() {
            let mut array = $array_macro![1, 2, 3];
            array.clear();
            assert!(array.is_empty());
            assert!(array.capacity() >= 1);
        }

        #[test]
        fn iter() {
            assert_eq!($array_macro![1usize, 1, 1, 1, 1].iter().sum::<usize>(), 5);
        }

        #[test]
        fn iter_mut() {
            let mut array = $array_macro![1, 2, 3];
            for value in array.iter_mut() {
                *value *= 10;
            }
            assert_eq!(array, $array_macro![10, 20, 30]);
        }

        #[test]
        fn into_iter() {
            let array = $array_macro![1, 2, 3];
            assert_eq!(array.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
        }

        #[test]
        fn extend() {
            let mut array = $array_macro![1usize, 2, 3];
            array.extend(vec![4, 5, 6]);
            assert_eq!(array, $array_macro![1, 2, 3, 4, 5, 6])
        }

        #[test]
        fn from_vec() {
            let array: $type<_> = vec![1, 2, 3].into();
            assert_eq!(array, $array_macro![1, 2, 3]);
        }

        #[test]
        fn debug() {
            assert_eq!(format!("{:?}", $array_macro![1, 2, 3]), "[1, 2, 3]");
        }

        #[test]
        fn equality_ignores_capacity() {
            let mut left = $type::with_capacity(3).unwrap();
            left.push(1);
            let right = $array_macro![1];
            assert_ne!(left.capacity(), right.capacity());
            assert_eq!(left, right);
        }

        #[test]
        fn values_without_default() {
            struct Opaque(usize);

            let mut array = $type::with_capacity(2).unwrap();
            array.push(Opaque(1));
            array.push(Opaque(2));
            array.push(Opaque(3));
            assert_eq!(array.pop().map(|x| x.0), Ok(3));
            assert_eq!(array.at(1).map(|x| x.0), Ok(2));
        }
    };
}

macro_rules! impl_iter {
    () => {
        #[inline(always)]
        fn next(&mut self) -> Option<Self::Item> {
            self.0.next()
        }

        #[inline(always)]
        fn size_hint(&self) -> (usize, Option<usize>) {
            self.0.size_hint()
        }

        #[inline(always)]
        fn fold<B, F>(self, init: B, f: F) -> B
        where
            Self: Sized,
            F: FnMut(B, Self::Item) -> B,
        {
            self.0.fold(init, f)
        }
    };
}
