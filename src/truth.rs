//! Truthiness normalization for template conditions.
//!
//! [`truth_convert`] decides whether a value counts as "true" in a template
//! conditional: an explicit marker wins, sequences are true when non-empty, and
//! everything else falls back to the value's own boolean coercion.

use std::collections::{BTreeMap, HashMap};

/// How a value behaves in a template conditional.
pub trait Truthiness {
    /// An explicit truthiness answer that overrides every other rule.
    fn truthy_marker(&self) -> Option<bool> {
        None
    }

    /// Length, for values that behave like sequences.
    fn sequence_len(&self) -> Option<usize> {
        None
    }

    /// Generic boolean coercion.
    fn coerce(&self) -> bool;
}

/// Normalize `value` to a boolean.
pub fn truth_convert<T: Truthiness + ?Sized>(value: &T) -> bool {
    if let Some(marker) = value.truthy_marker() {
        return marker;
    }
    match value.sequence_len() {
        Some(len) => len != 0,
        None => value.coerce(),
    }
}

impl Truthiness for bool {
    fn coerce(&self) -> bool {
        *self
    }
}

macro_rules! int_truthiness {
    ($($t:ty),*) => {
        $(impl Truthiness for $t {
            fn coerce(&self) -> bool {
                *self != 0
            }
        })*
    };
}

int_truthiness!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthiness for f32 {
    fn coerce(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthiness for f64 {
    fn coerce(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthiness for str {
    fn coerce(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthiness for String {
    fn coerce(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthiness for () {
    fn coerce(&self) -> bool {
        false
    }
}

impl<T: Truthiness + ?Sized> Truthiness for &T {
    fn truthy_marker(&self) -> Option<bool> {
        (**self).truthy_marker()
    }

    fn sequence_len(&self) -> Option<usize> {
        (**self).sequence_len()
    }

    fn coerce(&self) -> bool {
        (**self).coerce()
    }
}

impl<T: Truthiness> Truthiness for Option<T> {
    fn truthy_marker(&self) -> Option<bool> {
        self.as_ref().and_then(Truthiness::truthy_marker)
    }

    fn sequence_len(&self) -> Option<usize> {
        self.as_ref().and_then(Truthiness::sequence_len)
    }

    fn coerce(&self) -> bool {
        self.as_ref().is_some_and(Truthiness::coerce)
    }
}

impl<T> Truthiness for [T] {
    fn sequence_len(&self) -> Option<usize> {
        Some(self.len())
    }

    fn coerce(&self) -> bool {
        true
    }
}

impl<T> Truthiness for Vec<T> {
    fn sequence_len(&self) -> Option<usize> {
        Some(self.len())
    }

    fn coerce(&self) -> bool {
        true
    }
}

impl<T, const N: usize> Truthiness for [T; N] {
    fn sequence_len(&self) -> Option<usize> {
        Some(N)
    }

    fn coerce(&self) -> bool {
        true
    }
}

// Maps are plain objects: always truthy, never sequences.
impl<K, V, S> Truthiness for HashMap<K, V, S> {
    fn coerce(&self) -> bool {
        true
    }
}

impl<K, V> Truthiness for BTreeMap<K, V> {
    fn coerce(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Proxy {
        is_truthy: bool,
        items: Vec<u8>,
    }

    impl Truthiness for Proxy {
        fn truthy_marker(&self) -> Option<bool> {
            Some(self.is_truthy)
        }

        fn sequence_len(&self) -> Option<usize> {
            Some(self.items.len())
        }

        fn coerce(&self) -> bool {
            true
        }
    }

    #[test]
    fn marker_wins_over_sequence() {
        let empty_but_true = Proxy {
            is_truthy: true,
            items: Vec::new(),
        };
        let full_but_false = Proxy {
            is_truthy: false,
            items: vec![1, 2],
        };
        assert!(truth_convert(&empty_but_true));
        assert!(!truth_convert(&full_but_false));
    }

    #[test]
    fn sequences_by_length() {
        assert!(!truth_convert(&Vec::<i32>::new()));
        assert!(truth_convert(&vec![0]));
        assert!(!truth_convert(&[0u8; 0]));
        assert!(truth_convert(&[false]));
        assert!(!truth_convert(&[1, 2][..0]));
    }

    #[test]
    fn scalars_coerce() {
        assert!(truth_convert(&true));
        assert!(!truth_convert(&false));
        assert!(!truth_convert(&0));
        assert!(truth_convert(&-3i64));
        assert!(!truth_convert(&f64::NAN));
        assert!(!truth_convert(&0.0f32));
        assert!(truth_convert(&0.5));
        assert!(!truth_convert(""));
        assert!(truth_convert("x"));
        assert!(!truth_convert(&String::new()));
        assert!(!truth_convert(&()));
    }

    #[test]
    fn options_and_maps() {
        assert!(!truth_convert(&None::<bool>));
        assert!(!truth_convert(&Some(false)));
        assert!(truth_convert(&Some("primary")));
        assert!(!truth_convert(&Some(Vec::<u8>::new())));
        assert!(truth_convert(&BTreeMap::<String, String>::new()));
        assert!(truth_convert(&HashMap::<u8, u8>::new()));
    }
}
