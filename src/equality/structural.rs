use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Deep, field-by-field equality used to decide whether a freshly fetched
/// value differs from a cached one.
///
/// Implementations must be reflexive and symmetric. Two values of different
/// concrete types can never be compared, which is how kind discrimination
/// works for typed shapes.
pub trait StructuralEq {
    fn structural_eq(&self, other: &Self) -> bool;
}

pub fn equals<T: StructuralEq + ?Sized>(x: &T, y: &T) -> bool {
    std::ptr::eq(x, y) || x.structural_eq(y)
}

/// Implements [`StructuralEq`] for a record by comparing every listed field.
///
/// The field list is destructured, so leaving a field out fails to compile.
#[macro_export]
macro_rules! impl_structural_eq {
    ($shape:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::equality::StructuralEq for $shape {
            fn structural_eq(&self, other: &Self) -> bool {
                let Self { $($field),+ } = self;
                $( $crate::equality::equals($field, &other.$field) )&&+
            }
        }
    };
}

macro_rules! exact_structural_eq {
    ($($t:ty),* $(,)?) => {
        $(
            impl StructuralEq for $t {
                fn structural_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

exact_structural_eq!(bool, char, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, str, String);

// NaN is treated as equal to itself so that every value is equal to itself.
macro_rules! float_structural_eq {
    ($($t:ty),*) => {
        $(
            impl StructuralEq for $t {
                fn structural_eq(&self, other: &Self) -> bool {
                    self == other || (self.is_nan() && other.is_nan())
                }
            }
        )*
    };
}

float_structural_eq!(f32, f64);

impl<T: StructuralEq> StructuralEq for Option<T> {
    fn structural_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(a), Some(b)) => equals(a, b),
            _ => false,
        }
    }
}

impl<T: StructuralEq> StructuralEq for [T] {
    fn structural_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| equals(a, b))
    }
}

impl<T: StructuralEq> StructuralEq for Vec<T> {
    fn structural_eq(&self, other: &Self) -> bool {
        equals(self.as_slice(), other.as_slice())
    }
}

impl<T: StructuralEq, const N: usize> StructuralEq for [T; N] {
    fn structural_eq(&self, other: &Self) -> bool {
        equals(self.as_slice(), other.as_slice())
    }
}

impl<T: StructuralEq + ?Sized> StructuralEq for Box<T> {
    fn structural_eq(&self, other: &Self) -> bool {
        equals(&**self, &**other)
    }
}

impl<K: Ord, V: StructuralEq> StructuralEq for BTreeMap<K, V> {
    fn structural_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, a)| other.get(key).is_some_and(|b| equals(a, b)))
    }
}

impl<K: Eq + Hash, V: StructuralEq, S: BuildHasher> StructuralEq for HashMap<K, V, S> {
    fn structural_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, a)| other.get(key).is_some_and(|b| equals(a, b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Gains {
        p: f64,
        limits: Vec<i32>,
        label: Option<String>,
    }

    impl_structural_eq!(Gains { p, limits, label });

    fn gains() -> Gains {
        Gains {
            p: 0.02,
            limits: vec![-45, 45],
            label: Some("pitch".to_string()),
        }
    }

    #[test]
    fn test_scalars() {
        assert!(equals(&1.5_f64, &1.5));
        assert!(!equals(&1.5_f64, &2.5));
        assert!(equals(&0.0_f64, &-0.0));
        assert!(equals(&f64::NAN, &f64::NAN));
        assert!(equals("abc", "abc"));
        assert!(!equals(&true, &false));
    }

    #[test]
    fn test_sequences() {
        assert!(equals(&vec![1, 2, 3], &vec![1, 2, 3]));
        assert!(!equals(&vec![1, 2, 3], &vec![1, 2]));
        assert!(equals(&[[1, 2], [3, 4]], &[[1, 2], [3, 4]]));
        assert!(equals::<Vec<f64>>(&vec![], &vec![]));
    }

    #[test]
    fn test_option_is_presence_sensitive() {
        assert!(equals::<Option<i32>>(&None, &None));
        assert!(!equals(&None, &Some(1)));
        assert!(!equals(&Some(1), &None));
        assert!(equals(&Some(vec![1.0]), &Some(vec![1.0])));
    }

    #[test]
    fn test_maps() {
        let a: BTreeMap<&str, i32> = [("a", 1)].into_iter().collect();
        let b: BTreeMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
        assert!(!equals(&a, &b));
        assert!(!equals(&b, &a));

        let x: HashMap<String, Vec<i32>> = [("a".to_string(), vec![1, 2])].into_iter().collect();
        let y = x.clone();
        assert!(equals(&x, &y));
    }

    #[test]
    fn test_record_macro() {
        let a = gains();
        assert!(equals(&a, &a));
        assert!(equals(&a, &gains()));

        let mut b = gains();
        b.limits[1] = 40;
        assert!(!equals(&a, &b));

        let mut c = gains();
        c.label = None;
        assert!(!equals(&a, &c));
        assert!(!equals(&c, &a));
    }
}
