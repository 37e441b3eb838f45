//! Trusted sequential reference for ordered inclusion.

use crate::compare::{Compare, CrossLess};
use crate::value::Convert;

/// Returns true when every element of `second` is matched by a distinct,
/// equivalent element of `first`.
///
/// Both ranges must be sorted under `comp`. Duplicates count: `[1, 1, 2]`
/// includes `[1, 1]` but not `[1, 1, 1]`. An empty `second` is included in
/// anything; a non-empty `second` is never included in an empty `first`.
///
/// ```
/// use includes_conformance::algorithm::reference;
/// use includes_conformance::compare::less;
///
/// let first = [0.0, 2.0, 2.0, 5.0];
/// assert!(reference::includes(&first, &[2.0, 2.0], less::<f64>));
/// assert!(!reference::includes(&first, &[2.0, 2.0, 2.0], less::<f64>));
/// ```
pub fn includes<'a, A, B, I1, I2, C>(first: I1, second: I2, comp: C) -> bool
where
    A: Convert<B> + 'a,
    B: Convert<A> + 'a,
    I1: IntoIterator<Item = &'a A>,
    I2: IntoIterator<Item = &'a B>,
    C: Compare<A, B>,
{
    let mut less = CrossLess::new(comp);
    let mut first = first.into_iter();
    let mut current = first.next();
    for b in second {
        loop {
            let Some(a) = current else {
                return false;
            };
            if less.second_first(b, a) {
                return false;
            }
            current = first.next();
            if !less.first_second(a, b) {
                break;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::less;
    use crate::value::Num;

    fn init_test(name: &str) {
        crate::test_utils::init_test_logging();
        crate::test_phase!(name);
    }

    #[test]
    fn empty_ranges() {
        init_test("empty_ranges");
        let empty: [f64; 0] = [];
        let r = includes(&empty, &empty, less::<f64>);
        crate::assert_with_log!(r, "empty in empty", true, r);
        let r = includes(&[1.0], &empty, less::<f64>);
        crate::assert_with_log!(r, "empty in any", true, r);
        let r = includes(&empty, &[1.0], less::<f64>);
        crate::assert_with_log!(!r, "non-empty in empty", false, r);
        crate::test_complete!("empty_ranges");
    }

    #[test]
    fn multiplicity_is_respected() {
        init_test("multiplicity_is_respected");
        let first = [1.0, 1.0, 2.0];
        let r = includes(&first, &[1.0, 1.0], less::<f64>);
        crate::assert_with_log!(r, "[1,1,2] includes [1,1]", true, r);
        let r = includes(&first, &[1.0, 1.0, 1.0], less::<f64>);
        crate::assert_with_log!(!r, "[1,1,2] excludes [1,1,1]", false, r);
        let r = includes(&first, &[3.0], less::<f64>);
        crate::assert_with_log!(!r, "beyond the end", false, r);
        let r = includes(&first, &[0.0], less::<f64>);
        crate::assert_with_log!(!r, "before the start", false, r);
        crate::test_complete!("multiplicity_is_respected");
    }

    #[test]
    fn cross_type_matches_same_type() {
        init_test("cross_type_matches_same_type");
        let first_f = [0.0, 2.0, 2.0, 5.0];
        let first_n = [0_i64, 2, 2, 5].map(Num::new);
        let comp = |x: &Num<i64>, y: &Num<i32>| x < y;
        let cases: [&[i32]; 5] = [&[2, 2], &[2, 2, 2], &[0, 5], &[1], &[]];
        for second in cases {
            let second_f: Vec<f64> = second.iter().map(|&v| f64::from(v)).collect();
            let second_n: Vec<Num<i32>> = second.iter().map(|&v| Num::new(v)).collect();
            let same = includes(&first_f, &second_f, less::<f64>);
            let cross = includes(&first_n, &second_n, comp);
            crate::assert_with_log!(same == cross, "scenarios agree", same, cross);
        }
        crate::test_complete!("cross_type_matches_same_type");
    }
}
