//! Property-based tests for the placement predicate.

use core_window::{Error, Window};
use proptest::prelude::*;

proptest! {
    // An add succeeds exactly when the footprint lies within the interior.
    #[test]
    fn add_succeeds_iff_footprint_fits(
        x in 0u16..40,
        y in 0u16..40,
        rows in 1u16..40,
        cols in 1u16..40,
        border in proptest::bool::ANY,
    ) {
        let mut parent = Window::new(0, 0, 24, 30, border);
        let fits = x as u32 + cols as u32 <= parent.interior_cols() as u32
            && y as u32 + rows as u32 <= parent.interior_rows() as u32;

        let err = parent.add("probe", Window::new(x, y, rows, cols, false)).err();
        match err {
            None => prop_assert!(fits),
            Some(Error::DoesNotFit { .. }) => {
                prop_assert!(!fits);
                prop_assert_eq!(parent.child_count(), 0);
            }
            Some(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    // Footprints flush against the bottom-right interior corner always fit.
    #[test]
    fn exact_fit_always_succeeds(rows in 1u16..=24, cols in 1u16..=30) {
        let mut parent = Window::new(0, 0, 24, 30, false);
        let x = 30 - cols;
        let y = 24 - rows;
        let err = parent.add("probe", Window::new(x, y, rows, cols, false)).err();
        prop_assert!(err.is_none());
    }

    // A one-cell overhang in either axis always fails.
    #[test]
    fn one_cell_overhang_always_fails(rows in 1u16..=24, cols in 1u16..=30, horizontal in proptest::bool::ANY) {
        let mut parent = Window::new(0, 0, 24, 30, false);
        let (x, y) = if horizontal {
            (30 - cols + 1, 24 - rows)
        } else {
            (30 - cols, 24 - rows + 1)
        };
        let err = parent.add("probe", Window::new(x, y, rows, cols, false)).err();
        let does_not_fit = matches!(err, Some(Error::DoesNotFit { .. }));
        prop_assert!(does_not_fit);
        prop_assert_eq!(parent.child_count(), 0);
    }

    // Names stay unique regardless of what they are.
    #[test]
    fn duplicate_names_always_rejected(name in "[a-z]{1,8}") {
        let mut parent = Window::new(0, 0, 10, 10, false);
        parent.add(&name, Window::new(0, 0, 1, 1, false)).map(|_| ()).unwrap();
        let err = parent.add(&name, Window::new(1, 1, 1, 1, false)).err();
        prop_assert!(matches!(err, Some(Error::DuplicateName(_))));
        prop_assert_eq!(parent.child_count(), 1);
    }
}
