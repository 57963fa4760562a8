//! Property tests for rectangle arithmetic.

use proptest::prelude::*;
use workbench_core::geometry::{Insets, Rect, Size};

fn rect() -> impl Strategy<Value = Rect> {
    (-500i32..500, -500i32..500, -500i32..2_000, -500i32..2_000)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn insets() -> impl Strategy<Value = Insets> {
    (-50i32..200, -50i32..200, -50i32..200, -50i32..200)
        .prop_map(|(t, r, b, l)| Insets::new(t, r, b, l))
}

fn size() -> impl Strategy<Value = Size> {
    (-300i32..300, -300i32..300).prop_map(Size::from)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn resized_by_composes_additively(r in rect(), a in size(), b in size()) {
        let stepwise = r.resized_by(a).resized_by(b);
        let combined = r.resized_by(Size::new(a.width + b.width, a.height + b.height));
        prop_assert_eq!(stepwise, combined);
        prop_assert_eq!((stepwise.x, stepwise.y), (r.x, r.y));
    }

    #[test]
    fn nested_inner_equals_summed_insets(r in rect(), a in insets(), b in insets()) {
        let summed = Insets::new(
            a.top + b.top,
            a.right + b.right,
            a.bottom + b.bottom,
            a.left + b.left,
        );
        prop_assert_eq!(r.inner(a).inner(b), r.inner(summed));
    }

    #[test]
    fn inner_moves_each_edge_by_its_inset(r in rect(), i in insets()) {
        let inner = r.inner(i);
        prop_assert_eq!(inner.x, r.x + i.left);
        prop_assert_eq!(inner.y, r.y + i.top);
        prop_assert_eq!(inner.max_x(), r.max_x() - i.right);
        prop_assert_eq!(inner.max_y(), r.max_y() - i.bottom);
        prop_assert_eq!(r.width - inner.width, i.horizontal_sum());
        prop_assert_eq!(r.height - inner.height, i.vertical_sum());
    }

    #[test]
    fn from_size_sits_at_origin(s in size()) {
        let r = Rect::from_size(s);
        prop_assert_eq!((r.x, r.y, r.width, r.height), (0, 0, s.width, s.height));
    }
}
