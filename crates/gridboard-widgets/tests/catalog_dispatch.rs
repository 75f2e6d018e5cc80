//! Catalog dispatch properties.

use gridboard_core::WidgetData;
use gridboard_widgets::{NumberBox, View, render};
use proptest::prelude::*;

proptest! {
    #[test]
    fn unknown_numbers_render_numbered_box(n in prop_oneof![i64::MIN..=0, 9i64..=i64::MAX]) {
        let widget = WidgetData::numbered("x", "Widget", n);
        prop_assert_eq!(render(&widget), View::Number(NumberBox::new(n)));
    }

    #[test]
    fn dispatch_depends_on_number_only(n in 1i64..=8, id in "[a-z0-9]{1,12}", title in ".{0,20}") {
        let a = WidgetData::numbered("fixed", "Fixed", n);
        let b = WidgetData::numbered(id, title, n);
        prop_assert_eq!(render(&a), render(&b));
    }

    #[test]
    fn every_view_has_text(n in -3i64..20) {
        let widget = WidgetData::numbered("x", "Widget", n);
        prop_assert!(!render(&widget).lines().is_empty());
    }
}
