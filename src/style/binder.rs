//! Brand class derivation.
//!
//! Every branded widget maps its `brand` and `outline` props to at most one
//! CSS class. [`derive_class`] is the pure mapping; [`bind_brand_class`] wires it
//! to props so the class is recomputed on every change.

use crate::reactive::{create_derived, Derived, Prop};

/// Compute the brand class for `brand` under `prefix`.
///
/// Returns `None` for an empty brand, `"<prefix>-<brand>"` otherwise, or
/// `"<prefix>-outline-<brand>"` when `outline` is set.
pub fn derive_class(brand: &str, outline: bool, prefix: &str) -> Option<String> {
    if brand.is_empty() {
        return None;
    }
    Some(if outline {
        format!("{prefix}-outline-{brand}")
    } else {
        format!("{prefix}-{brand}")
    })
}

/// Bind a brand class to `brand` and `outline` props.
///
/// Widgets without outline support pass `None` for `outline`.
pub fn bind_brand_class(
    prefix: &'static str,
    brand: Prop<String>,
    outline: Option<Prop<bool>>,
) -> Derived<Option<String>> {
    create_derived(move || {
        let outline = outline.is_some_and(|o| o.get());
        brand.with(|b| derive_class(b, outline, prefix))
    })
}
