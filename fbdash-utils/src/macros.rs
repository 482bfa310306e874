/// A `&'static Selector` parsed on first use.
///
/// Panics on first use if the selector is not valid CSS.
#[macro_export]
macro_rules! selector {
    ($css: literal) => {{
        static SELECTOR: $crate::once_cell::sync::Lazy<$crate::scraper::Selector> =
            $crate::once_cell::sync::Lazy::new(|| {
                $crate::scraper::Selector::parse($css)
                    .unwrap_or_else(|e| panic!("Invalid selector {:?}: {e}", $css))
            });
        &*SELECTOR
    }};
}
