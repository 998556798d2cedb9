/// Turns a macro attribute identifier into its HTML name: `aria_label` becomes
/// `aria-label` and `r#type` becomes `type`.
pub fn attr_name(raw: &str) -> String {
    raw.trim_start_matches("r#").replace('_', "-")
}

#[macro_export]
macro_rules! node {
    ($kind:ident $(, $attr:ident = $val:expr )* => $($child:expr),+ $(,)?) => {
        $crate::dom::Element::new(stringify!($kind))
            $(.attr($crate::macros::attr_name(stringify!($attr)), $val))*
            $(.child($child))+
    };

    ($kind:ident $(, $attr:ident = $val:expr )* $(,)?) => {
        $crate::dom::Element::new(stringify!($kind))
            $(.attr($crate::macros::attr_name(stringify!($attr)), $val))*
    };
}

#[cfg(test)]
mod tests {
    use super::attr_name;

    #[test]
    fn attr_names() {
        assert_eq!(attr_name("href"), "href");
        assert_eq!(attr_name("data_toggle"), "data-toggle");
        assert_eq!(attr_name("r#type"), "type");
    }
}
