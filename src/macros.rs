#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! rule {
    (
        name: $name:expr,
        kind: $kind:expr,
        prod: |$receipt:ident| -> $ret_ty:ty $body_expr:block
        $(,)?
    ) => {{
        $crate::Rule {
            name: $name,
            kind: $kind,
            production: Box::new(move |$receipt: &$crate::Receipt| {
                use $crate::IntoContributions;
                let result: $ret_ty = $body_expr;
                result.into_contributions()
            }),
        }
    }};
}
