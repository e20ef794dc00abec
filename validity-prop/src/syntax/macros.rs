/// Creates a variable symbol from a single-letter identifier.
///
/// **Example**:
/// ```rust
/// use validity_prop::{syntax::V, v};
///
/// assert_eq!(V::from('P'), v!(P));
/// ```
#[macro_export]
macro_rules! v {
    ($v:ident) => {{
        let mut name = stringify!($v).chars();
        match (name.next(), name.next()) {
            (Some(c), None) => $crate::syntax::V::from(c),
            _ => panic!("variable names are single letters: `{}`", stringify!($v)),
        }
    }};
}

/// Parses a string literal into a [`Statement`] with the standard operator symbols and panics
/// if the string is not a well-formed formula.
///
/// [`Statement`]: crate::syntax::Statement
#[macro_export]
macro_rules! stmt {
    ($s:expr) => {
        $crate::parser::Parser::default()
            .parse($s)
            .unwrap_or_else(|e| panic!("invalid formula `{}`: {}", $s, e))
    };
}

/// Builds an [`Assignment`] from `variable => value` pairs.
///
/// [`Assignment`]: crate::semantics::Assignment
#[macro_export]
macro_rules! assignment {
    ($($v:ident => $b:expr),* $(,)?) => {{
        let mut assignment = $crate::semantics::Assignment::new();
        $(assignment.assign($crate::v!($v), $b);)*
        assignment
    }};
}
