use crate::terminal::StyleId;

pub(crate) const ASCII_ART: &str = r#"
       ┌───────────────────────────┐
       │  P → Q    P               │
       │  ─────────────  validity  │
       │        ∴ Q            0.1 │
       └───────────────────────────┘
"#;
pub(crate) const STYLE_LOGO: StyleId = 0;
pub(crate) const STYLE_INFO: StyleId = 1;
pub(crate) const STYLE_ARGUMENT: StyleId = 2;
pub(crate) const STYLE_VALID: StyleId = 3;
pub(crate) const STYLE_INVALID: StyleId = 4;

/// Arguments with more atoms than this take noticeably long to check.
pub(crate) const ATOMS_WARNING_THRESHOLD: usize = 20;
