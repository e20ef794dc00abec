/*! Defines the variable symbol ['V'] for making propositional formulae.

['V']: crate::syntax::V
*/
use std::fmt;

/// Represents an atomic (propositional) variable with a single-character name.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct V(pub char);

impl V {
    /// Returns true if `c` can be the name of a variable, that is, an ASCII letter.
    #[inline(always)]
    pub fn is_name(c: char) -> bool {
        c.is_ascii_alphabetic()
    }

    /// Returns the name of the receiver.
    #[inline(always)]
    pub fn name(&self) -> char {
        self.0
    }
}

impl From<char> for V {
    fn from(name: char) -> Self {
        Self(name)
    }
}

impl fmt::Display for V {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for V {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}
