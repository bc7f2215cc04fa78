use std::{fmt, num::NonZeroUsize, str::FromStr};

use crate::Error;

/// Number of unknowns in a system, as typed in by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SystemSize(NonZeroUsize);

impl SystemSize {
    pub fn new(n: usize) -> Option<Self> {
        NonZeroUsize::new(n).map(SystemSize)
    }

    /// Parses a positive integer, ignoring surrounding whitespace.
    pub fn parse(text: &str) -> Result<Self, Error> {
        text.trim()
            .parse::<usize>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| Error::InvalidSize {
                value: text.to_string(),
            })
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl FromStr for SystemSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SystemSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(SystemSize::parse("3").unwrap().get(), 3);
        assert_eq!(SystemSize::parse(" 12\n").unwrap().get(), 12);
        assert_eq!("1".parse::<SystemSize>().unwrap(), SystemSize::new(1).unwrap());
    }

    #[test]
    fn test_parse_invalid() {
        for text in ["", "0", "-2", "2.5", "three", "1/2"] {
            let err = SystemSize::parse(text).unwrap_err();
            assert_eq!(err.to_string(), format!("'size' has invalid input: '{text}'"));
        }
    }
}
