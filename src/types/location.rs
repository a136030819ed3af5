//! Grid coordinates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// A zero-based `(row, col)` coordinate into a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Formats as `row.col`, the key used for rendered cells.
impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.row, self.col)
    }
}

/// Parses the command-line form `row,col`.
impl FromStr for Location {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || GridError::Parse {
            message: format!("Invalid location: {}", s),
            help: Some("Use `row,col` with zero-based numbers, e.g. `4,5`".to_string()),
        };

        let (row, col) = s.split_once(',').ok_or_else(invalid)?;
        let row = row.trim().parse().map_err(|_| invalid())?;
        let col = col.trim().parse().map_err(|_| invalid())?;

        Ok(Self::new(row, col))
    }
}

impl From<(usize, usize)> for Location {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_key() {
        assert_eq!(Location::new(4, 5).to_string(), "4.5");
    }

    #[test]
    fn test_parse() {
        assert_eq!("4,5".parse::<Location>().unwrap(), Location::new(4, 5));
        assert_eq!(" 0 , 9 ".parse::<Location>().unwrap(), Location::new(0, 9));
    }

    #[test]
    fn test_parse_invalid() {
        assert!("4".parse::<Location>().is_err());
        assert!("a,b".parse::<Location>().is_err());
        assert!("-1,2".parse::<Location>().is_err());
    }

    #[test]
    fn test_ordering_is_row_major() {
        let mut locations = vec![Location::new(1, 0), Location::new(0, 2), Location::new(0, 1)];
        locations.sort();
        assert_eq!(
            locations,
            vec![Location::new(0, 1), Location::new(0, 2), Location::new(1, 0)]
        );
    }
}
