#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

mod macros;

pub mod errors;
pub mod lexer;

/// A point in a named source: 1-based line and column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub name: Rc<String>,
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(name: Rc<String>, line: u32, column: u32) -> Self {
        Location { name, line, column }
    }

    /// The first character of `name`.
    pub fn start(name: Rc<String>) -> Self {
        Location::new(name, 1, 1)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.name, self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::Location;

    #[test]
    fn test_location_display() {
        let loc = Location::new(Rc::new(String::from("main.imp")), 3, 14);
        assert_eq!(loc.to_string(), "main.imp:3:14");
    }

    #[test]
    fn test_location_start() {
        let loc = Location::start(Rc::new(String::from("shell")));
        assert_eq!((loc.line, loc.column), (1, 1));
        assert_eq!(loc.name.as_str(), "shell");
    }
}
