/// Shared types used across the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Backend primary key for students, courses, classrooms and memberships
pub type EntityId = i64;

/// Academic term; the backend expects the upper-case names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Term {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Term {
    pub const ALL: [Term; 4] = [Term::Spring, Term::Summer, Term::Fall, Term::Winter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Term::Spring => "SPRING",
            Term::Summer => "SUMMER",
            Term::Fall => "FALL",
            Term::Winter => "WINTER",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Term::Spring => "Spring",
            Term::Summer => "Summer",
            Term::Fall => "Fall",
            Term::Winter => "Winter",
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Term {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Term::ALL
            .into_iter()
            .find(|term| term.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown term '{}', expected one of SPRING, SUMMER, FALL, WINTER", s))
    }
}

/// Either every value or a single one, as in the list screens' drop-downs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T: PartialEq> Selector<T> {
    pub fn accepts(&self, value: Option<&T>) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(wanted) => value == Some(wanted),
        }
    }
}

impl<T: FromStr> FromStr for Selector<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("ALL") {
            Ok(Selector::All)
        } else {
            s.parse().map(Selector::Only)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_parses_case_insensitively() {
        assert_eq!("fall".parse::<Term>().unwrap(), Term::Fall);
        assert_eq!(" SPRING ".parse::<Term>().unwrap(), Term::Spring);
        assert!("autumn".parse::<Term>().is_err());
    }

    #[test]
    fn term_serializes_upper_case() {
        assert_eq!(serde_json::to_string(&Term::Winter).unwrap(), "\"WINTER\"");
    }

    #[test]
    fn selector_all_accepts_missing_values() {
        let all: Selector<Term> = "ALL".parse().unwrap();
        assert!(all.accepts(None));
        let fall: Selector<Term> = "FALL".parse().unwrap();
        assert!(fall.accepts(Some(&Term::Fall)));
        assert!(!fall.accepts(Some(&Term::Spring)));
        assert!(!fall.accepts(None));
    }
}
