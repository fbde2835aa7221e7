use std::{fmt, num::ParseIntError, str::FromStr};

/// Numeric primary key of a stored record.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Id(i64);

impl Id {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for Id {
    fn from(from: i64) -> Self {
        Self(from)
    }
}

impl From<Id> for i64 {
    fn from(from: Id) -> Self {
        from.0
    }
}

impl FromStr for Id {
    type Err = ParseIntError;
    fn from_str(s: &str) -> Result<Id, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}
