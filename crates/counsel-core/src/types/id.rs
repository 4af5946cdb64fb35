//! Newtype wrappers around `i64` for all domain entity identifiers.
//!
//! The backend issues numeric identifiers; distinct wrapper types prevent
//! accidentally passing a `StudentId` where a `CounselId` is expected,
//! which matters for endpoints like participant registration that take
//! both in the same path.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapper around `i64`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Create an identifier from a raw numeric value.
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            /// Return the inner numeric value.
            pub fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>().map(Self)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for a counseling session.
    CounselId
);

define_id!(
    /// Unique identifier for a student.
    StudentId
);

define_id!(
    /// Unique identifier for a faculty member.
    FacultyId
);

define_id!(
    /// Unique identifier for a department.
    DepartmentId
);

define_id!(
    /// Unique identifier for a session participant record.
    ParticipantId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(CounselId::new(42).to_string(), "42");
    }

    #[test]
    fn test_from_str() {
        let id: StudentId = "17".parse().expect("should parse");
        assert_eq!(id, StudentId::new(17));
        assert!("not-a-number".parse::<StudentId>().is_err());
    }

    #[test]
    fn test_serde_transparent() {
        let id = CounselId::new(7);
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "7");
        let parsed: CounselId = serde_json::from_str("7").expect("deserialize");
        assert_eq!(id, parsed);
    }
}
