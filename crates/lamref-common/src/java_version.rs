//! Java language level of the file being checked.
//!
//! The level is supplied by the host (it is never detected from the source).
//! An unset level is treated optimistically: checks that need a newer language
//! level still run, and their messages carry a note saying the level was assumed.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

const JAVA_7_COMPATIBILITY_MESSAGE: &str = " (sourceVersion not set. Assuming 7 or greater.)";
const JAVA_8_COMPATIBILITY_MESSAGE: &str = " (sourceVersion not set. Assuming 8 or greater.)";

/// Java source level, e.g. `8` for Java 8 (`"1.8"` or `"8"` in configuration).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct JavaVersion {
    major: Option<u32>,
}

impl JavaVersion {
    /// Level not configured by the host.
    pub const NOT_SET: JavaVersion = JavaVersion { major: None };

    pub const fn new(major: u32) -> JavaVersion {
        JavaVersion { major: Some(major) }
    }

    pub const fn major(&self) -> Option<u32> {
        self.major
    }

    pub const fn is_not_set(&self) -> bool {
        self.major.is_none()
    }

    fn not_set_or_at_least(&self, major: u32) -> bool {
        match self.major {
            None => true,
            Some(v) => v >= major,
        }
    }

    pub fn is_java7_compatible(&self) -> bool {
        self.not_set_or_at_least(7)
    }

    /// Lambdas and method references are available from Java 8 on.
    pub fn is_java8_compatible(&self) -> bool {
        self.not_set_or_at_least(8)
    }

    pub fn java7_compatibility_message(&self) -> &'static str {
        if self.is_not_set() {
            JAVA_7_COMPATIBILITY_MESSAGE
        } else {
            ""
        }
    }

    /// Suffix appended to messages of checks that require Java 8.
    pub fn java8_compatibility_message(&self) -> &'static str {
        if self.is_not_set() {
            JAVA_8_COMPATIBILITY_MESSAGE
        } else {
            ""
        }
    }
}

impl fmt::Display for JavaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.major {
            Some(v) => write!(f, "{v}"),
            None => write!(f, "<not set>"),
        }
    }
}

/// Error returned when a configured source level cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidJavaVersion(pub String);

impl fmt::Display for InvalidJavaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid Java source version '{}'", self.0)
    }
}

impl std::error::Error for InvalidJavaVersion {}

impl FromStr for JavaVersion {
    type Err = InvalidJavaVersion;

    /// Accepts `"8"`, `"1.8"`, `"11"`, `"17.0.2"`. Legacy `1.x` strings map to `x`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut parts = trimmed.split('.');
        let parse = |part: Option<&str>| -> Result<u32, InvalidJavaVersion> {
            part.and_then(|p| p.parse::<u32>().ok())
                .ok_or_else(|| InvalidJavaVersion(s.to_string()))
        };

        let first = parse(parts.next())?;
        let major = if first == 1 {
            parse(parts.next())?
        } else {
            first
        };
        if major == 0 {
            return Err(InvalidJavaVersion(s.to_string()));
        }
        Ok(JavaVersion::new(major))
    }
}

impl TryFrom<String> for JavaVersion {
    type Error = InvalidJavaVersion;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
#[path = "../tests/java_version_tests.rs"]
mod tests;
