//! Language-level applicability of checks.

use lamref_common::JavaVersion;

/// Implemented by checks that only make sense from some Java level on.
///
/// The driver asks once per file, before scanning. A check that answers
/// `false` is not run on that file at all.
pub trait JavaVersionAware {
    fn is_compatible_with_java_version(&self, version: JavaVersion) -> bool;
}
