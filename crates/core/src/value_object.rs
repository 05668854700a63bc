//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. `Time`, `Workday` and `InvoicingPeriod` are value objects.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// derive a new value (e.g. `period.successor()`, `end - start`).
///
/// The trait requires:
/// - **Copy**: every value object in this workspace is a handful of integers
/// - **Eq**: value objects are compared by their attribute values
/// - **Debug**: value objects should be debuggable (logging, testing)
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Minutes(i32);
///
/// impl ValueObject for Minutes {}
///
/// assert_eq!(Minutes(15), Minutes(15));
/// ```
pub trait ValueObject: Copy + Eq + core::fmt::Debug {}
