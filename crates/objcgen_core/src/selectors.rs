//! Canonical initializer selectors.
//!
//! A constructor is a *designated initializer* when subclasses may rely on it being the one initializer that fully
//! sets up an instance. For ordinary types that is only `init`; boxed-numeric types (subtypes of `NSNumber`) also
//! treat the `initWith<Numeric>:` family as designated.

/// The canonical no-argument initializer selector.
pub const DEFAULT_INITIALIZER: &str = "init";

/// `NSNumber` initializers that are designated on boxed-numeric subtypes.
pub const NUMBER_DESIGNATED_INITIALIZERS: &[&str] = &[
    "initWithBool:",
    "initWithChar:",
    "initWithDouble:",
    "initWithFloat:",
    "initWithInt:",
    "initWithInteger:",
    "initWithLong:",
    "initWithLongLong:",
    "initWithShort:",
    "initWithUnsignedChar:",
    "initWithUnsignedInt:",
    "initWithUnsignedInteger:",
    "initWithUnsignedLong:",
    "initWithUnsignedLongLong:",
    "initWithUnsignedShort:",
];

/// Check whether `selector` names a designated initializer on a type.
///
/// ## Parameters
/// - `selector`: the constructor's selector.
/// - `boxed_numeric`: whether the declaring type is a boxed-numeric subtype.
///
/// ## Notes
/// - This only inspects the selector; callers must also require the method to be a constructor.
pub fn is_designated_selector(selector: &str, boxed_numeric: bool) -> bool {
    selector == DEFAULT_INITIALIZER || (boxed_numeric && NUMBER_DESIGNATED_INITIALIZERS.contains(&selector))
}
