/// Numeric helpers.
///
/// Integer routines that the standard library does not provide in stable,
/// checked form, such as floor division.
pub mod num;
