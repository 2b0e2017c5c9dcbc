/// Date format used by the wire documents (`blackoutDate` fields).
///
/// Existing consumers parse this exact rendering; do not change it.
pub const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";
