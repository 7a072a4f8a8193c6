/// Parses a record id from a path segment.
///
/// Ids are opaque to clients, so anything that is not a positive integer simply
/// identifies no record.
///
/// # Arguments
/// - `value` - The path segment to parse
///
/// # Returns
/// - `Some(i32)` - A syntactically valid id
/// - `None` - The segment cannot name any record
pub fn parse_id(value: &str) -> Option<i32> {
    value.trim().parse::<i32>().ok().filter(|id| *id > 0)
}
