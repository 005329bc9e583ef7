/// Truncates a value to at most `limit` characters, on a char boundary.
pub fn excerpt(value: String, limit: usize) -> String {
    if value.chars().count() <= limit {
        return value;
    }
    value.chars().take(limit).collect()
}
