pub mod detail;
pub mod import;
pub mod list;
pub mod videos;

/// Route ids arrive as strings; anything that is not a number is rejected
/// before a request is made.
pub fn parse_channel_id(id: &str) -> Result<i64, String> {
    id.trim()
        .parse::<i64>()
        .map_err(|_| "無効なチャンネルIDです".to_string())
}
