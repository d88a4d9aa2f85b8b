use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref CHANNEL_ID: Regex = Regex::new(r"^UC[a-zA-Z0-9_-]{22}$").unwrap();
    static ref CHANNEL_URL: Regex =
        Regex::new(r"youtube\.com/channel/(UC[a-zA-Z0-9_-]{22})").unwrap();
    static ref HANDLE: Regex = Regex::new(r"^@([a-zA-Z0-9_.-]+)$").unwrap();
    static ref HANDLE_URL: Regex = Regex::new(r"youtube\.com/@([a-zA-Z0-9_.-]+)").unwrap();
    static ref LEGACY_URL: Regex =
        Regex::new(r"youtube\.com/(?:c|user)/([a-zA-Z0-9_-]+)").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("チャンネルURLまたはIDを入力してください")]
    Empty,
}

/// What the import form's text looks like. The backend resolves it; this is
/// only used to reject empty input and to show a hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelReference {
    ChannelId(String),
    Handle(String),
    LegacyName(String),
    Unrecognized(String),
}

impl ChannelReference {
    pub fn parse(input: &str) -> Result<Self, InputError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(InputError::Empty);
        }

        if CHANNEL_ID.is_match(input) {
            return Ok(Self::ChannelId(input.to_string()));
        }
        if let Some(caps) = CHANNEL_URL.captures(input) {
            return Ok(Self::ChannelId(caps[1].to_string()));
        }
        if let Some(caps) = HANDLE.captures(input).or_else(|| HANDLE_URL.captures(input)) {
            return Ok(Self::Handle(format!("@{}", &caps[1])));
        }
        if let Some(caps) = LEGACY_URL.captures(input) {
            return Ok(Self::LegacyName(caps[1].to_string()));
        }

        Ok(Self::Unrecognized(input.to_string()))
    }

    pub fn hint(&self) -> String {
        match self {
            Self::ChannelId(id) => format!("チャンネルID: {id}"),
            Self::Handle(handle) => format!("ハンドル: {handle}"),
            Self::LegacyName(name) => format!("カスタムURL: {name}"),
            Self::Unrecognized(_) => "形式を判別できません（そのまま送信します）".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ID: &str = "UCabcdefghijklmnopqrstuv";

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(ChannelReference::parse(""), Err(InputError::Empty));
        assert_eq!(ChannelReference::parse("   \t"), Err(InputError::Empty));
        assert_eq!(
            InputError::Empty.to_string(),
            "チャンネルURLまたはIDを入力してください"
        );
    }

    #[test]
    fn test_bare_channel_id() {
        assert_eq!(
            ChannelReference::parse(&format!("  {ID} ")),
            Ok(ChannelReference::ChannelId(ID.to_string()))
        );
    }

    #[test]
    fn test_channel_url() {
        let url = format!("https://www.youtube.com/channel/{ID}/videos");
        assert_eq!(
            ChannelReference::parse(&url),
            Ok(ChannelReference::ChannelId(ID.to_string()))
        );
    }

    #[test]
    fn test_handles() {
        assert_eq!(
            ChannelReference::parse("@hoge"),
            Ok(ChannelReference::Handle("@hoge".to_string()))
        );
        assert_eq!(
            ChannelReference::parse("https://www.youtube.com/@hoge.tv"),
            Ok(ChannelReference::Handle("@hoge.tv".to_string()))
        );
    }

    #[test]
    fn test_legacy_and_unknown() {
        assert_eq!(
            ChannelReference::parse("youtube.com/user/oldname"),
            Ok(ChannelReference::LegacyName("oldname".to_string()))
        );
        assert_eq!(
            ChannelReference::parse("somebody"),
            Ok(ChannelReference::Unrecognized("somebody".to_string()))
        );
        assert_eq!(
            ChannelReference::parse("UCtooshort").map(|r| r.hint()),
            Ok("形式を判別できません（そのまま送信します）".to_string())
        );
    }
}
