/// Log tags identifying the subsystem a message comes from
///
/// Each tag maps to a `--debug-<key>` command-line flag that unlocks its
/// debug-level output.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LogTag {
    System,
    Config,
    Webserver,
    Quotes,
    Likes,
    Stocks,
}

impl LogTag {
    /// Key used by `--debug-<key>` / `--verbose-<key>` flags
    pub fn to_debug_key(&self) -> String {
        match self {
            LogTag::System => "system".to_string(),
            LogTag::Config => "config".to_string(),
            LogTag::Webserver => "webserver".to_string(),
            LogTag::Quotes => "quotes".to_string(),
            LogTag::Likes => "likes".to_string(),
            LogTag::Stocks => "stocks".to_string(),
        }
    }

    /// Uncolored label written in the tag column
    pub fn to_plain_string(&self) -> String {
        match self {
            LogTag::System => "SYSTEM".to_string(),
            LogTag::Config => "CONFIG".to_string(),
            LogTag::Webserver => "WEBSERVER".to_string(),
            LogTag::Quotes => "QUOTES".to_string(),
            LogTag::Likes => "LIKES".to_string(),
            LogTag::Stocks => "STOCKS".to_string(),
        }
    }
}

impl std::fmt::Display for LogTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_plain_string())
    }
}
