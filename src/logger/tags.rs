/// Log tags identify the subsystem a message comes from
///
/// Each tag maps to a `--debug-<key>` flag that enables its debug output.
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LogTag {
    System,
    Config,
    Api,
    Form,
}

impl LogTag {
    /// Key used in --debug-<key> flags
    pub fn to_debug_key(&self) -> String {
        match self {
            LogTag::System => "system".to_string(),
            LogTag::Config => "config".to_string(),
            LogTag::Api => "api".to_string(),
            LogTag::Form => "form".to_string(),
        }
    }

    /// Uncolored label
    pub fn to_plain_string(&self) -> String {
        match self {
            LogTag::System => "SYSTEM".to_string(),
            LogTag::Config => "CONFIG".to_string(),
            LogTag::Api => "API".to_string(),
            LogTag::Form => "FORM".to_string(),
        }
    }

    /// Tags that have a dedicated debug flag
    pub fn all_known() -> [LogTag; 4] {
        [LogTag::System, LogTag::Config, LogTag::Api, LogTag::Form]
    }
}

impl fmt::Display for LogTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_plain_string())
    }
}
