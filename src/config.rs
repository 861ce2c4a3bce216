use crate::model::{Channel, KindSet};

pub const DEFAULT_USER: &str = "Current User";
pub const DEFAULT_DATE: &str = "Current Date";

/// Who is entering scores. Supplied by the host on load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserContext {
    pub user: String,
    pub date: String,
    pub user_type: Channel,
}

impl Default for UserContext {
    fn default() -> Self {
        Self {
            user: DEFAULT_USER.to_string(),
            date: DEFAULT_DATE.to_string(),
            user_type: Channel::Staff,
        }
    }
}

impl UserContext {
    /// Blank or missing host values fall back to the defaults; an unknown
    /// user type falls back to Staff.
    pub fn from_host(user: Option<&str>, date: Option<&str>, user_type: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            user: non_blank(user).unwrap_or(defaults.user),
            date: non_blank(date).unwrap_or(defaults.date),
            user_type: user_type
                .and_then(|t| t.parse::<Channel>().ok())
                .unwrap_or(defaults.user_type),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridConfig {
    pub kinds: KindSet,
    pub user: UserContext,
}

impl GridConfig {
    pub fn with_kinds(mut self, kinds: KindSet) -> Self {
        self.kinds = kinds;
        self
    }

    pub fn with_user(mut self, user: UserContext) -> Self {
        self.user = user;
        self
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
