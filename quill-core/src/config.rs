use std::str::FromStr;

use anyhow::Context;
use chrono::Duration;

use crate::api::PageRequest;

pub const EDIT_WINDOW_VAR: &str = "QUILL_EDIT_WINDOW_SECS";
pub const MAX_REPLY_DEPTH_VAR: &str = "QUILL_MAX_REPLY_DEPTH";
pub const PREVIEW_LEN_VAR: &str = "QUILL_PREVIEW_LEN";
pub const PAGE_SIZE_VAR: &str = "QUILL_PAGE_SIZE";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// How long after creation an author may still edit their comment
    pub edit_window: Duration,

    /// Replies are offered down to this depth, roots being at depth 0
    pub max_reply_depth: usize,

    /// Number of characters of a comment quoted in notifications
    pub preview_len: usize,

    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            edit_window: Duration::minutes(5),
            max_reply_depth: 2,
            preview_len: 20,
            page_size: crate::api::DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Config> {
        Config::from_lookup(|var| std::env::var(var).ok())
    }

    /// Unset variables keep their default value, set-but-invalid ones are an error
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Config> {
        fn parse<T, L>(lookup: &L, var: &str) -> anyhow::Result<Option<T>>
        where
            L: Fn(&str) -> Option<String>,
            T: FromStr,
            T::Err: std::error::Error + Send + Sync + 'static,
        {
            lookup(var)
                .map(|v| {
                    v.trim()
                        .parse::<T>()
                        .with_context(|| format!("parsing {var} value {v:?}"))
                })
                .transpose()
        }

        let mut res = Config::default();
        if let Some(secs) = parse::<u32, _>(&lookup, EDIT_WINDOW_VAR)? {
            res.edit_window = Duration::seconds(i64::from(secs));
        }
        if let Some(depth) = parse(&lookup, MAX_REPLY_DEPTH_VAR)? {
            res.max_reply_depth = depth;
        }
        if let Some(len) = parse(&lookup, PREVIEW_LEN_VAR)? {
            res.preview_len = len;
        }
        if let Some(size) = parse(&lookup, PAGE_SIZE_VAR)? {
            res.page_size = size;
        }
        tracing::debug!(config = ?res, "loaded configuration");
        Ok(res)
    }

    pub fn first_page(&self) -> PageRequest {
        PageRequest::new(1, self.page_size)
    }
}
