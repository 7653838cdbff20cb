use regex::Regex;

use crate::api::User;

lazy_static::lazy_static! {
    static ref MENTION: Regex = Regex::new(r"@([A-Za-z0-9_]+)").expect("mention regex is valid");
}

/// Names mentioned with `@name` in `content`, without the `@`, in order of
/// first appearance and without case-insensitive duplicates
pub fn mentions(content: &str) -> Vec<String> {
    let mut res: Vec<String> = Vec::new();
    for cap in MENTION.captures_iter(content) {
        let name = &cap[1];
        if !is_mentioned(&res, name) {
            res.push(String::from(name));
        }
    }
    res
}

pub fn is_mentioned(mentions: &[String], name: &str) -> bool {
    let name = name.to_lowercase();
    mentions.iter().any(|m| m.to_lowercase() == name)
}

/// Users among `candidates` whose name was mentioned
pub fn mentioned_users<'a>(mentions: &[String], candidates: &'a [User]) -> Vec<&'a User> {
    candidates
        .iter()
        .filter(|u| is_mentioned(mentions, &u.name))
        .collect()
}
