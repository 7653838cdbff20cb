use std::{io::Read, path::PathBuf};

use anyhow::Context;
use quill_core::{
    api::{Comment, CommentStatus, PageRequest, Role, Time, User, UserId, Uuid},
    moderation_page, CommentTree, Config, Policy,
};

#[derive(structopt::StructOpt)]
struct Opt {
    /// Override the edit window, in seconds
    #[structopt(long)]
    edit_window_secs: Option<u32>,

    /// Override the depth below which replies are allowed
    #[structopt(long)]
    max_reply_depth: Option<usize>,

    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(structopt::StructOpt)]
enum Command {
    /// Print the thread built from a JSON list of comments
    Tree {
        /// JSON file with the comments of one post, `-` for stdin
        input: PathBuf,

        #[structopt(long)]
        pretty: bool,
    },

    /// List what a user may do with each displayed comment
    Perms {
        /// JSON file with the comments of one post, `-` for stdin
        input: PathBuf,

        #[structopt(long)]
        user: Uuid,

        #[structopt(long)]
        admin: bool,

        /// RFC 3339 timestamp, defaults to the current time
        #[structopt(long)]
        now: Option<String>,
    },

    /// Print a page of the moderation list
    Moderation {
        /// JSON file with comments, `-` for stdin
        input: PathBuf,

        /// PENDING, APPROVED or REJECTED
        #[structopt(long)]
        status: Option<String>,

        #[structopt(long, default_value = "1")]
        page: usize,

        #[structopt(long)]
        limit: Option<usize>,
    },
}

fn read_comments(input: &PathBuf) -> anyhow::Result<Vec<Comment>> {
    let data = if input.as_os_str() == "-" {
        let mut data = String::new();
        std::io::stdin()
            .read_to_string(&mut data)
            .context("reading comments from stdin")?;
        data
    } else {
        std::fs::read_to_string(input).with_context(|| format!("reading {input:?}"))?
    };
    let comments: Vec<Comment> =
        serde_json::from_str(&data).with_context(|| format!("parsing comments from {input:?}"))?;
    tracing::debug!(num_comments = comments.len(), "read comments");
    Ok(comments)
}

fn parse_time(t: &str) -> anyhow::Result<Time> {
    Ok(chrono::DateTime::parse_from_rfc3339(t)
        .with_context(|| format!("parsing {t:?} as an RFC 3339 timestamp"))?
        .with_timezone(&chrono::Utc))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opt = <Opt as structopt::StructOpt>::from_args();

    let mut cfg = Config::from_env().context("loading configuration from environment")?;
    if let Some(secs) = opt.edit_window_secs {
        cfg.edit_window = chrono::Duration::seconds(i64::from(secs));
    }
    if let Some(depth) = opt.max_reply_depth {
        cfg.max_reply_depth = depth;
    }
    let policy = Policy::from_config(&cfg);

    match opt.cmd {
        Command::Tree { input, pretty } => {
            let forest = CommentTree::for_display(read_comments(&input)?).into_forest();
            let out = match pretty {
                true => serde_json::to_string_pretty(&forest),
                false => serde_json::to_string(&forest),
            }
            .context("serializing comment tree")?;
            println!("{out}");
        }
        Command::Perms {
            input,
            user,
            admin,
            now,
        } => {
            let now = match now {
                Some(t) => parse_time(&t)?,
                None => chrono::Utc::now(),
            };
            let user = User {
                id: UserId(user),
                name: String::new(),
                role: match admin {
                    true => Role::Admin,
                    false => Role::User,
                },
            };
            let tree = CommentTree::for_display(read_comments(&input)?);
            for t in tree.iter() {
                let c = t.comment();
                println!(
                    "{:indent$}{} edit={} delete={} reply={}",
                    "",
                    c.id.0,
                    policy.can_edit(c, user.id, now),
                    policy.can_delete(c, &user),
                    policy.can_reply(t.depth()),
                    indent = 2 * t.depth(),
                );
            }
        }
        Command::Moderation {
            input,
            status,
            page,
            limit,
        } => {
            let status = status
                .map(|s| s.parse::<CommentStatus>())
                .transpose()
                .context("parsing --status")?;
            let comments = read_comments(&input)?;
            let req = PageRequest::new(page, limit.unwrap_or(cfg.page_size));
            let (page, info) = moderation_page(&comments, status, req);
            for c in page {
                println!("{}\t{}\t{}\t{:?}", c.id.0, c.status, c.created_at, c.content);
            }
            eprintln!(
                "page {}/{} ({} comments)",
                info.page, info.pages, info.total
            );
        }
    }

    Ok(())
}
