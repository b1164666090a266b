//! Socialify CLI
//!
//! Terminal client for the Socialify API:
//! - Top users, latest and popular posts
//! - Per-user posts and per-post comments
//! - A feed that re-fetches the latest posts on a fixed interval
//! - Default config generation

use anyhow::{bail, Context};
use chrono::Local;
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;
use socialify::api::dto::{
    CommentsResponse, HealthResponse, LatestPostsResponse, PopularPostsResponse, PostsResponse,
    TopUsersResponse, UsersResponse,
};
use socialify::dataset::PostWithUser;
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

#[derive(Parser)]
#[command(name = "socialify")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Social analytics from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8080", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all users
    Users,

    /// Show users with the most posts
    Top,

    /// Show the newest posts
    Latest,

    /// Show the most-commented posts
    Popular,

    /// Show posts by a user
    Posts {
        /// User id
        user_id: String,
    },

    /// Show comments on a post
    Comments {
        /// Post id
        post_id: String,
    },

    /// Watch the newest posts, refreshing on an interval
    Feed {
        /// Refresh interval in seconds
        #[arg(short, long, default_value = "10")]
        interval: u64,
        /// Fetch once and exit
        #[arg(long)]
        once: bool,
    },

    /// Show server status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Thin wrapper over the HTTP client
struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Cannot connect to Socialify API at {}", self.base_url))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            bail!("Request to {} failed ({}): {}", url, status, text);
        }

        Ok(response.json().await?)
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let api = ApiClient::new(&cli.api_url);
    let json = cli.format == "json";

    match cli.command {
        Commands::Users => {
            let data: UsersResponse = api.get("/api/users").await?;
            if json {
                return print_json(&data);
            }

            println!("{:<8} {}", "ID", "Name");
            println!("{}", "-".repeat(30));
            for user in &data.users {
                println!("{:<8} {}", user.id, user.name);
            }
        }

        Commands::Top => {
            let data: TopUsersResponse = api.get("/api/users/top").await?;
            if json {
                return print_json(&data);
            }

            if data.top_users.is_empty() {
                println!("No users.");
                return Ok(());
            }

            println!("{:<5} {:<8} {:<20} {}", "Rank", "ID", "Name", "Posts");
            println!("{}", "-".repeat(42));
            for (rank, entry) in data.top_users.iter().enumerate() {
                println!(
                    "{:<5} {:<8} {:<20} {}",
                    rank + 1,
                    entry.user.id,
                    entry.user.name,
                    entry.post_count
                );
            }
        }

        Commands::Latest => {
            let data: LatestPostsResponse = api.get("/api/posts/latest").await?;
            if json {
                return print_json(&data);
            }
            print_posts(&data.latest_posts);
        }

        Commands::Popular => {
            let data: PopularPostsResponse = api.get("/api/posts/popular").await?;
            if json {
                return print_json(&data);
            }
            print_posts(&data.popular_posts);
        }

        Commands::Posts { user_id } => {
            let data: PostsResponse = api.get(&format!("/api/users/{}/posts", user_id)).await?;
            if json {
                return print_json(&data);
            }

            if data.posts.is_empty() {
                println!("No posts for user {}.", user_id);
                return Ok(());
            }

            println!("{:<8} {}", "ID", "Content");
            println!("{}", "-".repeat(40));
            for post in &data.posts {
                println!("{:<8} {}", post.id, post.content);
            }
        }

        Commands::Comments { post_id } => {
            let data: CommentsResponse =
                api.get(&format!("/api/posts/{}/comments", post_id)).await?;
            if json {
                return print_json(&data);
            }

            if data.comments.is_empty() {
                println!("No comments on post {}.", post_id);
                return Ok(());
            }

            println!("{:<8} {}", "ID", "Comment");
            println!("{}", "-".repeat(40));
            for comment in &data.comments {
                println!("{:<8} {}", comment.id, comment.content);
            }
        }

        Commands::Feed { interval, once } => {
            let period = interval.max(1);
            let mut ticker = tokio::time::interval(Duration::from_secs(period));
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            // One handler for the whole loop so a Ctrl-C during a fetch is not lost
            let ctrl_c = tokio::signal::ctrl_c();
            tokio::pin!(ctrl_c);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {}
                    _ = &mut ctrl_c => break,
                }

                let fetched = tokio::select! {
                    result = api.get::<LatestPostsResponse>("/api/posts/latest") => result,
                    _ = &mut ctrl_c => break,
                };

                match fetched {
                    Ok(data) => {
                        let stamp = Local::now().format("%H:%M:%S").to_string();
                        print!("{}", render_feed(&data, json, &stamp)?);
                    }
                    Err(e) if once => return Err(e),
                    Err(e) => eprintln!("Feed refresh failed, retrying in {}s: {:#}", period, e),
                }

                if once {
                    break;
                }
            }
        }

        Commands::Status => {
            let health: HealthResponse = api.get("/health").await?;
            if json {
                return print_json(&health);
            }

            println!("Socialify API v{}", health.version);
            println!();
            println!("Status: {}", health.status);
            println!();
            println!("Dataset:");
            println!("  Users: {}", health.users);
            println!("  Posts: {}", health.posts);
            println!("  Comments: {}", health.comments);
            println!();
            println!("Uptime: {}", format_duration(health.uptime_seconds));
        }

        Commands::Config { output } => {
            let config = socialify::config::generate_default_config();

            if let Some(path) = output {
                std::fs::write(&path, &config)
                    .with_context(|| format!("Failed to write {:?}", path))?;
                println!("Config written to {:?}", path);
            } else {
                print!("{}", config);
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

fn print_posts(posts: &[PostWithUser]) {
    print!("{}", render_posts(posts));
}

/// One feed refresh as printed to the terminal
fn render_feed(data: &LatestPostsResponse, json: bool, stamp: &str) -> anyhow::Result<String> {
    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(data)?));
    }

    Ok(format!(
        "\nLatest posts ({})\n{}",
        stamp,
        render_posts(&data.latest_posts)
    ))
}

/// Posts as a table; adds a comments column when counts are present
fn render_posts(posts: &[PostWithUser]) -> String {
    if posts.is_empty() {
        return "No posts.\n".to_string();
    }

    let with_counts = posts.iter().any(|p| p.comment_count.is_some());
    let mut out = String::new();

    if with_counts {
        out.push_str(&format!(
            "{:<8} {:<20} {:<9} {}\n",
            "ID", "Author", "Comments", "Content"
        ));
        out.push_str(&format!("{}\n", "-".repeat(60)));
    } else {
        out.push_str(&format!("{:<8} {:<20} {}\n", "ID", "Author", "Content"));
        out.push_str(&format!("{}\n", "-".repeat(50)));
    }

    for entry in posts {
        let line = match entry.comment_count {
            Some(count) if with_counts => format!(
                "{:<8} {:<20} {:<9} {}\n",
                entry.post.id, entry.user.name, count, entry.post.content
            ),
            _ => format!(
                "{:<8} {:<20} {}\n",
                entry.post.id, entry.user.name, entry.post.content
            ),
        };
        out.push_str(&line);
    }

    out
}

/// Format seconds as human-readable duration
fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use socialify::dataset::{Post, User};

    fn entry(id: u64, content: &str, comment_count: Option<usize>) -> PostWithUser {
        PostWithUser {
            post: Post::new(id, "1", content),
            user: User::new("1", "John Doe"),
            comment_count,
        }
    }

    #[test]
    fn test_render_posts_empty() {
        assert_eq!(render_posts(&[]), "No posts.\n");
    }

    #[test]
    fn test_render_posts_without_counts() {
        let out = render_posts(&[entry(952, "Post about zebra", None)]);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID"));
        assert!(!lines[0].contains("Comments"));
        assert!(lines[2].starts_with("952"));
        assert!(lines[2].contains("John Doe"));
        assert!(lines[2].ends_with("Post about zebra"));
    }

    #[test]
    fn test_render_posts_with_counts() {
        let out = render_posts(&[entry(370, "Post about monkey", Some(3))]);
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].contains("Comments"));
        assert_eq!(
            lines[2],
            format!("{:<8} {:<20} {:<9} {}", 370, "John Doe", 3, "Post about monkey")
        );
    }

    #[test]
    fn test_render_feed_table() {
        let data = LatestPostsResponse {
            latest_posts: vec![entry(952, "Post about zebra", None)],
        };
        let out = render_feed(&data, false, "12:00:00").unwrap();

        assert!(out.starts_with("\nLatest posts (12:00:00)\n"));
        assert!(out.contains("Post about zebra"));
    }

    #[test]
    fn test_render_feed_json() {
        let data = LatestPostsResponse {
            latest_posts: vec![entry(952, "Post about zebra", None)],
        };
        let out = render_feed(&data, true, "12:00:00").unwrap();
        let parsed: LatestPostsResponse = serde_json::from_str(&out).unwrap();

        assert_eq!(parsed, data);
        assert!(!out.contains("12:00:00"));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(42), "42s");
        assert_eq!(format_duration(125), "2m 5s");
        assert_eq!(format_duration(7260), "2h 1m");
        assert_eq!(format_duration(90000), "1d 1h");
    }
}
