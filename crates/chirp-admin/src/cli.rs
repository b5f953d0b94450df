//! Command-line interface

use chirp_core::EntityId;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "chirp-admin", about = "Moderation and leaderboard tool for chirp")]
pub struct Cli {
    /// Id of the admin account the commands run as
    #[arg(long)]
    pub operator_id: EntityId,

    /// Apply pending schema migrations before running the command
    #[arg(long)]
    pub migrate: bool,

    /// Override the configured request deadline, in milliseconds
    #[arg(long)]
    pub deadline_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Users ranked by tweets, likes received, followers and followings
    RankUsers,
    /// Tweets ranked by likes and replies
    RankTweets,
    /// Every tweet with a description excerpt, newest first
    Tweets,
    /// Delete a tweet together with its replies and likes
    DeleteTweet {
        /// Tweet id
        id: EntityId,
    },
    /// A user's public profile with follow counts
    Profile {
        /// User id
        id: EntityId,
    },
}
