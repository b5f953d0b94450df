//! chirp-admin entry point
//!
//! Run with:
//! ```bash
//! cargo run -p chirp-admin -- --operator-id 1 rank-users
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

mod cli;

use std::time::Duration;

use chirp_common::{
    try_init_tracing_with_config, AppConfig, AppError, ErrorResponse, TracingConfig,
};
use chirp_core::{EntityId, SignInPortal, Viewer};
use chirp_db::{create_pool, run_migrations, PoolConfig};
use chirp_service::{FeedService, ModerationService, ServiceContext, ServiceError, ServiceResult};
use clap::Parser;
use serde::Serialize;
use tracing::{error, info};

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!(error = %e, "Command failed");
        eprintln!("chirp-admin: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(config.app.env))
    {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        cascade = ?config.cascade.strategy,
        "Configuration loaded"
    );

    let pool = create_pool(&PoolConfig::from(&config.database)).await?;
    if cli.migrate {
        run_migrations(&pool).await?;
    }

    let ctx = ServiceContext::from_pool(pool, &config);
    let deadline = cli
        .deadline_ms
        .map_or_else(|| ctx.request_deadline(), Duration::from_millis);

    let output = ctx
        .within(deadline, execute(&ctx, cli.operator_id, cli.command))
        .await;

    match output {
        Ok(json) => {
            println!("{json}");
            Ok(())
        }
        Err(e) => {
            let app_error = AppError::from(e);
            eprintln!(
                "{}",
                serde_json::to_string_pretty(&ErrorResponse::from(&app_error))?
            );
            Err(app_error.into())
        }
    }
}

/// Resolve the operator and run one command, returning pretty JSON
async fn execute(
    ctx: &ServiceContext,
    operator_id: EntityId,
    command: Command,
) -> ServiceResult<String> {
    let viewer = resolve_operator(ctx, operator_id).await?;
    let moderation = ModerationService::new(ctx);

    match command {
        Command::RankUsers => to_json(&moderation.rank_users(&viewer).await?),
        Command::RankTweets => to_json(&moderation.rank_tweets(&viewer).await?),
        Command::Tweets => to_json(&moderation.list_tweets(&viewer).await?),
        Command::DeleteTweet { id } => to_json(&moderation.delete_tweet(&viewer, id).await?),
        Command::Profile { id } => to_json(&FeedService::new(ctx).get_user_profile(id).await?),
    }
}

/// The operator must be an existing account that the admin portal accepts
async fn resolve_operator(ctx: &ServiceContext, id: EntityId) -> ServiceResult<Viewer> {
    let user = ctx
        .user_repo()
        .find_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("User", id.to_string()))?;
    user.check_portal(SignInPortal::Admin)?;
    Ok(Viewer::admin(user.id))
}

fn to_json<T: Serialize>(value: &T) -> ServiceResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| ServiceError::internal(e.to_string()))
}
