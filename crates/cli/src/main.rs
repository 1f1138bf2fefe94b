//! `recipes` CLI entry-point.
//!
//! Available sub-commands:
//! - `list` — print every recipe.
//! - `show` — print a single recipe by id.
//! - `seed` — apply a SQL script (or the bundled schema + seed rows).

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use db::{config, seed, DbConfig, DbError, Recipe, RecipesRepository};
use tracing::info;

#[derive(Parser)]
#[command(name = "recipes", about = "Browse the recipes directory", version)]
struct Cli {
    #[command(flatten)]
    db: DbArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct DbArgs {
    #[arg(long, global = true, env = config::HOST_VAR, default_value = config::DEFAULT_HOST)]
    host: String,

    #[arg(long, global = true, env = config::PORT_VAR, default_value_t = config::DEFAULT_PORT)]
    port: u16,

    #[arg(long, global = true, env = config::DBNAME_VAR, default_value = config::DEFAULT_DBNAME)]
    dbname: String,

    #[arg(long, global = true, env = config::USER_VAR)]
    user: Option<String>,

    #[arg(long, global = true, env = config::PASSWORD_VAR, hide_env_values = true)]
    password: Option<String>,
}

impl From<DbArgs> for DbConfig {
    fn from(args: DbArgs) -> Self {
        Self {
            host: args.host,
            port: args.port,
            dbname: args.dbname,
            user: args.user,
            password: args.password,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// List every recipe.
    List {
        /// Print a JSON array instead of one line per recipe.
        #[arg(long)]
        json: bool,
    },
    /// Show a single recipe.
    Show {
        id: i32,
        #[arg(long)]
        json: bool,
    },
    /// Apply a SQL script; without a path, create and seed the recipes table.
    Seed {
        path: Option<PathBuf>,
    },
}

fn render(recipes: &[Recipe], json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(recipes)?);
    }
    Ok(recipes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = DbConfig::from(cli.db);

    match cli.command {
        Command::List { json } => {
            let mut repo = RecipesRepository::connect(&config).await?;
            let recipes = repo.all().await?;
            println!("{}", render(&recipes, json)?);
        }
        Command::Show { id, json } => {
            let mut repo = RecipesRepository::connect(&config).await?;
            match repo.find(id).await {
                Ok(recipe) if json => println!("{}", serde_json::to_string_pretty(&recipe)?),
                Ok(recipe) => println!("{recipe}"),
                Err(DbError::NotFound(id)) => {
                    eprintln!("recipe {id} not found");
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            }
        }
        Command::Seed { path } => {
            let mut conn = db::connection::connect(&config).await?;
            match path {
                Some(path) => {
                    let sql = std::fs::read_to_string(&path)
                        .with_context(|| format!("cannot read {}", path.display()))?;
                    seed::apply_script(&mut conn, &sql).await?;
                    info!("Applied {}", path.display());
                }
                None => {
                    seed::reset_recipes_table(&mut conn).await?;
                    info!("Recipes table reset to seed state");
                }
            }
        }
    }

    Ok(())
}
