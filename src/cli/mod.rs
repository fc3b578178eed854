//! Command-line interface for tasknest
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is defined in its own submodule.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::api::HttpApi;
use crate::client::TaskListClient;
use crate::config::Config;
use crate::error::Result;
use crate::output::OutputOptions;
use crate::session::SessionStore;
use crate::task::Category;

mod login;
mod logout;
mod task;

/// tasknest - TaskNest client
///
/// A CLI client for the TaskNest task service: log in once, then create,
/// list, and delete tasks against the remote store.
#[derive(Parser, Debug)]
#[command(name = "tasknest")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file (defaults to the user config directory)
    #[arg(long, global = true, env = "TASKNEST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Base address of the task service (overrides the config file)
    #[arg(long, global = true, env = "TASKNEST_API_URL")]
    pub api_url: Option<String>,

    /// Directory holding the persisted session (defaults to the user data directory)
    #[arg(long, global = true, env = "TASKNEST_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the session token
    Login {
        /// Account email
        email: String,

        /// Account password
        #[arg(long, env = "TASKNEST_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Clear the stored session
    Logout,

    /// Task operations
    #[command(subcommand)]
    Task(TaskCommands),
}

/// Task subcommands
#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// Add a task
    Add {
        /// Task title
        title: String,

        /// Category label
        #[arg(long, value_enum, default_value_t = Category::Today)]
        category: Category,
    },

    /// List tasks in server order
    List {
        /// Only show tasks with this category
        #[arg(long, value_enum)]
        category: Option<Category>,
    },

    /// Delete a task by id
    Rm {
        /// Server-assigned task id
        id: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let options = OutputOptions {
            json: self.json,
            quiet: self.quiet,
        };

        let config = self.load_config()?;
        let store = SessionStore::resolve(self.data_dir.clone())?;
        let api = HttpApi::new(&config.api)?;
        let mut client = TaskListClient::new(api, store);

        match self.command {
            Commands::Login { email, password } => {
                login::run(&mut client, &email, &password, options).await
            }
            Commands::Logout => logout::run(&mut client, options),
            Commands::Task(command) => match command {
                TaskCommands::Add { title, category } => {
                    task::add(&mut client, &title, category, options).await
                }
                TaskCommands::List { category } => {
                    task::list(&mut client, category, options).await
                }
                TaskCommands::Rm { id } => task::rm(&mut client, &id, options).await,
            },
        }
    }

    fn load_config(&self) -> Result<Config> {
        let path = self.config.clone().or_else(Config::default_path);
        let mut config = Config::load_or_default(path.as_deref())?;
        if let Some(url) = &self.api_url {
            config.api.base_url = url.clone();
            config.api.validate()?;
        }
        Ok(config)
    }
}
