use std::path::{Path, PathBuf};

mod add;
mod list;
mod menu;
mod remove;
mod render;
mod show;
mod terminal;
mod update;

use add::Add;
use anyhow::Context;
use clap::ArgAction;
use list::List;
use remove::Remove;
use show::Show;
use terminal::Colorize;
use tracing::instrument;
use update::Update;
use warehouse::{Config, Warehouse};

/// Parse a unit price, rejecting negative and non-finite values.
fn parse_price(s: &str) -> Result<f64, String> {
    let price: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err("price must be a non-negative number".to_string())
    }
}

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the configuration file
    #[arg(short, long, default_value = "warehouse.toml", global = true)]
    config: PathBuf,

    /// Inventory file to use instead of the configured one
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let mut config = load_config(&self.config);
        if let Some(file) = self.file {
            config.set_data_file(file);
        }

        self.command
            .unwrap_or(Command::Menu)
            .run(&self.config, &config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

/// Loads the configuration, falling back to defaults if the file is missing
/// or unreadable.
///
/// A relative data file is resolved against the configuration's directory.
fn load_config(path: &Path) -> Config {
    let mut config = Config::load(path).unwrap_or_else(|e| {
        tracing::debug!("Using default configuration: {e}");
        Config::default()
    });

    if config.data_file().is_relative() {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            config.set_data_file(dir.join(config.data_file()));
        }
    }
    config
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Interactive menu (default)
    ///
    /// Orders and transaction history are only available here.
    Menu,

    /// Write a default configuration file
    Init,

    /// List items
    List(List),

    /// Show one item
    Show(Show),

    /// Add an item
    Add(Add),

    /// Remove an item
    Remove(Remove),

    /// Update an item's fields
    Update(Update),
}

impl Command {
    fn run(self, config_path: &Path, config: &Config) -> anyhow::Result<()> {
        if matches!(self, Self::Init) {
            return init(config_path);
        }

        let path = config.data_file();
        let mut warehouse = Warehouse::open(path.to_path_buf())
            .with_context(|| format!("failed to open inventory {}", path.display()))?;

        match self {
            Self::Init => {}
            Self::Menu => menu::run(&mut warehouse, config, &mut menu::Terminal)?,
            Self::List(command) => command.run(&warehouse, config)?,
            Self::Show(command) => command.run(&warehouse, config)?,
            Self::Add(command) => command.run(&mut warehouse)?,
            Self::Remove(command) => command.run(&mut warehouse)?,
            Self::Update(command) => command.run(&mut warehouse)?,
        }
        Ok(())
    }
}

/// Writes a default configuration file unless one already exists.
#[instrument]
fn init(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        println!("{}", format!("{} already exists", path.display()).warning());
        return Ok(());
    }
    Config::default().save(path).map_err(anyhow::Error::msg)?;
    println!("{}", format!("Wrote {}", path.display()).success());
    Ok(())
}
