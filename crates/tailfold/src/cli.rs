//! The `tailfold` command line.
//!
//! Every subcommand renders to a string so it can be exercised without a
//! terminal; `main` only prints and picks the exit code.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use console::style;
use tailfold_merge::ClassInfo;
use tailfold_preset::{project_config, Config, Resolver};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::StyleContext;

/// Compose utility classes and inspect layered style configurations.
#[derive(Debug, Parser)]
#[command(name = "tailfold", version, about, long_about = None)]
pub struct Cli {
    /// Style configuration file (.yaml, .yml or .json). Defaults to the
    /// bundled project configuration.
    #[arg(long, global = true, env = "TAILFOLD_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start from an empty theme instead of the default one.
    #[arg(long, global = true)]
    pub no_defaults: bool,

    /// Log more (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the merged class string.
    Merge {
        #[arg(required = true, value_name = "CLASS")]
        classes: Vec<String>,
    },
    /// Show how a class is parsed and which group it belongs to.
    Explain {
        class: String,
        #[arg(long)]
        json: bool,
    },
    /// Print the resolved configuration.
    Resolve {
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Validate the configuration.
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Yaml,
}

impl Cli {
    /// The configuration named by `--config`, or the project one.
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::from_path(path)
                .with_context(|| format!("failed to load style config {}", path.display())),
            None => Ok(project_config()),
        }
    }

    fn resolver(&self) -> Resolver {
        if self.no_defaults {
            Resolver::bare()
        } else {
            Resolver::new()
        }
    }

    fn context(&self, config: &Config) -> Result<StyleContext> {
        StyleContext::resolve_with(self.resolver(), config)
            .with_context(|| format!("failed to resolve '{}'", config.label()))
    }
}

/// Runs the parsed command and returns what it prints.
pub fn run(cli: &Cli) -> Result<String> {
    let config = cli.load_config()?;
    let ctx = cli.context(&config)?;
    tracing::debug!(config = config.label(), command = ?cli.command, "running command");

    match &cli.command {
        Command::Merge { classes } => Ok(ctx.merger().merge_classes(classes.iter().map(String::as_str))),
        Command::Explain { class, json } => {
            let info = ctx.merger().explain(class);
            if *json {
                serde_json::to_string_pretty(&info).context("failed to serialize class info")
            } else {
                Ok(render_explain(&info))
            }
        }
        Command::Resolve { format } => {
            let out = match format {
                Format::Json => ctx.resolved().to_json(),
                Format::Yaml => ctx.resolved().to_yaml(),
            };
            out.context("failed to serialize resolved config")
        }
        Command::Check => {
            let resolved = ctx.resolved();
            let disabled = resolved.disabled_core_plugins().count();
            Ok(format!(
                "{} {} ({} layers, {} plugins, {} core plugins disabled)",
                style("ok").green().bold(),
                config.label(),
                config.layers().len(),
                resolved.plugins.len(),
                disabled,
            ))
        }
    }
}

fn render_explain(info: &ClassInfo) -> String {
    let yes_no = |flag: bool| if flag { "yes" } else { "no" };
    let mut out = String::new();
    let mut line = |label: &str, value: &str| {
        let _ = writeln!(out, "{:<10} {}", style(label).dim(), value);
    };

    line("class", &info.class);
    if !info.variants.is_empty() {
        line("variants", &info.variants.join(", "));
    }
    line("important", yes_no(info.important));
    line("negative", yes_no(info.negative));
    line("base", &info.base);
    if let Some(postfix) = &info.postfix {
        line("postfix", postfix);
    }
    match (&info.group, &info.plugin) {
        (Some(group), Some(plugin)) => line("group", &format!("{} ({plugin})", style(group).cyan())),
        (Some(group), None) => line("group", &style(group).cyan().to_string()),
        (None, _) => line("group", &style("unknown").yellow().to_string()),
    }
    if !info.conflicts.is_empty() {
        line("overrides", &info.conflicts.join(", "));
    }
    out.trim_end().to_string()
}

/// Installs the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` applies unless `-v` is given; `TAILFOLD_LOG_FORMAT=json`
/// switches to JSON lines.
pub fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if std::env::var("TAILFOLD_LOG_FORMAT").as_deref() == Ok("json") {
        registry.with(fmt_layer.json()).try_init()
    } else {
        registry.with(fmt_layer).try_init()
    };
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tailfold").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_merge_requires_classes() {
        assert!(Cli::try_parse_from(["tailfold", "merge"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["check", "--no-defaults", "-vv"]);
        assert!(cli.no_defaults);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Check));
    }

    #[test]
    fn test_render_explain_unknown() {
        let info = tailfold_merge::default_merger().explain("card");
        let out = render_explain(&info);
        assert!(out.contains("card"));
        assert!(out.contains("unknown"));
        assert!(!out.contains("overrides"));
    }
}
