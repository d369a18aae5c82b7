use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use hashgen_core::VERSION;

/// Hashgen - Deterministic, shareable identifiers from a passphrase and salt
#[derive(Parser)]
#[command(name = "hashgen")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, env = "HASHGEN_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase diagnostic logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// One of the three derived outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Field {
    /// 16-character alphanumeric
    Alnum,
    /// 24-character trimmed base-64
    Base64,
    /// Full hex digest
    Hex,
}

/// Arguments for the `derive` command
#[derive(Args)]
pub struct DeriveArgs {
    /// Passphrase (prefer the prompt or HASHGEN_PASSPHRASE; argv is visible to other users)
    #[arg(long, env = "HASHGEN_PASSPHRASE", hide_env_values = true)]
    pub passphrase: Option<String>,

    /// Salt (optional)
    #[arg(long, env = "HASHGEN_SALT", hide_env_values = true)]
    pub salt: Option<String>,

    /// Read the passphrase from the first line of stdin
    #[arg(long, conflicts_with = "passphrase")]
    pub stdin: bool,

    /// Echo the passphrase while typing at the prompt
    #[arg(long)]
    pub reveal: bool,

    /// Print only one output value
    #[arg(long, value_enum)]
    pub field: Option<Field>,

    /// Hash algorithm (sha256, sha512)
    #[arg(long)]
    pub algorithm: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `watch` command
#[derive(Args)]
pub struct WatchArgs {
    /// Hash algorithm (sha256, sha512)
    #[arg(long)]
    pub algorithm: Option<String>,

    /// Output as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `check` command
#[derive(Args)]
pub struct CheckArgs {
    /// Hash algorithm to probe (sha256, sha512)
    #[arg(long)]
    pub algorithm: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Default hash algorithm to record
    #[arg(long)]
    pub algorithm: Option<String>,

    /// Default output format to record (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Derive the three identifiers from a passphrase and salt
    Derive(DeriveArgs),

    /// Recompute on every edit read from stdin (`passphrase<TAB>salt` per line)
    Watch(WatchArgs),

    /// Verify the hash primitive with a known-answer self test
    Check(CheckArgs),

    /// Write a default config file
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
