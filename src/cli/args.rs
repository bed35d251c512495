/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// regcli — render domain-registrar API responses.
#[derive(Debug, Parser)]
#[command(
    name = "regcli",
    about = "Render domain-registrar API responses as tables, text, JSON or YAML",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output format: table, text, json or yaml.
    /// Defaults to table for lists and text for single items.
    #[arg(long, short = 'o', global = true, value_name = "FORMAT", env = "REGCLI_OUTPUT")]
    pub output: Option<String>,

    /// JMESPath expression applied to json/yaml output (e.g. "[].id").
    #[arg(long, short = 'q', global = true, value_name = "EXPR", env = "REGCLI_QUERY")]
    pub query: Option<String>,

    /// Log filter in tracing-subscriber syntax (e.g. "regcli=debug").
    #[arg(long, global = true, value_name = "FILTER", env = "REGCLI_LOG")]
    pub log: Option<String>,

    /// Print pipeline timing and debug events to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Domains in the account.
    #[command(subcommand)]
    Domains(DomainsCommand),
    /// Domain collaborators.
    #[command(subcommand)]
    Collaborators(CollaboratorsCommand),
    /// Delegation signer records.
    #[command(subcommand)]
    Dsr(DsrCommand),
    /// DNSSEC state of a domain.
    #[command(subcommand)]
    Dnssec(DnssecCommand),
    /// Accounts reachable with the current token.
    #[command(subcommand)]
    Accounts(AccountsCommand),
    /// Identity behind the current token.
    Whoami(InputArgs),
}

/// `regcli domains ...`
#[derive(Debug, Subcommand)]
pub enum DomainsCommand {
    /// List domains.
    List(InputArgs),
    /// Show a single domain.
    Get(InputArgs),
}

/// `regcli collaborators ...`
#[derive(Debug, Subcommand)]
pub enum CollaboratorsCommand {
    /// List collaborators of a domain.
    List(InputArgs),
}

/// `regcli dsr ...`
#[derive(Debug, Subcommand)]
pub enum DsrCommand {
    /// List delegation signer records.
    List(InputArgs),
    /// Show a single delegation signer record.
    Get(InputArgs),
}

/// `regcli dnssec ...`
#[derive(Debug, Subcommand)]
pub enum DnssecCommand {
    /// Show whether DNSSEC is enabled.
    Status(InputArgs),
}

/// `regcli accounts ...`
#[derive(Debug, Subcommand)]
pub enum AccountsCommand {
    /// List accounts.
    List(InputArgs),
}

/// Where to read the API response body from.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// JSON response body (`{"data": ...}`); `-` reads stdin.
    #[arg(long, short = 'i', value_name = "PATH", default_value = "-")]
    pub input: PathBuf,
}
