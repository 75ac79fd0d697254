//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for `scaffold`.
#[derive(Debug, Parser)]
#[command(
    name = "scaffold",
    version,
    about = "Generate plugin classes from composer.json namespaces"
)]
pub struct Cli {
    /// Project root containing composer.json (defaults to the current directory).
    #[arg(long, short = 'r', global = true, env = "SCAFFOLD_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a controller, optionally under a type namespace.
    #[command(name = "make:controller")]
    Controller(ControllerArgs),
    /// Create a middleware.
    #[command(name = "make:middleware")]
    Middleware(NameArgs),
    /// Create a service provider.
    #[command(name = "make:provider")]
    Provider(NameArgs),
}

/// Arguments for `make:controller`.
#[derive(Debug, Args)]
pub struct ControllerArgs {
    /// Controller name; `/` separates sub-namespaces (e.g. `Admin/UserController`).
    #[arg(value_name = "CONTROLLER_NAME")]
    pub name: String,

    /// Controller type: api, action, shortcode, or sideMenu.
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub kind: Option<String>,
}

/// Arguments for `make:middleware` and `make:provider`.
#[derive(Debug, Args)]
pub struct NameArgs {
    /// Class name; `/` separates sub-namespaces.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Accepted for compatibility and ignored.
    #[arg(long = "type", short = 't', value_name = "TYPE", hide = true)]
    pub kind: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_controller_with_type() {
        let cli = Cli::parse_from(["scaffold", "make:controller", "Admin/User", "--type", "api"]);
        match cli.command {
            Command::Controller(args) => {
                assert_eq!(args.name, "Admin/User");
                assert_eq!(args.kind.as_deref(), Some("api"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_short_type_flag() {
        let cli = Cli::parse_from(["scaffold", "make:controller", "User", "-t", "sideMenu"]);
        let Command::Controller(args) = cli.command else {
            panic!("expected make:controller");
        };
        assert_eq!(args.kind.as_deref(), Some("sideMenu"));
    }

    #[test]
    fn parses_middleware_and_provider() {
        let cli = Cli::parse_from(["scaffold", "make:middleware", "Auth/Session"]);
        assert!(matches!(cli.command, Command::Middleware(ref a) if a.name == "Auth/Session"));

        let cli = Cli::parse_from(["scaffold", "--root", "/tmp/p", "make:provider", "Routes"]);
        assert!(matches!(cli.command, Command::Provider(_)));
        assert_eq!(cli.root.as_deref(), Some(std::path::Path::new("/tmp/p")));
    }

    #[test]
    fn name_is_required() {
        assert!(Cli::try_parse_from(["scaffold", "make:controller"]).is_err());
    }
}
