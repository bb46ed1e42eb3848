//! `hero-server` binary: resolves configuration, installs logging, serves the API.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use hero_server::{telemetry, DatabaseConfig, LogConfig, ServerConfig};

fn cli() -> Command {
    Command::new("hero-server")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Superhero name generator HTTP server")
        .arg(
            Arg::new("host")
                .long("host")
                .help("Listen address (overrides HOST)"),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .short('p')
                .value_parser(value_parser!(u16))
                .help("Listen port (overrides SERVER_PORT, default 2022)"),
        )
        .arg(
            Arg::new("database")
                .long("database")
                .help("SQLite URL or \"memory\" (overrides DATABASE_URL)"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_parser(value_parser!(u64))
                .help("Fixed generator seed for reproducible names (overrides HERO_SEED)"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("Log filter directive, default \"info\"; RUST_LOG takes precedence"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON lines"),
        )
}

fn resolve_config(args: &ArgMatches) -> anyhow::Result<ServerConfig> {
    let mut config = ServerConfig::from_env()?;

    if let Some(host) = args.get_one::<String>("host") {
        config = config.with_host(host.clone());
    }
    if let Some(port) = args.get_one::<u16>("port") {
        config = config.with_port(*port);
    }
    if let Some(database) = args.get_one::<String>("database") {
        config = config.with_database(DatabaseConfig::parse(database));
    }
    if let Some(seed) = args.get_one::<u64>("seed") {
        config = config.with_seed(*seed);
    }

    let filter = args
        .get_one::<String>("log-level")
        .cloned()
        .unwrap_or_else(|| LogConfig::default().filter);
    Ok(config.with_log(LogConfig {
        filter,
        json: args.get_flag("log-json"),
    }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli().get_matches();
    let config = resolve_config(&args)?;

    telemetry::init_tracing(&config.log)?;
    tracing::debug!(?config, "Resolved configuration");

    hero_server::run(config).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn flags_override_config() {
        let args = cli().get_matches_from([
            "hero-server",
            "--port",
            "9000",
            "--database",
            "memory",
            "--seed",
            "5",
            "--log-json",
        ]);
        let config = resolve_config(&args).unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.database, DatabaseConfig::Memory);
        assert_eq!(config.seed, Some(5));
        assert!(config.log.json);
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn log_level_flag_sets_filter() {
        let args = cli().get_matches_from(["hero-server", "--log-level", "hero_server=debug"]);
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.log.filter, "hero_server=debug");
        assert!(!config.log.json);
    }
}
