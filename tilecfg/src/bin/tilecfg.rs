use anyhow::{anyhow, Result};
use clap::{App, Arg, ArgMatches, SubCommand};
use tilecfg::utils::expand_path;
use tilecfg::Config;
use tilecfg_core::child_process::{Nanny, StartupKind};
use tilecfg_core::{Config as _, Descriptor};

fn main() -> Result<()> {
    let matches = App::new("tilecfg")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolves the window manager configuration and runs its startup hook")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("FILE")
                .takes_value(true)
                .help("Use this configuration file instead of the default one."),
        )
        .subcommand(
            SubCommand::with_name("dump")
                .about("Prints the resolved descriptor as JSON (default)")
                .arg(
                    Arg::with_name("toml")
                        .long("toml")
                        .help("Print the configuration file form instead."),
                ),
        )
        .subcommand(
            SubCommand::with_name("keys")
                .about("Lists the key bindings")
                .arg(Arg::with_name("json").long("json").help("Print as JSON."))
                .arg(
                    Arg::with_name("find")
                        .long("find")
                        .value_name("COMBO")
                        .takes_value(true)
                        .help("Only show bindings triggered by a combination like mod4+shift+h."),
                ),
        )
        .subcommand(
            SubCommand::with_name("autostart")
                .about("Runs the startup hook")
                .arg(
                    Arg::with_name("reload")
                        .long("reload")
                        .help("Announce a reload; the autostart script is not run."),
                ),
        )
        .get_matches();

    let _log_guard = tilecfg::logging::setup_logging();

    let config = match matches.value_of("config") {
        Some(path) => tilecfg::load_from_path(expand_path(path))?,
        None => tilecfg::load(),
    };

    match matches.subcommand() {
        ("keys", Some(sub)) => print_keys(&config, sub)?,
        ("autostart", Some(sub)) => autostart(&config, sub)?,
        ("dump", Some(sub)) if sub.is_present("toml") => print!("{}", config.to_toml()?),
        _ => println!("{}", Descriptor::from_config(&config).to_json()?),
    }
    Ok(())
}

fn print_keys(config: &Config, matches: &ArgMatches) -> Result<()> {
    let mut bindings = config.mapped_bindings();
    if let Some(combo) = matches.value_of("find") {
        let mut parts: Vec<&str> = combo.split('+').map(str::trim).collect();
        let key = parts.pop().unwrap_or_default();
        bindings.retain(|bind| bind.is_triggered_by(&parts, key));
    }
    if matches.is_present("json") {
        println!("{}", serde_json::to_string_pretty(&bindings)?);
        return Ok(());
    }
    for bind in bindings {
        let mut combo = bind.modifier.clone();
        combo.push(bind.key.clone());
        let what = bind
            .desc
            .clone()
            .unwrap_or_else(|| format!("{:?}", bind.command));
        println!("{:<32} {}", combo.join(" + "), what);
    }
    Ok(())
}

fn autostart(config: &Config, matches: &ArgMatches) -> Result<()> {
    let script = config
        .autostart_script()
        .ok_or_else(|| anyhow!("No location for the autostart script"))?;
    let nanny = Nanny::new(script);
    let kind = if matches.is_present("reload") {
        StartupKind::Reload
    } else {
        StartupKind::Initial
    };
    if nanny.on_startup(kind) {
        log::info!("Startup hook ran for {}", nanny.script().display());
    } else {
        log::info!("Startup hook skipped for {}", nanny.script().display());
    }
    Ok(())
}
