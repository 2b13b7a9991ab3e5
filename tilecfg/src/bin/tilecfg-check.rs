use anyhow::{bail, Result};
use clap::{App, Arg};
use std::{fs, os::unix::fs::PermissionsExt, path::Path};
use tilecfg::utils::{expand_path, is_program_in_path, program_of};
use tilecfg::{BaseCommand, Config};
use tilecfg_core::Config as _;

fn main() -> Result<()> {
    let matches = App::new("tilecfg Check")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Checks syntax and consistency of the configuration file")
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Outputs received configuration file."),
        )
        .arg(
            Arg::with_name("INPUT")
                .help("Sets the input file to use. Uses the default config file otherwise.")
                .index(1),
        )
        .get_matches();

    let config_file = matches.value_of("INPUT");
    let verbose = matches.is_present("verbose");

    println!(
        "\x1b[0;94m::\x1b[0m tilecfg version: {}",
        env!("CARGO_PKG_VERSION")
    );
    check_enabled_features();

    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    let config = match check_config_file(config_file, verbose) {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            if verbose {
                dbg!(&config);
            }
            config
        }
        Err(e) => {
            println!("Configuration failed. Reason: {:?}", e);
            return Ok(());
        }
    };

    report("keybinds", &config.check_keybinds(verbose));
    report("groups", &config.check_groups(verbose));
    report("colors", &config.check_colors(verbose));
    report("mouse bindings", &config.check_mouse(verbose));

    println!("\x1b[0;94m::\x1b[0m Checking programs . . .");
    check_programs(&config, verbose);
    println!("\x1b[0;94m::\x1b[0m Checking autostart . . .");
    match config.autostart_script() {
        Some(script) => match check_permissions(&script, verbose) {
            Ok(()) => println!("\x1b[0;92m    -> Autostart OK \x1b[0m"),
            Err(e) => println!("\x1b[1;93mWARN: {} \x1b[0m", e),
        },
        None => println!("\x1b[1;93mWARN: No location for the autostart script \x1b[0m"),
    }

    Ok(())
}

/// Loads configuration from either specified file (preferred) or default.
/// # Errors
///
/// Errors if file cannot be read. Indicates filesystem error
/// (inadequate permissions, disk full, etc.)
/// If a path is specified and does not exist, returns an error.
fn check_config_file(fspath: Option<&str>, verbose: bool) -> Result<Config> {
    let config_filename = match fspath {
        Some(fspath) => expand_path(fspath),
        None => tilecfg::config_file_path()?,
    };
    if verbose {
        dbg!(&config_filename);
    }
    if !config_filename.exists() {
        if fspath.is_some() {
            bail!("Configuration file not found: {}", config_filename.display());
        }
        println!("\x1b[1;93mWARN: No configuration file, checking the built-in one.\x1b[0m");
        return Ok(Config::default());
    }
    tilecfg::load_from_path(&config_filename)
}

fn report(what: &str, errors: &[String]) {
    println!("\x1b[0;94m::\x1b[0m Checking {} . . .", what);
    if errors.is_empty() {
        println!("\x1b[0;92m    -> All {} OK\x1b[0m", what);
    } else {
        for error in errors {
            println!("\x1b[1;91mERROR: {} \x1b[0m", error);
        }
    }
}

/// Warn about spawn bindings whose program is not installed.
fn check_programs(config: &Config, verbose: bool) {
    let mut missing = Vec::new();
    for keybind in config.all_keybinds() {
        if keybind.command != BaseCommand::Spawn {
            continue;
        }
        if let Some(program) = program_of(&keybind.value) {
            if verbose {
                println!("Looking for `{}` in PATH", program);
            }
            if !is_program_in_path(program) {
                missing.push(program.to_owned());
            }
        }
    }
    missing.sort_unstable();
    missing.dedup();
    if missing.is_empty() {
        println!("\x1b[0;92m    -> All programs found \x1b[0m");
    }
    for program in missing {
        println!("\x1b[1;93mWARN: `{}` is not in PATH \x1b[0m", program);
    }
}

fn check_permissions(filepath: &Path, verbose: bool) -> Result<()> {
    let metadata = match fs::metadata(filepath) {
        Ok(metadata) => metadata,
        Err(_) => bail!("`{}` not found, nothing will be started", filepath.display()),
    };
    let permissions = metadata.permissions();
    if metadata.is_file() && (permissions.mode() & 0o111 != 0) {
        if verbose {
            println!(
                "Found `{}` with executable permissions: {:?}",
                filepath.display(),
                permissions.mode() & 0o111 != 0,
            );
        }
        Ok(())
    } else {
        bail!(
            "Found `{}`, but missing executable permissions!",
            filepath.display(),
        );
    }
}

fn check_enabled_features() {
    if env!("TILECFG_FEATURES").trim().is_empty() {
        println!("\x1b[0;94m::\x1b[0m Built with no enabled features.");
        return;
    }

    println!(
        "\x1b[0;94m::\x1b[0m Enabled features:{}",
        env!("TILECFG_FEATURES")
    );
}
