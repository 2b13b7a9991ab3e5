use std::env;
use std::fs;
use std::path::PathBuf;

#[must_use]
pub fn is_program_in_path(program: &str) -> bool {
    if let Ok(path) = env::var("PATH") {
        for p in path.split(':') {
            let p_str = format!("{}/{}", p, program);
            if fs::metadata(p_str).is_ok() {
                return true;
            }
        }
    }
    false
}

/// Expand `~` and environment variables in a user supplied path.
#[must_use]
pub fn expand_path(path: &str) -> PathBuf {
    match shellexpand::full(path) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(err) => {
            log::warn!("Could not expand path {}: {}", path, err);
            PathBuf::from(path)
        }
    }
}

/// Program name of a shell command line, the first whitespace separated word.
#[must_use]
pub fn program_of(command: &str) -> Option<&str> {
    command.split_whitespace().next()
}
