#![forbid(unsafe_code)]

use anyhow::Result;
use log::{info, LevelFilter};
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::env;

// Hello utilities
use crate::utils::errors::Errors;

// ***************************************************************************
//                                Constants
// ***************************************************************************
// Networking.
const ENV_PORT : &str = "PORT";

// Logging.
const LOG_PATTERN : &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

// ***************************************************************************
//                               Config Structs
// ***************************************************************************
// ---------------------------------------------------------------------------
// RuntimeCtx:
// ---------------------------------------------------------------------------
#[derive(Debug)]
pub struct RuntimeCtx {
    pub port: String,
}

// ***************************************************************************
//                               Log Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// init_log:
// ---------------------------------------------------------------------------
pub fn init_log() {
    // Initialize log4rs logging on the console appender.
    let logconfig = match init_log_config() {
        Ok(c) => c,
        Err(e) => {
            println!("{}", e);
            let s = format!("{}", Errors::LogInitialization(e.to_string()));
            panic!("{}", s);
        },
    };
    match log4rs::init_config(logconfig) {
        Ok(_) => (),
        Err(e) => {
            println!("{}", e);
            let s = format!("{}", Errors::LogInitialization(e.to_string()));
            panic!("{}", s);
        },
    }
    info!("Log4rs initialized using the console appender.");
}

// ---------------------------------------------------------------------------
// init_log_config:
// ---------------------------------------------------------------------------
/** Build the log4rs configuration in code.  This program has no external
 * configuration tree, so no log4rs.yml file is read.
 */
fn init_log_config() -> Result<log4rs::config::Config> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let config = log4rs::config::Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info))?;
    Ok(config)
}

// ***************************************************************************
//                             Config Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// init_runtime_context:
// ---------------------------------------------------------------------------
pub fn init_runtime_context() -> RuntimeCtx {
    RuntimeCtx { port: get_port() }
}

// ---------------------------------------------------------------------------
// get_port:
// ---------------------------------------------------------------------------
/** Read the listen port from the environment.  The value is used verbatim
 * to form the listen address.  When the variable is unset the port is the
 * empty string and the resulting address cannot be bound.
 */
fn get_port() -> String {
    env::var(ENV_PORT).unwrap_or_default()
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use std::env;

    use super::{get_port, init_runtime_context, ENV_PORT};

    #[test]
    fn here_i_am() {
        println!("file test: config.rs");
    }

    #[test]
    fn port_tracks_environment() {
        env::remove_var(ENV_PORT);
        assert_eq!(get_port(), "");

        env::set_var(ENV_PORT, "8080");
        assert_eq!(get_port(), "8080");
        assert_eq!(init_runtime_context().port, "8080");

        env::remove_var(ENV_PORT);
    }
}
