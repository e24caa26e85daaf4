use std::io::ErrorKind;
use std::path::PathBuf;
use std::{fs, io};

use serde::Deserialize;

#[derive(Deserialize, Default)]
pub struct Defaults {
    pub output_extension: Option<String>,
    pub textile_command: Option<String>,
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
}

#[derive(Deserialize, Copy, Clone)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    pub log: Option<Log>,
}

impl Config {
    pub fn output_extension(&self) -> &str {
        self.defaults.output_extension.as_deref().unwrap_or(".html")
    }

    pub fn textile_command(&self) -> &str {
        self.defaults.textile_command.as_deref().unwrap_or("redcloth")
    }
}

pub fn read_config(cfg_path: &PathBuf) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.to_str().unwrap(), e))),
    };

    match toml::from_str::<Config>(cfg_content.as_str()) {
        Ok(cfg) => Ok(cfg),
        Err(e) => Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    }
}
