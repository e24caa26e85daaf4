use std::io::BufReader;
use std::path::PathBuf;
use std::{env, fs, io};

use anyhow::{Context, Result};
use clap::Parser;
use spdlog::{info, warn};

use mtimport::config::{read_config, Config};
use mtimport::importer::import_reader;
use mtimport::logger::configure_logger;

const CFG_FILE_NAME: &str = "mtimport.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory receiving one post file per entry. Created if missing
    out_dir: PathBuf,

    /// Read the export from a file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,
}

fn get_config_path() -> Option<PathBuf> {
    let exe_path = env::current_exe().unwrap();
    let exe_dir = exe_path.parent().unwrap();
    let cur_dir = env::current_dir().unwrap();

    if exe_dir.join(CFG_FILE_NAME).exists() {
        return Some(exe_dir.join(CFG_FILE_NAME));
    }

    if cur_dir.join(CFG_FILE_NAME).exists() {
        return Some(cur_dir.join(CFG_FILE_NAME));
    }

    let cfg_dir = dirs::config_dir().expect("Could not find user config dir");
    if cfg_dir.join(CFG_FILE_NAME).exists() {
        return Some(cfg_dir.join(CFG_FILE_NAME));
    }

    None
}

/// Loads the config from an explicit path or the usual lookup locations.
/// Running without a config file is fine, every setting has a default.
fn open_config(cfg_path: Option<PathBuf>) -> Result<Config> {
    let config = match cfg_path.or_else(get_config_path) {
        Some(path) => {
            println!("Reading config from {}", path.to_str().unwrap());
            read_config(&path)?
        }
        None => Config::default(),
    };

    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = open_config(args.config_path.map(PathBuf::from))?;
    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Error creating output directory {}", args.out_dir.display()))?;

    let stats = match args.input {
        Some(path) => {
            let file = fs::File::open(&path).with_context(|| format!("Error opening {}", path.display()))?;
            import_reader(BufReader::new(file), &args.out_dir, &config)?
        }
        None => {
            let stdin = io::stdin();
            import_reader(stdin.lock(), &args.out_dir, &config)?
        }
    };

    info!("Imported {} entries and {} comments into {}", stats.entries, stats.comments, args.out_dir.display());
    Ok(())
}
