use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const APP_DIR: &str = ".caseline";
const TOKEN_FILE: &str = "token";

fn config_dir() -> io::Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(APP_DIR))
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "home directory not found"))
}

pub fn save_token(token: &str) -> io::Result<()> {
    save_token_in(&config_dir()?, token)
}

pub fn load_token() -> io::Result<String> {
    load_token_in(&config_dir()?)
}

pub fn delete_token() -> io::Result<()> {
    delete_token_in(&config_dir()?)
}

fn save_token_in(dir: &Path, token: &str) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    fs::write(dir.join(TOKEN_FILE), token)
}

fn load_token_in(dir: &Path) -> io::Result<String> {
    let token = fs::read_to_string(dir.join(TOKEN_FILE))?;
    Ok(token.trim().to_string())
}

fn delete_token_in(dir: &Path) -> io::Result<()> {
    fs::remove_file(dir.join(TOKEN_FILE))
}
