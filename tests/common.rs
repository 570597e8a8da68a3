use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for routewise, isolated from any user config
pub fn routewise(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("routewise");
    cmd.env("ROUTEWISE_CONFIG_DIR", config_dir)
        .env_remove("ROUTEWISE_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("ROUTEWISE_LOG");
    cmd
}

/// Write a topology file named `name` into `dir`
#[allow(dead_code)]
pub fn write_topology(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write topology");
    path
}

/// The three-router triangle used across tests, with an isolated fourth router
#[allow(dead_code)]
pub const TRIANGLE: &str = "# routers\n4\n0 1 4\n1 2 1\n0 2 7\n";
