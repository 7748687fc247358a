// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Kestrel CLI
//!
//! Developer tool for the narrow phase:
//! - `kestrel probe <scene.json>` runs one sphere/triangle pair and prints a JSON report.
//! - `kestrel config show|init` inspects or seeds the stored narrow-phase config.
//!
//! Logs go to stderr (filter with `RUST_LOG`); stdout carries only JSON.
#![allow(clippy::print_stdout)]

mod scene;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use kestrel_collide::config::ConfigService;
use kestrel_collide::NarrowPhaseConfig;
use kestrel_config_fs::FsConfigStore;
use kestrel_math::{DFix64, F32Scalar};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::scene::{probe, Scene};

#[derive(Parser, Debug)]
#[command(author, version, about = "Kestrel narrow-phase developer CLI")]
struct Args {
    /// Config directory (defaults to the platform config dir)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Collide the triangle and sphere of a scene file and print the contact
    Probe {
        /// Scene JSON file
        scene: PathBuf,
        /// Scalar lane to evaluate in
        #[arg(long, value_enum, default_value_t = Lane::F32)]
        lane: Lane,
        /// Narrow-phase config JSON file (overrides the stored config)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Inspect or seed the stored narrow-phase config
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the effective config
    Show,
    /// Write the default config to the store
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Lane {
    /// Canonicalized IEEE-754 single precision
    F32,
    /// Q32.32 fixed point (bit-exact replay)
    Fixed,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match args.cmd {
        Command::Probe {
            scene,
            lane,
            config,
        } => {
            let config = match config {
                Some(path) => read_config_file(&path)?,
                None => NarrowPhaseConfig::load_or_default(&service(args.config_dir.as_deref())?)?,
            };
            let scene = Scene::load(&scene)?;
            debug!(?lane, ?config, "probing scene");
            let report = match lane {
                Lane::F32 => probe::<F32Scalar>("f32", &scene, config)?,
                Lane::Fixed => probe::<DFix64>("fixed", &scene, config)?,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Config { action } => {
            let svc = service(args.config_dir.as_deref())?;
            match action {
                ConfigAction::Show => {
                    let cfg = NarrowPhaseConfig::load_or_default(&svc)?;
                    println!("{}", serde_json::to_string_pretty(&cfg)?);
                }
                ConfigAction::Init { force } => {
                    let path = svc.store().path_for(NarrowPhaseConfig::KEY);
                    let existing: Option<NarrowPhaseConfig> = svc.load(NarrowPhaseConfig::KEY)?;
                    if existing.is_some() && !force {
                        bail!("{} already exists (use --force to overwrite)", path.display());
                    }
                    NarrowPhaseConfig::default().save(&svc)?;
                    println!("{}", path.display());
                }
            }
        }
    }
    Ok(())
}

fn service(dir: Option<&Path>) -> Result<ConfigService<FsConfigStore>> {
    let store = match dir {
        Some(dir) => FsConfigStore::at(dir),
        None => FsConfigStore::new(),
    }
    .context("failed to open config store")?;
    Ok(ConfigService::new(store))
}

fn read_config_file(path: &Path) -> Result<NarrowPhaseConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
}
