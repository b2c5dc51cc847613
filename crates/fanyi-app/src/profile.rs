use std::env;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

use fanyi_config::Config;
use serde::{Deserialize, Serialize};

/// Load the default config shipped in the repo, falling back to the
/// env-seeded defaults when no config.json is present
fn load_repo_default_config() -> Config {
    match File::open("config.json") {
        Ok(file) => {
            tracing::info!("Loading repo default config...");
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).unwrap_or_else(|e| {
                tracing::warn!("config.json unreadable ({e}), using defaults");
                Config::new()
            })
        }
        Err(_) => Config::new(),
    }
}

fn config_root() -> PathBuf {
    if let Ok(dir) = env::var("FANYI_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".config").join("fanyi")
}

fn profiles_dir() -> PathBuf {
    config_root().join("profiles")
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Initialize user config folders and main profile if missing
pub fn init_user_config() -> anyhow::Result<()> {
    fs::create_dir_all(profiles_dir())?;

    let main_profile = profiles_dir().join("main.json");

    if !main_profile.exists() {
        let profile = Profile {
            name: "main".into(),
            value: load_repo_default_config(),
        };
        fs::write(&main_profile, serde_json::to_string_pretty(&profile)?)?;
        tracing::info!("Created main profile");
    }

    Ok(())
}

/// Load a user profile by name, defaulting to main if name not found
pub fn load_user_profile(name: &str) -> anyhow::Result<Config> {
    let profile_file = profiles_dir().join(format!("{name}.json"));

    if profile_file.exists() {
        let data = fs::read_to_string(profile_file)?;
        let profile: Profile = serde_json::from_str(&data)?;
        Ok(profile.value)
    } else {
        tracing::warn!("Profile {name} not found, falling back to main profile or repo default");
        let main_file = profiles_dir().join("main.json");
        if main_file.exists() {
            let data = fs::read_to_string(main_file)?;
            let profile: Profile = serde_json::from_str(&data)?;
            Ok(profile.value)
        } else {
            Ok(load_repo_default_config())
        }
    }
}

/// Add a new profile cloned from main (or repo default if main missing)
pub fn add_profile_from_default(new_name: &str) -> anyhow::Result<PathBuf> {
    let default_config = load_user_profile("main")?;
    let profile = Profile {
        name: new_name.into(),
        value: default_config,
    };
    let file = profiles_dir().join(format!("{new_name}.json"));
    fs::write(&file, serde_json::to_string_pretty(&profile)?)?;
    tracing::info!("Created new profile: {new_name}");
    Ok(file)
}
