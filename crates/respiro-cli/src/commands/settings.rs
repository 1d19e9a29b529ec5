use clap::Subcommand;
use respiro_core::Settings;

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Get a settings value
    Get {
        /// Settings key (e.g. "language", "sound.background")
        key: String,
    },
    /// Set a settings value
    Set {
        /// Settings key
        key: String,
        /// New value
        value: String,
    },
    /// List all settings values
    List,
    /// Reset settings to defaults
    Reset,
}

pub fn run(action: SettingsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SettingsAction::Get { key } => {
            let settings = Settings::load();
            match settings.get(&key) {
                Some(value) => println!("{value}"),
                None => {
                    eprintln!("unknown key: {key}");
                    std::process::exit(1);
                }
            }
        }
        SettingsAction::Set { key, value } => {
            let mut settings = Settings::load();
            settings.set(&key, &value)?;
            settings.save()?;
            println!("ok");
        }
        SettingsAction::List => {
            let settings = Settings::load();
            let json = serde_json::to_string_pretty(&settings)?;
            println!("{json}");
        }
        SettingsAction::Reset => {
            let settings = Settings::default();
            settings.save()?;
            println!("settings reset to defaults");
        }
    }
    Ok(())
}
