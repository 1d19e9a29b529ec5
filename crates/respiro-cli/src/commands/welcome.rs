use respiro_core::{Settings, Texts};

/// Localized welcome screen: the entry point when no subcommand is given.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load();
    let texts = Texts::for_language(settings.language);

    println!("{}", texts.welcome.title);
    println!("{}", texts.welcome.subtitle);
    println!();
    println!("  {:<12} respiro session", texts.welcome.start_button);
    println!("  {:<12} respiro settings list", texts.welcome.settings_button);
    println!();
    println!("{}", texts.info.version);
    println!("{}", texts.info.subtitle);
    Ok(())
}
