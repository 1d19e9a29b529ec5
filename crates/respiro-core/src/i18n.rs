//! Localized display texts.
//!
//! One table per language, one source of truth -- screens and the
//! reminder content all read from here, keyed by [`Language`].

use serde::{Deserialize, Serialize};

use crate::audio::BackgroundSound;
use crate::session::Phase;

/// Display language. The app shipped Turkish-first; English is the
/// default for new installs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Tr,
    #[default]
    En,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Tr => "tr",
            Language::En => "en",
        }
    }

    /// Native display name, for settings listings.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::Tr => "Türkçe",
            Language::En => "English",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct WelcomeTexts {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub start_button: &'static str,
    pub settings_button: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct BreathingTexts {
    pub breathe_in: &'static str,
    pub breathe_out: &'static str,
    pub finished: &'static str,
    pub finish_button: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SettingsTexts {
    pub title: &'static str,
    pub notifications: &'static str,
    pub background_sound: &'static str,
    pub sound_ocean: &'static str,
    pub sound_forest: &'static str,
    pub sound_none: &'static str,
    pub back: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct InfoTexts {
    pub version: &'static str,
    pub subtitle: &'static str,
}

/// Complete text table for one language.
#[derive(Debug, Clone, Copy)]
pub struct Texts {
    pub welcome: WelcomeTexts,
    pub breathing: BreathingTexts,
    pub settings: SettingsTexts,
    pub info: InfoTexts,
    pub reminder_body: &'static str,
}

static TR: Texts = Texts {
    welcome: WelcomeTexts {
        title: "1 Dakika Rahatlama",
        subtitle: "Sadece 1 dakikanı kendine ayır.",
        start_button: "Başla",
        settings_button: "Ayarlar",
    },
    breathing: BreathingTexts {
        breathe_in: "Nefes Al",
        breathe_out: "Nefes Ver",
        finished: "Tebrikler!",
        finish_button: "Bitir",
    },
    settings: SettingsTexts {
        title: "Ayarlar",
        notifications: "Günlük Bildirim",
        background_sound: "Arka Plan Sesi",
        sound_ocean: "Deniz 🌊",
        sound_forest: "Orman 🌲",
        sound_none: "Yok 🚫",
        back: "Geri Dön",
    },
    info: InfoTexts {
        version: "📱 1 Dakika Rahatlama v1.0.0",
        subtitle: "Günlük stresini azalt, kendine zaman ayır.",
    },
    reminder_body: "Bugün 1 dakikanı ayırdın mı? 🧘‍♂️",
};

static EN: Texts = Texts {
    welcome: WelcomeTexts {
        title: "1 Minute Relaxation",
        subtitle: "Just take 1 minute for yourself.",
        start_button: "Start",
        settings_button: "Settings",
    },
    breathing: BreathingTexts {
        breathe_in: "Breathe In",
        breathe_out: "Breathe Out",
        finished: "Congratulations!",
        finish_button: "Finish",
    },
    settings: SettingsTexts {
        title: "Settings",
        notifications: "Daily Reminder",
        background_sound: "Background Sound",
        sound_ocean: "Ocean 🌊",
        sound_forest: "Forest 🌲",
        sound_none: "None 🚫",
        back: "Go Back",
    },
    info: InfoTexts {
        version: "📱 1 Minute Relaxation v1.0.0",
        subtitle: "Reduce your daily stress, take time for yourself.",
    },
    reminder_body: "Did you take your 1 minute today? 🧘‍♂️",
};

impl Texts {
    pub fn for_language(language: Language) -> &'static Texts {
        match language {
            Language::Tr => &TR,
            Language::En => &EN,
        }
    }

    /// Cue shown next to the breathing circle.
    pub fn phase_label(&self, phase: Phase) -> &'static str {
        match phase {
            Phase::In => self.breathing.breathe_in,
            Phase::Out => self.breathing.breathe_out,
        }
    }

    pub fn sound_label(&self, sound: BackgroundSound) -> &'static str {
        match sound {
            BackgroundSound::Ocean => self.settings.sound_ocean,
            BackgroundSound::Forest => self.settings.sound_forest,
            BackgroundSound::None => self.settings.sound_none,
        }
    }
}
