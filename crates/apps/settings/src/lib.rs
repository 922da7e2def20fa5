//! Settings desktop app: display brightness, volume, dark mode, and device status.
//!
//! Preferences persist through the injected [`platform_host::PrefsStore`] under one key each,
//! are read once when the shell boots, and are written on every change. Brightness and dark
//! mode also restyle the document root.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::rc::Rc;

use leptos::*;
use platform_host::{load_pref_with, save_pref_with, PrefsError, PrefsStore};
use platform_host_web::document;
use serde::{de::DeserializeOwned, Serialize};
use system_ui::prelude::*;

/// Preference key for display brightness (percent).
pub const BRIGHTNESS_KEY: &str = "settings-brightness";
/// Preference key for system volume (percent).
pub const VOLUME_KEY: &str = "settings-volume";
/// Preference key for the dark mode flag.
pub const DARK_MODE_KEY: &str = "settings-darkmode";

const BRIGHTNESS_MIN: u8 = 30;
const BRIGHTNESS_MAX: u8 = 100;
const VOLUME_MAX: u8 = 100;

/// User-adjustable display and sound preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsPrefs {
    /// Brightness percent, 30..=100.
    pub brightness: u8,
    /// Volume percent, 0..=100.
    pub volume: u8,
    /// Whether the `dark` class is applied.
    pub dark_mode: bool,
}

impl Default for SettingsPrefs {
    fn default() -> Self {
        Self {
            brightness: 100,
            volume: 75,
            dark_mode: false,
        }
    }
}

impl SettingsPrefs {
    fn clamped(self) -> Self {
        Self {
            brightness: self.brightness.clamp(BRIGHTNESS_MIN, BRIGHTNESS_MAX),
            volume: self.volume.min(VOLUME_MAX),
            dark_mode: self.dark_mode,
        }
    }
}

async fn load_or_default<T: DeserializeOwned>(store: &dyn PrefsStore, key: &str, fallback: T) -> T {
    match load_pref_with::<_, T>(store, key).await {
        Ok(Some(value)) => value,
        Ok(None) => fallback,
        Err(err) => {
            logging::warn!("settings preference `{key}` ignored: {err}");
            fallback
        }
    }
}

/// Reads all settings, falling back to defaults for missing or unreadable keys.
pub async fn load_settings_prefs(store: &dyn PrefsStore) -> SettingsPrefs {
    let defaults = SettingsPrefs::default();
    SettingsPrefs {
        brightness: load_or_default(store, BRIGHTNESS_KEY, defaults.brightness).await,
        volume: load_or_default(store, VOLUME_KEY, defaults.volume).await,
        dark_mode: load_or_default(store, DARK_MODE_KEY, defaults.dark_mode).await,
    }
    .clamped()
}

/// Writes one setting.
///
/// # Errors
///
/// Returns an error when the store rejects the write.
pub async fn save_setting<T: Serialize>(
    store: &dyn PrefsStore,
    key: &str,
    value: &T,
) -> Result<(), PrefsError> {
    save_pref_with(store, key, value).await
}

/// Applies brightness and dark mode to the document root.
pub fn apply_display_prefs(prefs: &SettingsPrefs) {
    document::apply_brightness_filter(prefs.brightness);
    document::apply_dark_mode(prefs.dark_mode);
}

fn persist<T: Serialize + 'static>(store: Rc<dyn PrefsStore>, key: &'static str, value: T) {
    spawn_local(async move {
        if let Err(err) = save_setting(store.as_ref(), key, &value).await {
            logging::warn!("settings preference `{key}` not saved: {err}");
        }
    });
}

fn persist_change(store: &Rc<dyn PrefsStore>, change: SettingsChange, prefs: SettingsPrefs) {
    match change {
        SettingsChange::Brightness(_) => persist(store.clone(), BRIGHTNESS_KEY, prefs.brightness),
        SettingsChange::Volume(_) => persist(store.clone(), VOLUME_KEY, prefs.volume),
        SettingsChange::DarkMode(_) => persist(store.clone(), DARK_MODE_KEY, prefs.dark_mode),
    }
}

/// Live settings plus the edits made before the stored values arrived.
///
/// Edits made while loading win over the stored values and are saved once loading finishes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct SettingsSession {
    prefs: SettingsPrefs,
    loaded: bool,
    pending: Vec<SettingsChange>,
}

impl SettingsSession {
    /// Applies a user edit. Returns whether it can be saved right away.
    fn change(&mut self, change: SettingsChange) -> bool {
        self.prefs = change.apply(self.prefs).clamped();
        if self.loaded {
            return true;
        }
        self.pending.retain(|queued| !queued.same_setting(change));
        self.pending.push(change);
        false
    }

    /// Merges the stored values under any early edits and returns the edits still to save.
    fn finish_load(&mut self, stored: SettingsPrefs) -> Vec<SettingsChange> {
        let pending = std::mem::take(&mut self.pending);
        self.prefs = pending
            .iter()
            .fold(stored, |prefs, change| change.apply(prefs))
            .clamped();
        self.loaded = true;
        pending
    }
}

fn parse_percent(raw: &str, fallback: u8) -> u8 {
    raw.parse::<u8>().unwrap_or(fallback)
}

#[component]
/// Settings window contents.
pub fn SettingsApp(
    /// Preference store shared with the shell.
    prefs: Rc<dyn PrefsStore>,
    /// Signed-in display name.
    #[prop(into)]
    user_name: Signal<String>,
) -> impl IntoView {
    let session = create_rw_signal(SettingsSession::default());
    let settings = create_memo(move |_| session.with(|session| session.prefs));
    let online = create_rw_signal(document::is_online());
    let battery = create_rw_signal(None::<u8>);

    {
        let prefs = prefs.clone();
        spawn_local(async move {
            let stored = load_settings_prefs(prefs.as_ref()).await;
            let mut unsaved = Vec::new();
            if session
                .try_update(|session| unsaved = session.finish_load(stored))
                .is_none()
            {
                return;
            }
            let current = session.with_untracked(|session| session.prefs);
            apply_display_prefs(&current);
            for change in unsaved {
                persist_change(&prefs, change, current);
            }
        });
    }
    spawn_local(async move {
        let level = document::battery_percent().await;
        let _ = battery.try_set(level);
    });

    let online_listener = window_event_listener(ev::online, move |_| online.set(true));
    let offline_listener = window_event_listener(ev::offline, move |_| online.set(false));
    on_cleanup(move || {
        online_listener.remove();
        offline_listener.remove();
    });

    let update = {
        let prefs = prefs.clone();
        move |change: SettingsChange| {
            let mut save_now = false;
            session.update(|session| save_now = session.change(change));
            let next = settings.get_untracked();
            apply_display_prefs(&next);
            if save_now {
                persist_change(&prefs, change, next);
            }
        }
    };
    let update = store_value(update);

    view! {
        <div class="app-shell app-settings-shell">
            <Stack gap=LayoutGap::Lg>
                <Panel ui_slot="settings-profile">
                    <Cluster>
                        <Icon icon=IconName::User size=IconSize::Lg />
                        <Stack gap=LayoutGap::Sm>
                            <Heading>{move || user_name.get()}</Heading>
                            <Text tone=TextTone::Secondary>"Local Account"</Text>
                        </Stack>
                    </Cluster>
                </Panel>

                <Panel ui_slot="settings-brightness">
                    <FieldGroup title="Display Brightness">
                        <Cluster>
                            <Icon icon=IconName::Sun />
                            <RangeField
                                min="30"
                                max="100"
                                step="5"
                                aria_label="Display brightness"
                                value=Signal::derive(move || settings.get().brightness.to_string())
                                on_input=Callback::new(move |ev| {
                                    let raw = event_target_value(&ev);
                                    let value = parse_percent(&raw, settings.get_untracked().brightness);
                                    update.with_value(|update| update(SettingsChange::Brightness(value)));
                                })
                            />
                            <Badge>{move || format!("{}%", settings.get().brightness)}</Badge>
                        </Cluster>
                    </FieldGroup>
                </Panel>

                <Panel ui_slot="settings-volume">
                    <FieldGroup title="System Volume">
                        <Cluster>
                            <Icon icon=IconName::Volume />
                            <RangeField
                                min="0"
                                max="100"
                                step="5"
                                aria_label="System volume"
                                value=Signal::derive(move || settings.get().volume.to_string())
                                on_input=Callback::new(move |ev| {
                                    let raw = event_target_value(&ev);
                                    let value = parse_percent(&raw, settings.get_untracked().volume);
                                    update.with_value(|update| update(SettingsChange::Volume(value)));
                                })
                            />
                            <Badge>{move || format!("{}%", settings.get().volume)}</Badge>
                        </Cluster>
                    </FieldGroup>
                </Panel>

                <Grid columns=2>
                    <Panel ui_slot="settings-network">
                        <Cluster>
                            {move || {
                                let icon = if online.get() { IconName::Wifi } else { IconName::WifiOff };
                                view! { <Icon icon /> }
                            }}
                            <Stack gap=LayoutGap::Sm>
                                <Text role=TextRole::Label>"Network"</Text>
                                <Text tone=TextTone::Secondary>
                                    {move || if online.get() { "Connected" } else { "Offline" }}
                                </Text>
                            </Stack>
                        </Cluster>
                    </Panel>
                    <Panel ui_slot="settings-battery">
                        <Cluster>
                            <Icon icon=IconName::Battery />
                            <Stack gap=LayoutGap::Sm>
                                <Text role=TextRole::Label>"Battery"</Text>
                                <Text tone=TextTone::Secondary>
                                    {move || battery_label(battery.get())}
                                </Text>
                            </Stack>
                        </Cluster>
                    </Panel>
                </Grid>

                <Panel ui_slot="settings-theme">
                    <Cluster>
                        {move || {
                            let icon = if settings.get().dark_mode { IconName::Moon } else { IconName::Sun };
                            view! { <Icon icon /> }
                        }}
                        <Text role=TextRole::Label>"Dark Mode"</Text>
                        <Switch
                            aria_label="Dark mode"
                            checked=Signal::derive(move || settings.get().dark_mode)
                            on_toggle=Callback::new(move |enabled| {
                                update.with_value(|update| update(SettingsChange::DarkMode(enabled)));
                            })
                        />
                    </Cluster>
                </Panel>
            </Stack>
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsChange {
    Brightness(u8),
    Volume(u8),
    DarkMode(bool),
}

impl SettingsChange {
    fn same_setting(self, other: Self) -> bool {
        std::mem::discriminant(&self) == std::mem::discriminant(&other)
    }

    fn apply(self, prefs: SettingsPrefs) -> SettingsPrefs {
        match self {
            Self::Brightness(brightness) => SettingsPrefs { brightness, ..prefs },
            Self::Volume(volume) => SettingsPrefs { volume, ..prefs },
            Self::DarkMode(dark_mode) => SettingsPrefs { dark_mode, ..prefs },
        }
    }
}

fn battery_label(level: Option<u8>) -> String {
    level.map_or_else(|| "N/A".to_string(), |level| format!("{level}%"))
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::MemoryPrefsStore;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_store_yields_defaults() {
        let store = MemoryPrefsStore::default();
        assert_eq!(block_on(load_settings_prefs(&store)), SettingsPrefs::default());
    }

    #[test]
    fn stored_values_are_loaded_as_json_scalars() {
        let store = MemoryPrefsStore::default();
        block_on(async {
            store.save_pref(BRIGHTNESS_KEY, "85").await.expect("save");
            store.save_pref(VOLUME_KEY, "40").await.expect("save");
            store.save_pref(DARK_MODE_KEY, "true").await.expect("save");
        });

        let prefs = block_on(load_settings_prefs(&store));
        assert_eq!(
            prefs,
            SettingsPrefs {
                brightness: 85,
                volume: 40,
                dark_mode: true,
            }
        );
    }

    #[test]
    fn malformed_and_out_of_range_values_fall_back() {
        let store = MemoryPrefsStore::default();
        block_on(async {
            store.save_pref(BRIGHTNESS_KEY, "5").await.expect("save");
            store.save_pref(VOLUME_KEY, "\"loud\"").await.expect("save");
            store.save_pref(DARK_MODE_KEY, "maybe").await.expect("save");
        });

        let prefs = block_on(load_settings_prefs(&store));
        assert_eq!(prefs.brightness, BRIGHTNESS_MIN);
        assert_eq!(prefs.volume, 75);
        assert!(!prefs.dark_mode);
    }

    #[test]
    fn save_setting_writes_plain_json() {
        let store = MemoryPrefsStore::default();
        block_on(save_setting(&store, VOLUME_KEY, &55_u8)).expect("save volume");
        block_on(save_setting(&store, DARK_MODE_KEY, &false)).expect("save dark mode");
        assert_eq!(store.raw(VOLUME_KEY).as_deref(), Some("55"));
        assert_eq!(store.raw(DARK_MODE_KEY).as_deref(), Some("false"));
    }

    #[test]
    fn changes_replace_one_field() {
        let prefs = SettingsChange::Volume(10).apply(SettingsPrefs::default());
        assert_eq!(prefs.volume, 10);
        assert_eq!(prefs.brightness, 100);
        assert_eq!(
            SettingsChange::Brightness(200).apply(prefs).clamped().brightness,
            BRIGHTNESS_MAX
        );
    }

    #[test]
    fn edits_before_load_win_and_are_saved_after_it() {
        let mut session = SettingsSession::default();
        assert!(!session.change(SettingsChange::Volume(20)));
        assert!(!session.change(SettingsChange::Volume(30)));
        assert_eq!(session.prefs.volume, 30);

        let stored = SettingsPrefs {
            brightness: 85,
            volume: 40,
            dark_mode: true,
        };
        let unsaved = session.finish_load(stored);

        assert_eq!(unsaved, vec![SettingsChange::Volume(30)]);
        assert_eq!(
            session.prefs,
            SettingsPrefs {
                brightness: 85,
                volume: 30,
                dark_mode: true,
            }
        );
    }

    #[test]
    fn edits_after_load_save_immediately() {
        let mut session = SettingsSession::default();
        assert!(session.finish_load(SettingsPrefs::default()).is_empty());
        assert!(session.change(SettingsChange::DarkMode(true)));
        assert!(session.prefs.dark_mode);
        assert!(session.pending.is_empty());
    }

    #[test]
    fn battery_label_handles_missing_level() {
        assert_eq!(battery_label(None), "N/A");
        assert_eq!(battery_label(Some(64)), "64%");
    }
}
