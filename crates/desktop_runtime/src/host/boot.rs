use desktop_app_settings::{apply_display_prefs, load_settings_prefs};
use leptos::spawn_local;

use crate::host::DesktopHostContext;

pub(super) fn install_display_prefs_hydration(host: DesktopHostContext) {
    spawn_local(async move {
        let prefs = load_settings_prefs(host.prefs_store().as_ref()).await;
        apply_display_prefs(&prefs);
    });
}
