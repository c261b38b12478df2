use std::io::IsTerminal;
use std::sync::OnceLock;

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub progress: bool,
    pub interactive: bool,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(quiet: bool) {
    let _ = UI_PREFS.set(UiPrefs {
        progress: std::io::stdout().is_terminal() && !quiet,
        interactive: std::io::stdin().is_terminal(),
    });
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        progress: false,
        interactive: false,
    })
}
