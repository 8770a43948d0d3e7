//! Pure taskbar presenter helpers: window buttons, launcher menu state, and the clock.

use crate::{
    apps::LauncherEntry,
    model::{DesktopState, OpenWindowRequest, WindowId},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// One taskbar button per open window.
pub struct TaskbarButton {
    pub window_id: WindowId,
    pub title: String,
    pub minimized: bool,
    pub focused: bool,
}

impl TaskbarButton {
    pub fn class_name(&self) -> &'static str {
        match (self.minimized, self.focused) {
            (true, _) => "taskbar-button minimized",
            (false, true) => "taskbar-button focused",
            (false, false) => "taskbar-button",
        }
    }
}

/// Taskbar buttons in open order, independent of stacking.
pub fn taskbar_buttons(state: &DesktopState) -> Vec<TaskbarButton> {
    let mut buttons: Vec<TaskbarButton> = state
        .windows
        .iter()
        .map(|win| TaskbarButton {
            window_id: win.id,
            title: win.title.clone(),
            minimized: win.minimized,
            focused: win.is_focused,
        })
        .collect();
    buttons.sort_by_key(|button| button.window_id);
    buttons
}

/// Case-insensitive substring filter on display names; a blank query keeps everything.
pub fn filter_launcher_entries(entries: &[LauncherEntry], query: &str) -> Vec<LauncherEntry> {
    let needle = query.trim().to_lowercase();
    entries
        .iter()
        .filter(|entry| needle.is_empty() || entry.display_name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Transient launcher menu state. Never persisted.
pub struct LauncherMenuState {
    pub open: bool,
    pub query: String,
}

impl LauncherMenuState {
    /// Opens or closes the menu. Closing clears the filter.
    pub fn toggle(&mut self) {
        self.open = !self.open;
        if !self.open {
            self.query.clear();
        }
    }

    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Closes the menu and returns the request that opens `entry`.
    pub fn select(&mut self, entry: &LauncherEntry) -> OpenWindowRequest {
        self.close();
        entry.open_request()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Wall-clock reading shown in the taskbar tray.
pub struct TaskbarClockSnapshot {
    pub hour: u32,
    pub minute: u32,
}

impl TaskbarClockSnapshot {
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let seconds_today = (platform_host::unix_time_ms_now() / 1000) % 86_400;
            Self {
                hour: (seconds_today / 3600) as u32,
                minute: ((seconds_today % 3600) / 60) as u32,
            }
        }
    }
}

pub fn format_taskbar_clock(snapshot: TaskbarClockSnapshot) -> String {
    format!("{:02}:{:02}", snapshot.hour, snapshot.minute)
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::ApplicationId;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::InteractionState,
        reducer::{reduce_desktop, DesktopAction},
    };

    fn entry(id: &str, name: &str) -> LauncherEntry {
        LauncherEntry {
            app_id: ApplicationId::new(id),
            display_name: name.to_string(),
            icon_id: id.to_string(),
        }
    }

    #[test]
    fn buttons_follow_open_order_and_flag_state() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        for title in ["A", "B"] {
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::OpenWindow(OpenWindowRequest::new("editor", title)),
            );
        }
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow {
                window_id: WindowId(1),
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                window_id: WindowId(2),
            },
        );

        let buttons = taskbar_buttons(&state);
        let titles: Vec<&str> = buttons.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
        assert!(buttons[0].focused);
        assert!(buttons[1].minimized);
        assert_eq!(buttons[1].class_name(), "taskbar-button minimized");
    }

    #[test]
    fn launcher_filter_is_case_insensitive_substring() {
        let entries = vec![
            entry("calculator", "Calculator"),
            entry("terminal", "Terminal"),
            entry("editor", "Text Editor"),
        ];

        let filtered = filter_launcher_entries(&entries, "  EDIT ");
        assert_eq!(filtered, vec![entry("editor", "Text Editor")]);
        assert_eq!(filter_launcher_entries(&entries, "").len(), 3);
        assert!(filter_launcher_entries(&entries, "zzz").is_empty());
    }

    #[test]
    fn selecting_an_entry_closes_menu_and_returns_open_request() {
        let mut menu = LauncherMenuState::default();
        menu.toggle();
        menu.set_query("calc");

        let request = menu.select(&entry("calculator", "Calculator"));

        assert_eq!(request, OpenWindowRequest::new("calculator", "Calculator"));
        assert_eq!(menu, LauncherMenuState::default());
    }

    #[test]
    fn toggling_closed_clears_query() {
        let mut menu = LauncherMenuState::default();
        menu.toggle();
        menu.set_query("term");
        menu.toggle();
        assert!(!menu.open);
        assert_eq!(menu.query, "");
    }

    #[test]
    fn clock_formats_as_zero_padded_hours_and_minutes() {
        assert_eq!(
            format_taskbar_clock(TaskbarClockSnapshot { hour: 7, minute: 5 }),
            "07:05"
        );
        let now = TaskbarClockSnapshot::now();
        assert!(now.hour < 24 && now.minute < 60);
    }
}
