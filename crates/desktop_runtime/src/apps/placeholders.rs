//! Built-in placeholder collaborators hosted inside desktop windows.
//!
//! Apps may read derived runtime state (the installed list, the host prefs store) from context,
//! but every desktop change is requested by publishing on the [`SignalPublisher`] in their mount
//! context.

use std::rc::Rc;

use desktop_app_contract::{
    window_primary_input_dom_id, AppMountContext, BackgroundKind, DesktopSignal, InstalledApp,
    SignalPublisher, WindowRuntimeId,
};
use leptos::*;
use platform_host::{unix_time_ms_now, NoopPrefsStore, PrefsStore};

use crate::{
    apps::{app_catalog, AppManifest},
    persistence,
    runtime_context::DesktopRuntimeContext,
    wallpaper::{background_presets, preset_swatch_style, BackgroundPreset},
};

const TERMINAL_MAX_LINES: usize = 200;
/// Folder the editor reads and writes.
const EDITOR_FOLDER: &str = "/Documents";
const EDITOR_DEFAULT_FILENAME: &str = "Untitled.txt";
const TERMINAL_HELP: &str =
    "commands: open <app-id> [title], bg <image|color|gradient>, clear, help";

pub(super) fn mount_calculator_app(_: AppMountContext) -> View {
    view! { <CalculatorApp /> }.into_view()
}

pub(super) fn mount_terminal_app(context: AppMountContext) -> View {
    view! { <TerminalApp window_id=context.window_id publisher=context.publisher /> }
        .into_view()
}

pub(super) fn mount_editor_app(context: AppMountContext) -> View {
    view! { <EditorApp window_id=context.window_id title=context.title /> }.into_view()
}

pub(super) fn mount_settings_app(context: AppMountContext) -> View {
    view! { <SettingsApp publisher=context.publisher /> }.into_view()
}

pub(super) fn mount_app_store_app(context: AppMountContext) -> View {
    view! { <AppStoreApp publisher=context.publisher /> }.into_view()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CalculatorOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl CalculatorOp {
    fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Returns `None` for division by zero.
    fn apply(self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Self::Add => Some(lhs + rhs),
            Self::Subtract => Some(lhs - rhs),
            Self::Multiply => Some(lhs * rhs),
            Self::Divide if rhs == 0.0 => None,
            Self::Divide => Some(lhs / rhs),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct CalculatorState {
    display: String,
    pending: Option<(f64, CalculatorOp)>,
    fresh_entry: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            pending: None,
            fresh_entry: true,
        }
    }
}

impl CalculatorState {
    fn push_digit(&mut self, digit: char) {
        if self.fresh_entry || self.display == "0" || self.display == "Error" {
            self.display.clear();
            self.fresh_entry = false;
        }
        if digit == '.' && self.display.contains('.') {
            return;
        }
        if digit == '.' && self.display.is_empty() {
            self.display.push('0');
        }
        self.display.push(digit);
    }

    fn value(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }

    fn set_operator(&mut self, op: CalculatorOp) {
        self.equals();
        if self.display != "Error" {
            self.pending = Some((self.value(), op));
        }
        self.fresh_entry = true;
    }

    fn equals(&mut self) {
        let Some((lhs, op)) = self.pending.take() else {
            return;
        };
        self.display = match op.apply(lhs, self.value()) {
            Some(result) => format_calculator_value(result),
            None => "Error".to_string(),
        };
        self.fresh_entry = true;
    }
}

fn format_calculator_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[component]
fn CalculatorApp() -> impl IntoView {
    let state = create_rw_signal(CalculatorState::default());
    let digits = ['7', '8', '9', '4', '5', '6', '1', '2', '3', '0', '.'];
    let ops = [
        CalculatorOp::Add,
        CalculatorOp::Subtract,
        CalculatorOp::Multiply,
        CalculatorOp::Divide,
    ];

    view! {
        <div class="app-shell app-calculator">
            <output class="calculator-display">{move || state.with(|s| s.display.clone())}</output>
            <div class="calculator-keys" role="group" aria-label="Calculator keys">
                {digits
                    .into_iter()
                    .map(|digit| {
                        view! {
                            <button
                                type="button"
                                class="app-action"
                                on:click=move |_| state.update(|s| s.push_digit(digit))
                            >
                                {digit.to_string()}
                            </button>
                        }
                    })
                    .collect_view()}
                {ops
                    .into_iter()
                    .map(|op| {
                        view! {
                            <button
                                type="button"
                                class="app-action operator"
                                on:click=move |_| state.update(|s| s.set_operator(op))
                            >
                                {op.symbol()}
                            </button>
                        }
                    })
                    .collect_view()}
                <button
                    type="button"
                    class="app-action"
                    on:click=move |_| state.update(|s| s.equals())
                >
                    "="
                </button>
                <button
                    type="button"
                    class="app-action"
                    on:click=move |_| state.set(CalculatorState::default())
                >
                    "C"
                </button>
            </div>
        </div>
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Parsed terminal input line.
pub(crate) enum TerminalCommand {
    Empty,
    Help,
    Clear,
    Publish(DesktopSignal),
    Usage(&'static str),
    Unknown(String),
}

/// Parses one line typed into the terminal placeholder.
pub(crate) fn parse_terminal_command(line: &str) -> TerminalCommand {
    let line = line.trim();
    let (command, rest) = line
        .split_once(char::is_whitespace)
        .map(|(command, rest)| (command, rest.trim()))
        .unwrap_or((line, ""));

    match command {
        "" => TerminalCommand::Empty,
        "help" => TerminalCommand::Help,
        "clear" => TerminalCommand::Clear,
        "open" => {
            let (app_id, title) = rest
                .split_once(char::is_whitespace)
                .map(|(app_id, title)| (app_id, title.trim()))
                .unwrap_or((rest, ""));
            if app_id.is_empty() {
                TerminalCommand::Usage("usage: open <app-id> [title]")
            } else {
                TerminalCommand::Publish(DesktopSignal::open_app(app_id, title))
            }
        }
        "bg" => {
            if rest.is_empty() {
                TerminalCommand::Usage("usage: bg <image|color|gradient>")
            } else {
                TerminalCommand::Publish(DesktopSignal::change_background(
                    rest,
                    BackgroundKind::infer(rest),
                ))
            }
        }
        other => TerminalCommand::Unknown(other.to_string()),
    }
}

#[component]
fn TerminalApp(window_id: WindowRuntimeId, publisher: SignalPublisher) -> impl IntoView {
    let publisher = store_value(publisher);
    let lines = create_rw_signal(vec![TERMINAL_HELP.to_string()]);
    let input = create_rw_signal(String::new());

    let run = move || {
        let line = input.get_untracked();
        input.set(String::new());
        let output = match parse_terminal_command(&line) {
            TerminalCommand::Empty => None,
            TerminalCommand::Help => Some(TERMINAL_HELP.to_string()),
            TerminalCommand::Clear => {
                lines.set(Vec::new());
                return;
            }
            TerminalCommand::Publish(signal) => {
                let token = signal.token();
                publisher.with_value(|publisher| publisher.publish(signal));
                Some(format!("sent {token}"))
            }
            TerminalCommand::Usage(usage) => Some(usage.to_string()),
            TerminalCommand::Unknown(command) => Some(format!("{command}: command not found")),
        };
        lines.update(|lines| {
            lines.push(format!("$ {line}"));
            lines.extend(output);
            if lines.len() > TERMINAL_MAX_LINES {
                let overflow = lines.len() - TERMINAL_MAX_LINES;
                lines.drain(0..overflow);
            }
        });
    };

    view! {
        <div class="app-shell app-terminal">
            <pre class="terminal-output">{move || lines.get().join("\n")}</pre>
            <input
                id=window_primary_input_dom_id(window_id)
                class="terminal-input"
                type="text"
                aria-label="Terminal input"
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=move |ev: ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        run();
                    }
                }
            />
        </div>
    }
}

/// Text field value to a file name; blank input falls back to the default name.
fn editor_filename(raw: &str) -> String {
    let name = raw.trim().trim_matches('/');
    if name.is_empty() {
        EDITOR_DEFAULT_FILENAME.to_string()
    } else {
        name.replace('/', "-")
    }
}

fn editor_prefs_store() -> Rc<dyn PrefsStore> {
    use_context::<DesktopRuntimeContext>()
        .map(|runtime| runtime.host.with_value(|host| host.prefs_store()))
        .unwrap_or_else(|| Rc::new(NoopPrefsStore))
}

#[component]
fn EditorApp(window_id: WindowRuntimeId, title: String) -> impl IntoView {
    let prefs = store_value(editor_prefs_store());
    let text = create_rw_signal(String::new());
    let filename = create_rw_signal(EDITOR_DEFAULT_FILENAME.to_string());
    let status = create_rw_signal(String::new());

    let save = move |_: ev::MouseEvent| {
        let store = prefs.get_value();
        let name = editor_filename(&filename.get_untracked());
        let content = text.get_untracked();
        spawn_local(async move {
            let mut tree = persistence::load_file_tree_or_default(store.as_ref()).await;
            tree.save_file(EDITOR_FOLDER, &name, &content, unix_time_ms_now());
            let message = match persistence::persist_file_tree(store.as_ref(), &tree).await {
                Ok(()) => format!("Saved {EDITOR_FOLDER}/{name}"),
                Err(err) => {
                    logging::warn!("editor save failed: {err}");
                    format!("Could not save {name}")
                }
            };
            status.try_set(message);
        });
    };
    let open = move |_: ev::MouseEvent| {
        let store = prefs.get_value();
        let name = editor_filename(&filename.get_untracked());
        spawn_local(async move {
            let tree = persistence::load_file_tree_or_default(store.as_ref()).await;
            match tree.load_file(EDITOR_FOLDER, &name) {
                Some(content) => {
                    text.try_set(content.to_string());
                    status.try_set(format!("Opened {EDITOR_FOLDER}/{name}"));
                }
                None => {
                    status.try_set(format!("{name} not found in {EDITOR_FOLDER}"));
                }
            }
        });
    };

    view! {
        <div class="app-shell app-editor">
            <div class="app-toolbar">
                <input
                    type="text"
                    aria-label="File name"
                    prop:value=move || filename.get()
                    on:input=move |ev| filename.set(event_target_value(&ev))
                />
                <button type="button" class="app-action" on:click=open>"Open"</button>
                <button type="button" class="app-action" on:click=save>"Save"</button>
            </div>
            <textarea
                id=window_primary_input_dom_id(window_id)
                class="editor-body"
                aria-label=title
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            ></textarea>
            <div class="app-statusbar">
                <span>{move || format!("{} characters", text.with(|t| t.chars().count()))}</span>
                <span>{move || status.get()}</span>
            </div>
        </div>
    }
}

#[component]
fn SettingsApp(publisher: SignalPublisher) -> impl IntoView {
    let publisher = store_value(publisher);
    let custom = create_rw_signal(String::new());
    let apply = move |preset: BackgroundPreset| {
        publisher.with_value(|publisher| {
            publisher.publish(DesktopSignal::change_background(preset.value, preset.kind))
        });
    };
    let apply_custom = move |_: ev::MouseEvent| {
        let value = custom.get_untracked();
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        publisher.with_value(|publisher| {
            publisher.publish(DesktopSignal::change_background(
                value,
                BackgroundKind::infer(value),
            ))
        });
    };

    view! {
        <div class="app-shell app-settings">
            <h2>"Background"</h2>
            <div class="background-grid" role="list">
                {background_presets()
                    .into_iter()
                    .map(|preset| {
                        view! {
                            <button
                                type="button"
                                role="listitem"
                                class="background-swatch"
                                data-kind=preset.kind.token()
                                title=preset.name
                                style=preset_swatch_style(&preset)
                                on:click=move |_| apply(preset)
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="app-toolbar">
                <input
                    type="text"
                    placeholder="Image URL, #color or gradient"
                    prop:value=move || custom.get()
                    on:input=move |ev| custom.set(event_target_value(&ev))
                />
                <button type="button" class="app-action" on:click=apply_custom>
                    "Apply"
                </button>
            </div>
        </div>
    }
}

fn stamped_install(manifest: &AppManifest) -> InstalledApp {
    InstalledApp {
        installed_at_unix_ms: unix_time_ms_now(),
        ..manifest.to_installed_app()
    }
}

#[component]
fn AppStoreApp(publisher: SignalPublisher) -> impl IntoView {
    let publisher = store_value(publisher);
    let runtime = use_context::<DesktopRuntimeContext>();
    let is_installed = move |manifest: &AppManifest| {
        let app_id = manifest.application_id();
        runtime.is_some_and(|runtime| {
            runtime
                .state
                .with(|state| state.installed_apps.iter().any(|app| app.app_id == app_id))
        })
    };

    view! {
        <div class="app-shell app-store">
            <ul class="app-store-list">
                {app_catalog()
                    .iter()
                    .map(|manifest| {
                        let app_id = manifest.application_id();
                        view! {
                            <li class="app-store-entry">
                                <span class="app-store-name">{manifest.display_name.clone()}</span>
                                <span class="app-store-size">{manifest.size_label.clone()}</span>
                                <Show
                                    when=move || is_installed(manifest)
                                    fallback=move || {
                                        view! {
                                            <button
                                                type="button"
                                                class="app-action"
                                                on:click=move |_| {
                                                    let signal = DesktopSignal::AppInstalled(
                                                        stamped_install(manifest),
                                                    );
                                                    publisher.with_value(|p| p.publish(signal));
                                                }
                                            >
                                                "Install"
                                            </button>
                                        }
                                    }
                                >
                                    {
                                        let app_id = app_id.clone();
                                        view! {
                                            <button
                                                type="button"
                                                class="app-action"
                                                on:click=move |_| {
                                                    let signal = DesktopSignal::AppRemoved {
                                                        app_id: app_id.clone(),
                                                    };
                                                    publisher.with_value(|p| p.publish(signal));
                                                }
                                            >
                                                "Remove"
                                            </button>
                                        }
                                    }
                                </Show>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn open_command_publishes_open_app_with_optional_title() {
        assert_eq!(
            parse_terminal_command("open calculator"),
            TerminalCommand::Publish(DesktopSignal::open_app("calculator", ""))
        );
        assert_eq!(
            parse_terminal_command("  open editor   My Notes "),
            TerminalCommand::Publish(DesktopSignal::open_app("editor", "My Notes"))
        );
        assert!(matches!(
            parse_terminal_command("open"),
            TerminalCommand::Usage(_)
        ));
    }

    #[test]
    fn bg_command_infers_background_kind() {
        assert_eq!(
            parse_terminal_command("bg #2a4365"),
            TerminalCommand::Publish(DesktopSignal::change_background(
                "#2a4365",
                BackgroundKind::Color
            ))
        );
        assert_eq!(
            parse_terminal_command("bg linear-gradient(135deg, #f093fb 0%, #f5576c 100%)"),
            TerminalCommand::Publish(DesktopSignal::change_background(
                "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
                BackgroundKind::Gradient
            ))
        );
    }

    #[test]
    fn other_lines_are_classified_locally() {
        assert_eq!(parse_terminal_command("   "), TerminalCommand::Empty);
        assert_eq!(parse_terminal_command("help"), TerminalCommand::Help);
        assert_eq!(parse_terminal_command("clear"), TerminalCommand::Clear);
        assert_eq!(
            parse_terminal_command("rm -rf /"),
            TerminalCommand::Unknown("rm".to_string())
        );
    }

    #[test]
    fn editor_filenames_are_flattened_into_the_documents_folder() {
        assert_eq!(editor_filename("  notes.txt "), "notes.txt");
        assert_eq!(editor_filename("/a/b.txt"), "a-b.txt");
        assert_eq!(editor_filename("   "), EDITOR_DEFAULT_FILENAME);
    }

    #[test]
    fn calculator_chains_operations_and_reports_division_by_zero() {
        let mut calc = CalculatorState::default();
        calc.push_digit('1');
        calc.push_digit('2');
        calc.set_operator(CalculatorOp::Add);
        calc.push_digit('3');
        calc.set_operator(CalculatorOp::Multiply);
        calc.push_digit('2');
        calc.equals();
        assert_eq!(calc.display, "30");

        calc.set_operator(CalculatorOp::Divide);
        calc.push_digit('0');
        calc.equals();
        assert_eq!(calc.display, "Error");

        calc.push_digit('.');
        calc.push_digit('5');
        assert_eq!(calc.display, "0.5");
    }
}
