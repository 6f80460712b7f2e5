//! Interactive résumé terminal UI component backed by the headless shell session.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod theme;

use std::{rc::Rc, time::Duration};

use leptos::ev::KeyboardEvent;
use leptos::*;
use platform_prefs::PrefsStore;
use resume_model::Resume;
use terminal_shell::{Completion, CommandOutput, NewerOutcome, ShellEffect, ShellSession};

/// Delay before skill bars animate to their target width, so the zero-width
/// markup is committed to the DOM first and the CSS transition has something
/// to transition from.
const SKILL_BAR_DELAY_MS: u64 = 100;

const OUTPUT_ID: &str = "output-log";
const INPUT_ID: &str = "user-input";

/// One rendered line of the output log.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LogEntry {
    id: usize,
    markup: String,
    is_command: bool,
}

fn append_entry(log: RwSignal<Vec<LogEntry>>, next_id: RwSignal<usize>, markup: String, is_command: bool) {
    let id = next_id.get_untracked();
    next_id.set(id + 1);
    log.update(|entries| {
        entries.push(LogEntry {
            id,
            markup,
            is_command,
        })
    });
}

/// Renders a command's result into the log and applies its side effect.
fn apply_output(log: RwSignal<Vec<LogEntry>>, next_id: RwSignal<usize>, output: CommandOutput) {
    if output.effect == Some(ShellEffect::ClearLog) {
        log.set(Vec::new());
        return;
    }
    if !output.markup.is_empty() {
        append_entry(log, next_id, output.markup, false);
    }
    if output.effect == Some(ShellEffect::AnimateSkillBars) {
        set_timeout(animate_skill_bars, Duration::from_millis(SKILL_BAR_DELAY_MS));
    }
    scroll_output_to_bottom();
}

/// Widens every `.progress` element currently in the document to the
/// percentage its `data-level` attribute names. Elements may have been
/// cleared between scheduling and firing; missing ones are skipped.
fn animate_skill_bars() {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        let Ok(bars) = document.query_selector_all(".progress") else {
            return;
        };
        for index in 0..bars.length() {
            let Some(bar) = bars.get(index) else {
                continue;
            };
            let Some(bar) = bar.dyn_ref::<web_sys::HtmlElement>() else {
                continue;
            };
            let Some(level) = bar.get_attribute("data-level") else {
                continue;
            };
            if bar.style().set_property("width", &format!("{level}%")).is_err() {
                logging::warn!("failed to set skill bar width");
            }
        }
    }
}

fn scroll_output_to_bottom() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(log) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(OUTPUT_ID))
        {
            log.set_scroll_top(log.scroll_height());
        }
    }
}

fn focus_input() {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        if let Some(input) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(INPUT_ID))
            .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
        {
            let _ = input.focus();
        }
    }
}

fn welcome_markup() -> String {
    "Welcome to the interactive resume. Type 'help' to list commands.".to_string()
}

#[component]
/// The terminal page: sidebar of command shortcuts, theme selector, output
/// log, and the prompt line.
///
/// All command semantics live in [`terminal_shell`]; this component only
/// routes keystrokes and renders the results.
pub fn TerminalApp(
    /// Résumé content served by the commands.
    resume: Resume,
    /// Preference store for the theme and command history.
    prefs: Rc<dyn PrefsStore>,
) -> impl IntoView {
    let session = store_value(ShellSession::new(resume, prefs.clone()));
    let log = create_rw_signal(Vec::<LogEntry>::new());
    let next_id = create_rw_signal(0usize);
    let input = create_rw_signal(String::new());
    let sidebar_open = create_rw_signal(true);
    let theme = create_rw_signal(theme::load_initial_theme(prefs.as_ref()));

    theme::apply_theme(&theme.get_untracked());
    append_entry(log, next_id, welcome_markup(), false);

    let command_names = session.with_value(|session| session.command_names());

    let submit = move || {
        let line = input.get_untracked();
        let outcome = session.try_update_value(|session| session.submit(&line)).flatten();
        input.set(String::new());
        if let Some(outcome) = outcome {
            if let Some(err) = &outcome.persist_error {
                logging::warn!("failed to persist command history: {err}");
            }
            append_entry(log, next_id, outcome.line, true);
            apply_output(log, next_id, outcome.output);
        }
        focus_input();
    };

    let navigate_older = move || {
        if let Some(text) = session.try_update_value(|session| session.navigate_older()).flatten() {
            input.set(text);
        }
    };

    let navigate_newer = move || {
        match session.try_update_value(|session| session.navigate_newer()).flatten() {
            Some(NewerOutcome::Entry(text)) => input.set(text),
            Some(NewerOutcome::UserLine) => input.set(String::new()),
            None => {}
        }
    };

    let autocomplete = move || {
        let current = input.get_untracked();
        match session.with_value(|session| session.complete(&current)) {
            Completion::Exact(name) => input.set(name),
            Completion::Partial { prefix, matches } => {
                input.set(prefix);
                append_entry(
                    log,
                    next_id,
                    format!("Matching commands: {}", matches.join(", ")),
                    false,
                );
                scroll_output_to_bottom();
            }
            Completion::NoMatch => {}
        }
    };

    // Sidebar shortcuts echo the command like a typed line but bypass history.
    let run_shortcut = move |name: &'static str| {
        let output = session.with_value(|session| session.run(name));
        append_entry(log, next_id, name.to_string(), true);
        apply_output(log, next_id, output);
        focus_input();
    };

    let prefs_for_theme = prefs.clone();
    let on_theme_change = move |ev: leptos::ev::Event| {
        let chosen = event_target_value(&ev);
        theme::apply_theme(&chosen);
        if let Err(err) = theme::persist_theme(prefs_for_theme.as_ref(), &chosen) {
            logging::warn!("failed to persist theme: {err}");
        }
        theme.set(chosen);
    };

    let sidebar_buttons = command_names
        .iter()
        .copied()
        .map(|name| {
            let summary = session
                .with_value(|session| session.command_summary(name))
                .unwrap_or("");
            view! {
                <button
                    type="button"
                    class="sidebar-item"
                    title=summary
                    on:click=move |_| run_shortcut(name)
                >
                    {name}
                </button>
            }
        })
        .collect_view();

    view! {
        <div id="terminal" class="terminal" on:click=move |_| focus_input()>
            <aside id="sidebar" class="sidebar" class:collapsed=move || !sidebar_open.get()>
                <div class="sidebar-title">"Commands"</div>
                {sidebar_buttons}
            </aside>

            <div
                id="main-content"
                class="main-content"
                class:full-width=move || !sidebar_open.get()
            >
                <div class="terminal-toolbar">
                    <button
                        type="button"
                        id="menu-btn"
                        class="menu-btn"
                        aria-label="Toggle sidebar"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            sidebar_open.update(|open| *open = !*open);
                        }
                    >
                        "☰"
                    </button>
                    <select
                        id="theme-select"
                        class="theme-select"
                        aria-label="Theme"
                        prop:value=move || theme.get()
                        on:change=on_theme_change
                    >
                        {theme::THEME_CHOICES
                            .iter()
                            .copied()
                            .map(|choice| {
                                view! {
                                    <option value=choice selected=move || theme.get() == choice>
                                        {choice}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div id=OUTPUT_ID class="terminal-content" role="log" aria-live="polite">
                    <For each=move || log.get() key=|entry| entry.id let:entry>
                        <div
                            class=if entry.is_command { "prompt command" } else { "output" }
                            inner_html=if entry.is_command {
                                format!("guest@resume:~$ {}", entry.markup)
                            } else {
                                entry.markup
                            }
                        ></div>
                    </For>
                </div>

                <div class="input-line">
                    <span class="prompt">"guest@resume:~$"</span>
                    <input
                        id=INPUT_ID
                        class="terminal-input"
                        type="text"
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=move |ev: KeyboardEvent| {
                            match ev.key().as_str() {
                                "Enter" => submit(),
                                "ArrowUp" => {
                                    ev.prevent_default();
                                    navigate_older();
                                }
                                "ArrowDown" => {
                                    ev.prevent_default();
                                    navigate_newer();
                                }
                                "Tab" => {
                                    ev.prevent_default();
                                    autocomplete();
                                }
                                _ => {}
                            }
                        }
                        autocomplete="off"
                        spellcheck="false"
                        autofocus=true
                    />
                </div>
            </div>
        </div>
    }
}
