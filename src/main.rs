mod app;
mod components;
mod config;
mod event;
mod logging;
mod picker;
mod reminder;
mod theme;
mod tui;

use std::time::{Duration, Instant};

use app::{App, Focus};
use chrono::{Local, NaiveDateTime};
use color_eyre::Result;
use config::Config;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};
use picker::Picker;
use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;
use tracing::info;

const TICK_RATE: Duration = Duration::from_millis(100);

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::load()?;
    let _log_guard = logging::init(&config.log_level)?;
    theme::init(&config.theme);
    info!(
        theme = %theme::current().name,
        reset_draft_after_add = config.reset_draft_after_add,
        "session started"
    );

    let mut app = App::new(&config);
    let mut terminal = tui::init()?;
    let result = run(&mut terminal, &mut app).await;
    tui::restore()?;

    info!(reminders = app.reminders.len(), "session ended");
    result
}

async fn run(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    let mut events = EventHandler::new(TICK_RATE);

    while app.running {
        app.sync_toast(Instant::now());
        terminal.draw(|frame| render(frame, app))?;

        match events.next().await {
            Some(Event::Key(key)) => {
                let before = app.reminders.clone();
                handle_key(app, key, Local::now().naive_local());
                if !app.reminders.same_as(&before) {
                    app.clamp_scroll();
                }
            }
            Some(Event::Resize) | Some(Event::Tick) => {}
            None => break,
        }
    }

    Ok(())
}

fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = Layout::vertical([
        Constraint::Length(components::ReminderForm::HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    components::ReminderForm::render(frame, layout[0], &app.draft, app.focus);
    components::ReminderListView::render(frame, layout[1], &app.reminders, app.list_scroll);
    components::StatusBar::render(frame, layout[2], app);

    if let Some(ref picker) = app.picker {
        components::PickerPopup::render(frame, area, picker);
    }
    if app.show_help {
        components::Help::render(frame, area);
    }
}

fn handle_key(app: &mut App, key: KeyEvent, now: NaiveDateTime) {
    // Any key dismisses the current confirmation
    app.dismiss_toast();

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => return app.quit(),
        (KeyCode::Char('s'), KeyModifiers::CONTROL) if app.picker.is_none() && !app.show_help => {
            return app.set_reminder();
        }
        _ => {}
    }

    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            app.show_help = false;
        }
        return;
    }

    if app.picker.is_some() {
        handle_picker_input(app, key.code, now);
        return;
    }

    match app.focus {
        Focus::Message => handle_message_input(app, key.code),
        _ => handle_form_input(app, key.code, now),
    }
}

fn handle_message_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Tab | KeyCode::Enter | KeyCode::Esc | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(c) => app.input_char(c),
        _ => {}
    }
}

fn handle_form_input(app: &mut App, code: KeyCode, now: NaiveDateTime) {
    match code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Tab | KeyCode::Right => app.focus_next(),
        KeyCode::BackTab | KeyCode::Left => app.focus_prev(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            let focused = app.focus;
            press(app, focused, now);
        }
        KeyCode::Char('d') => press(app, Focus::SelectDate, now),
        KeyCode::Char('t') => press(app, Focus::SelectTime, now),
        KeyCode::Char('s') => press(app, Focus::SetReminder, now),
        KeyCode::Char('c') => press(app, Focus::ClearAll, now),
        KeyCode::Char('i') => app.focus = Focus::Message,
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
        KeyCode::Char('?') => app.show_help = true,
        _ => {}
    }
}

fn press(app: &mut App, button: Focus, now: NaiveDateTime) {
    match button {
        Focus::Message => {}
        Focus::SelectDate => app.open_date_picker(now.date()),
        Focus::SelectTime => app.open_time_picker(now.time()),
        Focus::SetReminder => app.set_reminder(),
        Focus::ClearAll => app.clear_all(),
    }
}

fn handle_picker_input(app: &mut App, code: KeyCode, now: NaiveDateTime) {
    match code {
        KeyCode::Esc => return app.cancel_picker(),
        KeyCode::Enter => return app.confirm_picker(),
        _ => {}
    }

    match app.picker.as_mut() {
        Some(Picker::Date(p)) => match code {
            KeyCode::Up | KeyCode::Char('k') => p.increment(),
            KeyCode::Down | KeyCode::Char('j') => p.decrement(),
            KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => p.focus_next(),
            KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => p.focus_prev(),
            KeyCode::Char('t') => p.jump_to(now.date()),
            _ => {}
        },
        Some(Picker::Time(p)) => match code {
            KeyCode::Up | KeyCode::Char('k') => p.increment(),
            KeyCode::Down | KeyCode::Char('j') => p.decrement(),
            KeyCode::Left
            | KeyCode::Right
            | KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Char('h')
            | KeyCode::Char('l') => p.toggle_focus(),
            KeyCode::Char(c) => {
                if let Some(d) = c.to_digit(10) {
                    p.type_digit(d);
                }
            }
            _ => {}
        },
        None => {}
    }
}
