use std::fmt::Display;
use std::io::{stdout, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::event::{
    DisableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use crossterm::style::Color::{DarkBlue, DarkGreen, Reset, Yellow};
use crossterm::style::{
    Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{event, queue, terminal, ExecutableCommand};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use log::debug;
use tokio::runtime::Handle;

use misaki_core::api;
use misaki_core::board::Board;
use misaki_core::error::Result;
use misaki_core::http::HttpClient;
use misaki_core::view::ItemView;

use super::colors::{status_badge, AsTermColor};
use super::types::CycleDirection::{Down, Up};
use super::types::{BoardAction, CycleDirection, UiState, ViewportState};
use super::{DETAIL_HEIGHT, FILTER_KEY, FOOTER_HEIGHT, HEADER_HEIGHT};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Disable raw mode on drop
        let _ = disable_raw_mode();
        let mut stdout = stdout();
        let _ = stdout.execute(DisableMouseCapture);
        let _ = stdout.execute(LeaveAlternateScreen);
    }
}

/// Result of one trigger request, handed back to the UI loop.
struct Completion {
    name: String,
    outcome: Result<()>,
}

/// Number of list rows available in a terminal `height` rows tall.
pub fn list_height(height: u16) -> u16 {
    height.saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT)
}

/// Shows the interactive command list until the user quits.
///
/// Triggers run on `runtime` while the list stays responsive. Their results
/// come back over a channel and are settled on the board by this loop, which
/// is the only place the board is touched.
pub fn run_board(board: &mut Board, client: &HttpClient, runtime: &Handle) -> Result<()> {
    let mut stdout = stdout();

    stdout.execute(EnterAlternateScreen)?;
    enable_raw_mode()?;

    let _raw_mode_guard = RawModeGuard; // When this goes out of scope, raw mode and mouse capture is disabled
    stdout.execute(event::EnableMouseCapture)?;

    let (sender, receiver) = mpsc::channel::<Completion>();

    let (width, height) = terminal::size()?;
    let mut ui_state = UiState::new(width, list_height(height));

    let mut down_row: Option<u16> = None;
    let mut needs_redraw = true;

    loop {
        if settle_completions(board, &receiver) {
            needs_redraw = true;
        }

        let items = board.items();
        let indexes_to_display = filter_displayed_indexes(&items, &ui_state.filter_text);

        if needs_redraw {
            redraw_ui(&ui_state, &items, &indexes_to_display)?;
            needs_redraw = false;
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        let mut action: Option<BoardAction> = None;
        let mut new_ui_state: Option<UiState> = None;
        let mut index_change_direction: Option<CycleDirection> = None;

        match event::read()? {
            Event::Mouse(MouseEvent {
                kind,
                row,
                modifiers,
                ..
            }) if modifiers == KeyModifiers::NONE => match kind {
                MouseEventKind::Down(MouseButton::Left) => down_row = Some(row),
                MouseEventKind::Up(MouseButton::Left) => {
                    if let Some(down_row) = down_row.take() {
                        if let Some(position) =
                            clicked_position(down_row, &ui_state, indexes_to_display.len())
                        {
                            let mut clicked_state = ui_state.clone();
                            clicked_state.selected_index = position;
                            new_ui_state = Some(clicked_state);

                            let name = items[indexes_to_display[position]].name.clone();
                            action = Some(BoardAction::Trigger(name));
                        }
                    }
                }
                MouseEventKind::ScrollDown => index_change_direction = Some(Down),
                MouseEventKind::ScrollUp => index_change_direction = Some(Up),
                _ => {}
            },
            Event::Key(key_event) => {
                (action, new_ui_state, index_change_direction) =
                    handle_key_event(key_event, &ui_state, &items, &indexes_to_display);
            }
            Event::Resize(width, height) => {
                new_ui_state = Some(handle_resize(
                    width,
                    height,
                    &ui_state,
                    indexes_to_display.len(),
                ));
            }
            _ => {}
        }

        if let Some(state) = new_ui_state {
            if state != ui_state {
                ui_state = state;
                needs_redraw = true;
            }
        }

        if let Some(direction) = index_change_direction {
            ui_state = move_selected_index(&ui_state, indexes_to_display.len(), direction);
            needs_redraw = true;
        }

        match action {
            Some(BoardAction::Quit) => return Ok(()),
            Some(BoardAction::Trigger(name)) => {
                start_trigger(board, client, runtime, &sender, name)?;
                needs_redraw = true;
            }
            None => {}
        }
    }
}

/// Marks `name` in flight and sends its request in the background.
fn start_trigger(
    board: &mut Board,
    client: &HttpClient,
    runtime: &Handle,
    sender: &Sender<Completion>,
    name: String,
) -> Result<()> {
    board.press(&name)?;

    let client = client.clone();
    let sender = sender.clone();
    runtime.spawn(async move {
        let outcome = api::trigger_command(&client, &name).await.map(|_| ());
        // The receiver is gone once the list has been closed
        let _ = sender.send(Completion { name, outcome });
    });

    Ok(())
}

/// Applies every finished trigger to the board. Returns true if any was settled.
fn settle_completions(board: &mut Board, receiver: &Receiver<Completion>) -> bool {
    let mut settled = false;
    while let Ok(Completion { name, outcome }) = receiver.try_recv() {
        let status = board.settle(&name, &outcome);
        debug!("`{name}` settled as {status:?}");
        settled = true;
    }
    settled
}

fn redraw_ui(ui_state: &UiState, items: &[ItemView], indexes_to_display: &[usize]) -> Result<()> {
    let mut stdout = stdout();

    queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

    print_header(ui_state, indexes_to_display.len())?;

    if indexes_to_display.is_empty() {
        let message = if items.is_empty() {
            "The server has no commands."
        } else {
            "No matching commands!"
        };
        queue!(
            stdout,
            MoveTo(0, HEADER_HEIGHT),
            SetForegroundColor(Color::Red),
            Print(message),
            SetAttribute(Attribute::Reset),
        )?;
    } else {
        print_commands_with_selection(ui_state, items, indexes_to_display)?;

        if let Some(&selected) = indexes_to_display.get(ui_state.selected_index) {
            print_programs(ui_state, &items[selected])?;
        }
    }

    if ui_state.is_filtering {
        queue!(
            stdout,
            MoveTo(0, HEADER_HEIGHT + ui_state.viewport.height + DETAIL_HEIGHT),
            SetAttribute(Attribute::Bold),
            Print(format!("Filter: {}", ui_state.filter_text)),
            SetAttribute(Attribute::Reset)
        )?;
    }

    stdout.flush()?;
    Ok(())
}

/// Handle keyboard events in the command list
fn handle_key_event(
    key_event: KeyEvent,
    ui_state: &UiState,
    items: &[ItemView],
    indexes_to_display: &[usize],
) -> (
    Option<BoardAction>,
    Option<UiState>,
    Option<CycleDirection>,
) {
    match key_event.code {
        KeyCode::Up => (None, None, Some(Up)),
        KeyCode::Down => (None, None, Some(Down)),
        KeyCode::Enter => {
            let action = indexes_to_display
                .get(ui_state.selected_index)
                .map(|&index| BoardAction::Trigger(items[index].name.clone()));
            (action, None, None)
        }
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            (Some(BoardAction::Quit), None, None)
        }
        KeyCode::Backspace if ui_state.is_filtering => {
            let mut updated_state = ui_state.clone();
            updated_state.filter_text.pop();
            (None, Some(reset_selection(updated_state)), None)
        }
        KeyCode::Char(c) if ui_state.is_filtering => {
            let mut updated_state = ui_state.clone();
            updated_state.filter_text.push(c);
            (None, Some(reset_selection(updated_state)), None)
        }
        KeyCode::Esc if ui_state.is_filtering => {
            let mut updated_state = ui_state.clone();
            updated_state.is_filtering = false;
            updated_state.filter_text = String::new();
            (None, Some(reset_selection(updated_state)), None)
        }
        KeyCode::Char(FILTER_KEY) => {
            let mut updated_state = ui_state.clone();
            updated_state.is_filtering = true;
            (None, Some(updated_state), None)
        }
        KeyCode::Char('k') => (None, None, Some(Up)),
        KeyCode::Char('j') => (None, None, Some(Down)),
        KeyCode::Char('q') | KeyCode::Esc => (Some(BoardAction::Quit), None, None),
        _ => (None, None, None),
    }
}

/// Moves the selection back to the top, used whenever the filter changes
fn reset_selection(mut ui_state: UiState) -> UiState {
    ui_state.selected_index = 0;
    ui_state.viewport.offset = 0;
    ui_state
}

/// Position among the displayed commands of a click on terminal row `row`
fn clicked_position(row: u16, ui_state: &UiState, displayed_count: usize) -> Option<usize> {
    let list_row = row.checked_sub(HEADER_HEIGHT)?;
    if list_row >= ui_state.viewport.height {
        return None;
    }

    let position = list_row as usize + ui_state.viewport.offset;
    (position < displayed_count).then_some(position)
}

/// Handle window resize events
fn handle_resize(
    width: u16,
    height: u16,
    ui_state: &UiState,
    displayed_count: usize,
) -> UiState {
    let new_height = list_height(height);
    let mut ui_state = ui_state.clone();
    let selected_index = ui_state.selected_index;
    let mut new_viewport = ViewportState {
        width,
        height: new_height,
        offset: ui_state.viewport.offset,
    };

    // If growing taller, try to show more items above current selection
    match new_height.cmp(&ui_state.viewport.height) {
        std::cmp::Ordering::Greater if new_viewport.offset > 0 => {
            let height_increase = new_height - ui_state.viewport.height;
            new_viewport.offset = new_viewport.offset.saturating_sub(height_increase as usize);
        }
        std::cmp::Ordering::Less if selected_index >= new_viewport.offset + new_height as usize => {
            new_viewport.offset = selected_index.saturating_sub((new_height as usize).saturating_sub(1));

            if new_viewport.offset + new_height as usize > displayed_count {
                new_viewport.offset = displayed_count.saturating_sub(new_height as usize);
            }
        }
        _ => {}
    }

    ui_state.viewport = new_viewport;
    ui_state
}

/// Print the header for the command list
fn print_header(ui_state: &UiState, command_display_count: usize) -> Result<()> {
    let mut stdout = stdout();
    let width = ui_state.viewport.width as usize;

    let left_padding_size = 2usize;

    let left_padding = " ".repeat(left_padding_size);

    let instructions = if ui_state.is_filtering {
        "<esc>: Stop Filtering   |   <enter>: Trigger".to_string()
    } else {
        format!(
            "{FILTER_KEY}: Begin Filtering   |   {}/{}   |   <enter>: Trigger   |   q: Quit",
            pad_to_width_of(
                (ui_state.selected_index + 1).min(command_display_count),
                command_display_count
            ),
            command_display_count
        )
    };

    let right_padding =
        " ".repeat(width.saturating_sub(left_padding_size + instructions.len()));

    queue!(
        stdout,
        MoveTo(0, 0),
        SetBackgroundColor(DarkGreen),
        Print(left_padding),
        Print(instructions),
        Print(right_padding),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
    )?;

    Ok(())
}

/// Pad a value to match the width of the largest value
fn pad_to_width_of<T: Display>(value: T, max_number: usize) -> String {
    let width = format!("{max_number}").len();
    format!("{:>width$}", value.to_string())
}

/// Cut `content` to at most `width` characters
fn truncate_to_width(content: &str, width: usize) -> String {
    content.chars().take(width).collect()
}

/// Clear and write a command row in the list
fn clear_and_write_command_row(
    row: u16,
    label: &str,
    item: &ItemView,
    is_selected: bool,
    terminal_width: u16,
) -> Result<()> {
    let mut stdout = stdout();
    let terminal_width = terminal_width as usize;

    queue!(stdout, MoveTo(0, row), Clear(ClearType::CurrentLine))?;

    let prefix = format!("[{label}] ");
    let badge = status_badge(item.status);
    let description = if item.memo.is_empty() {
        format!(" {}", item.name)
    } else {
        format!(" {}  {}", item.name, item.memo)
    };

    let content_width = prefix.chars().count() + badge.len() + description.chars().count();
    let description = truncate_to_width(
        &description,
        terminal_width.saturating_sub(prefix.chars().count() + badge.len()),
    );
    let padding = " ".repeat(terminal_width.saturating_sub(content_width));

    let text_color = if is_selected {
        queue!(
            stdout,
            SetAttribute(Attribute::Bold),
            SetBackgroundColor(DarkBlue),
        )?;
        Yellow
    } else {
        Reset
    };

    let badge_color = item.status.as_crossterm_color().unwrap_or(text_color);

    queue!(
        stdout,
        SetForegroundColor(text_color),
        Print(prefix),
        SetForegroundColor(badge_color),
        Print(badge),
        SetForegroundColor(text_color),
        Print(description),
        Print(padding),
    )?;

    queue!(
        stdout,
        SetAttribute(Attribute::Reset),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
    )?;

    Ok(())
}

/// Print all commands with the selected one highlighted
fn print_commands_with_selection(
    ui_state: &UiState,
    items: &[ItemView],
    indexes_to_display: &[usize],
) -> Result<()> {
    let viewport = &ui_state.viewport;

    let visible_commands = indexes_to_display
        .iter()
        .enumerate()
        .skip(viewport.offset)
        .take(viewport.height as usize);

    for (row, (position, &index)) in visible_commands.enumerate() {
        let is_selected = position == ui_state.selected_index;
        let label = pad_to_width_of(index + 1, items.len());

        clear_and_write_command_row(
            HEADER_HEIGHT + row as u16,
            &label,
            &items[index],
            is_selected,
            viewport.width,
        )?;
    }

    Ok(())
}

/// Print the programs of the selected command under the list
fn print_programs(ui_state: &UiState, item: &ItemView) -> Result<()> {
    let mut stdout = stdout();
    let width = ui_state.viewport.width as usize;
    let top = HEADER_HEIGHT + ui_state.viewport.height;

    for (row, line) in program_detail_lines(item).iter().enumerate() {
        queue!(
            stdout,
            MoveTo(0, top + row as u16),
            Clear(ClearType::CurrentLine),
            SetAttribute(if row == 0 { Attribute::Bold } else { Attribute::Dim }),
            Print(truncate_to_width(line, width)),
            SetAttribute(Attribute::Reset),
        )?;
    }

    Ok(())
}

/// Lines shown for the selected command, at most `DETAIL_HEIGHT` of them
fn program_detail_lines(item: &ItemView) -> Vec<String> {
    let capacity = DETAIL_HEIGHT as usize - 1;

    let mut title = format!("Programs of `{}`", item.name);
    if item.output {
        title.push_str(" (replies with output)");
    }

    let mut lines = vec![title];
    if item.program_lines.len() > capacity {
        lines.extend(
            item.program_lines
                .iter()
                .take(capacity - 1)
                .map(|line| format!("  $ {line}")),
        );
        lines.push(format!(
            "  (+{} more)",
            item.program_lines.len() - (capacity - 1)
        ));
    } else {
        lines.extend(item.program_lines.iter().map(|line| format!("  $ {line}")));
    }

    lines
}

/// Move the selected index in the given direction
fn move_selected_index(
    ui_state: &UiState,
    commands_to_display_length: usize,
    direction: CycleDirection,
) -> UiState {
    if commands_to_display_length == 0 {
        return ui_state.clone();
    }

    let mut new_index = ui_state.selected_index;
    let mut ui_state = ui_state.clone();
    let height = (ui_state.viewport.height as usize).max(1);

    match direction {
        Up => {
            if new_index == 0 {
                new_index = commands_to_display_length - 1;
                ui_state.viewport.offset = new_index.saturating_sub(height - 1);
            } else {
                new_index -= 1;
                if new_index < ui_state.viewport.offset {
                    ui_state.viewport.offset = new_index;
                }
            }
        }
        Down => {
            new_index = (new_index + 1) % commands_to_display_length;
            if new_index < ui_state.selected_index {
                ui_state.viewport.offset = 0;
            } else if new_index >= ui_state.viewport.offset + height {
                ui_state.viewport.offset = new_index - height + 1;
            }
        }
    }

    ui_state.selected_index = new_index;
    ui_state
}

/// Indexes of the items matching `predicate`, in list order.
///
/// A numeric predicate matches on the 1-based position shown in front of
/// each row, anything else is fuzzy matched against name and memo.
fn filter_displayed_indexes(items: &[ItemView], predicate: &str) -> Vec<usize> {
    if predicate.is_empty() {
        return (0..items.len()).collect();
    }

    let matcher = SkimMatcherV2::default();
    let predicate_index = predicate.parse::<usize>().ok();

    items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| {
            if let Some(pred_idx) = predicate_index {
                // Index-based filtering
                (i + 1)
                    .to_string()
                    .contains(&pred_idx.to_string())
                    .then_some(i)
            } else {
                // Fuzzy name-based filtering
                let description = format!("{} {}", item.name, item.memo);
                matcher.fuzzy_match(&description, predicate).map(|_| i)
            }
        })
        .collect()
}
