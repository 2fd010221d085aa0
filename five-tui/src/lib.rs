//! Ratatui terminal UI: the single Yahtzee game screen.
//!
//! Layout: two score columns (upper / lower section), the five dice along the
//! bottom with hold markers, a roll indicator, and a status bar. Dialogs for
//! new-game confirmation and game over.

mod config_io;
mod dice_art;

pub use config_io::{load_or_default, save_settings_atomic, SETTINGS_FILE};

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, ExecutableCommand};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Terminal;

use five_core::{
    category_score, satisfiable, Category, DiceStyle, Game, Settings, MAX_ROLLS,
};
use five_core::category::ALL_CATEGORIES;
use five_logging::{GameOverEventV1, MarkEventV1, NdjsonWriter, now_ms, LOG_SCHEMA_VERSION};

use crate::dice_art::face_lines;

/// Ticks of scrambled faces after a roll before the dice settle.
const ROLL_ANIM_TICKS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dialog {
    None,
    NewGame,
    GameOver,
}

/// Options for [`run`].
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub settings_path: PathBuf,
    /// Overrides `settings.seed` when set.
    pub seed: Option<u64>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            settings_path: PathBuf::from(SETTINGS_FILE),
            seed: None,
        }
    }
}

struct App {
    game: Game,
    settings: Settings,
    settings_path: PathBuf,
    dialog: Dialog,
    /// Selected category index (0..NUM_CATS).
    cursor: usize,
    status: String,

    // Roll animation: which slots are scrambling, for how many more ticks.
    anim_ticks_left: u8,
    anim_mask: u8,
    anim_faces: [u8; 5],
    anim_state: u64,

    log: Option<NdjsonWriter>,
    game_id: u64,
    turn_idx: u8,
    /// Cleared when the player dismisses the game-over dialog.
    show_game_over: bool,
}

const KEY_HELP: &str =
    "r: roll | 1-5: hold | \u{2191}/\u{2193}: select | Enter: place | d: dice look | n: new game | q: quit";

impl App {
    fn new(settings: Settings, settings_path: PathBuf, seed_override: Option<u64>) -> Self {
        let seed = seed_override.or(settings.seed);
        let game = match seed {
            Some(s) => Game::new(s),
            None => Game::from_entropy(),
        };

        let mut status = KEY_HELP.to_string();
        let log = if settings.log.enabled {
            match NdjsonWriter::open_append_with_flush(&settings.log.path, 1) {
                Ok(w) => Some(w),
                Err(e) => {
                    status = format!("log disabled: {e}");
                    None
                }
            }
        } else {
            None
        };

        Self {
            game,
            settings,
            settings_path,
            dialog: Dialog::None,
            cursor: 0,
            status,
            anim_ticks_left: 0,
            anim_mask: 0,
            anim_faces: [0; 5],
            anim_state: now_ms() | 1,
            log,
            game_id: 0,
            turn_idx: 0,
            show_game_over: true,
        }
    }

    fn is_rolling(&self) -> bool {
        self.anim_ticks_left > 0
    }

    fn on_tick(&mut self) {
        if self.anim_ticks_left > 0 {
            self.anim_ticks_left -= 1;
            self.scramble_anim_faces();
        }
    }

    fn scramble_anim_faces(&mut self) {
        for slot in 0..5 {
            if (self.anim_mask >> slot) & 1 != 0 {
                let r = splitmix64_next(&mut self.anim_state);
                self.anim_faces[slot] = ((r % 6) + 1) as u8;
            }
        }
    }

    fn handle_roll(&mut self) {
        if self.is_rolling() {
            return;
        }
        match self.game.roll() {
            Ok(mask) => {
                self.anim_mask = mask;
                self.anim_ticks_left = ROLL_ANIM_TICKS;
                self.scramble_anim_faces();
                self.status = format!("Roll {} of {MAX_ROLLS}", self.game.rolls_used());
            }
            Err(e) => self.status = e.to_string(),
        }
    }

    fn handle_hold(&mut self, slot: usize) {
        if self.is_rolling() {
            return;
        }
        match self.game.toggle_hold(slot) {
            Ok(()) => {
                self.status = if self.game.is_held(slot) {
                    format!("Holding die {}", slot + 1)
                } else {
                    format!("Released die {}", slot + 1)
                };
            }
            Err(e) => self.status = e.to_string(),
        }
    }

    fn handle_place(&mut self) {
        if self.is_rolling() {
            return;
        }
        let cat = ALL_CATEGORIES[self.cursor];
        // Captured before `place` starts the next turn.
        let dice = self.game.hand();
        let rolls_used = self.game.rolls_used();

        match self.game.place(cat) {
            Ok(score) => {
                self.log_mark(cat, dice, rolls_used, score);
                self.status = format!("{}: {score} points", cat.label());
                self.turn_idx += 1;
                if self.game.is_over() {
                    self.log_game_over();
                    if self.show_game_over {
                        self.dialog = Dialog::GameOver;
                    }
                }
            }
            Err(e) => self.status = e.to_string(),
        }
    }

    fn toggle_dice_style(&mut self) {
        self.settings.dice_style = match self.settings.dice_style {
            DiceStyle::Dots => DiceStyle::Numerals,
            DiceStyle::Numerals => DiceStyle::Dots,
        };
        if let Err(e) = save_settings_atomic(&self.settings_path, &self.settings) {
            self.status = format!("settings not saved: {e}");
        }
    }

    fn new_game(&mut self) {
        self.game.reset();
        self.game_id += 1;
        self.turn_idx = 0;
        self.cursor = 0;
        self.anim_ticks_left = 0;
        self.anim_mask = 0;
        self.show_game_over = true;
        self.dialog = Dialog::None;
        self.status = KEY_HELP.to_string();
    }

    fn log_mark(&mut self, cat: Category, dice: [u8; 5], rolls_used: u8, score: i32) {
        let Some(w) = self.log.as_mut() else {
            return;
        };
        let ev = MarkEventV1 {
            event: "mark",
            ts_ms: now_ms(),
            schema_version: LOG_SCHEMA_VERSION,
            game_id: self.game_id,
            turn_idx: self.turn_idx,
            rolls_used,
            dice,
            category: cat.id(),
            score,
            total: self.game.sheet().grand_total(),
        };
        if let Err(e) = w.write_event(&ev) {
            self.status = format!("log write failed: {e}");
            self.log = None;
        }
    }

    fn log_game_over(&mut self) {
        let Some(w) = self.log.as_mut() else {
            return;
        };
        let s = self.game.sheet();
        let ev = GameOverEventV1 {
            event: "game_over",
            ts_ms: now_ms(),
            schema_version: LOG_SCHEMA_VERSION,
            game_id: self.game_id,
            upper_subtotal: s.upper_subtotal(),
            upper_bonus: s.upper_bonus(),
            lower_total: s.lower_total(),
            total: s.grand_total(),
        };
        if let Err(e) = w.write_event(&ev).and_then(|()| w.flush()) {
            self.status = format!("log write failed: {e}");
            self.log = None;
        }
    }
}

/// SplitMix64 step, used only to scramble the roll animation.
fn splitmix64_next(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Three-tier coloring for upper-section rows: the most frequent face gets
/// green, the second yellow, the third red (ties broken by higher face).
fn upper_highlight(hand: [u8; 5]) -> [Option<Color>; 6] {
    let mut counts = [0u8; 6];
    for &d in &hand {
        if (1..=6).contains(&d) {
            counts[(d - 1) as usize] += 1;
        }
    }
    let mut present: Vec<(u8, u8)> = (0..6u8)
        .filter(|&f| counts[f as usize] > 0)
        .map(|f| (counts[f as usize], f + 1))
        .collect();
    present.sort();
    present.reverse();

    let tiers = [Color::Green, Color::Yellow, Color::Red];
    let mut out = [None; 6];
    for (i, (_, face)) in present.iter().take(3).enumerate() {
        out[(face - 1) as usize] = Some(tiers[i]);
    }
    out
}

/// Run the game TUI until the player quits.
pub fn run(opts: RunOptions) -> io::Result<()> {
    let (settings, load_msg) = load_or_default(&opts.settings_path);

    // Terminal init.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(settings, opts.settings_path.clone(), opts.seed);
    if let Some(msg) = load_msg {
        app.status = msg;
    }

    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| draw(f, &app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(k) = event::read()? {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                match app.dialog {
                    Dialog::None => match k.code {
                        KeyCode::Char('q') => break,
                        KeyCode::Char('r') => app.handle_roll(),
                        KeyCode::Char(c @ '1'..='5') => {
                            app.handle_hold(c as usize - '1' as usize);
                        }
                        KeyCode::Up => {
                            if app.cursor > 0 {
                                app.cursor -= 1;
                            }
                        }
                        KeyCode::Down => {
                            if app.cursor + 1 < ALL_CATEGORIES.len() {
                                app.cursor += 1;
                            }
                        }
                        KeyCode::Enter => app.handle_place(),
                        KeyCode::Char('d') => app.toggle_dice_style(),
                        KeyCode::Char('n') => app.dialog = Dialog::NewGame,
                        _ => {}
                    },
                    Dialog::NewGame => match k.code {
                        KeyCode::Char('y') | KeyCode::Enter => app.new_game(),
                        KeyCode::Char('n') | KeyCode::Esc => app.dialog = Dialog::None,
                        KeyCode::Char('q') => break,
                        _ => {}
                    },
                    Dialog::GameOver => match k.code {
                        KeyCode::Char('p') | KeyCode::Enter => app.new_game(),
                        KeyCode::Esc => {
                            app.show_game_over = false;
                            app.dialog = Dialog::None;
                            app.status = "Game over. n: new game | q: quit".to_string();
                        }
                        KeyCode::Char('q') => break,
                        _ => {}
                    },
                }
            }
        }
        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }

    // Terminal restore.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn draw(f: &mut ratatui::Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Min(11),
                Constraint::Length(5),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(f.area());

    draw_scores(f, app, chunks[0]);
    draw_dice_row(f, app, chunks[1]);

    let status = Paragraph::new(Line::from(app.status.as_str()))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[2]);

    match app.dialog {
        Dialog::None => {}
        Dialog::NewGame => draw_dialog(
            f,
            "New Game",
            &[
                "Want to start a new game?".to_string(),
                format!("You have {} points.", app.game.sheet().grand_total()),
                String::new(),
                "y/Enter: yes   n/Esc: no".to_string(),
            ],
        ),
        Dialog::GameOver => draw_dialog(
            f,
            "Game Over",
            &[
                format!("You got a score of {}", app.game.sheet().grand_total()),
                String::new(),
                "Enter: play again   Esc: stop playing".to_string(),
            ],
        ),
    }
}

fn draw_scores(f: &mut ratatui::Frame, app: &App, area: Rect) {
    let title = Line::from(vec![
        Span::styled("Five of a Kind", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::raw(format!("Total Score: {}", app.game.sheet().grand_total())),
    ]);
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let sheet = app.game.sheet();

    // Left: upper section + bonus.
    let mut left: Vec<Line> = Vec::new();
    for cat in ALL_CATEGORIES.iter().filter(|c| c.is_upper()) {
        left.push(category_line(app, *cat));
    }
    left.push(Line::from(""));
    if sheet.has_bonus() {
        left.push(Line::from(Span::styled(
            "+35 for >= 63",
            Style::default().fg(Color::Green),
        )));
    }
    left.push(Line::from(format!(
        "Upper: {} / 63",
        sheet.upper_subtotal()
    )));

    // Right: lower section.
    let mut right: Vec<Line> = Vec::new();
    for cat in ALL_CATEGORIES.iter().filter(|c| !c.is_upper()) {
        right.push(category_line(app, *cat));
    }
    right.push(Line::from(""));
    right.push(Line::from(format!("Lower: {}", sheet.lower_total())));

    f.render_widget(Paragraph::new(left), cols[0]);
    f.render_widget(Paragraph::new(right), cols[1]);
}

fn category_line(app: &App, cat: Category) -> Line<'static> {
    let sheet = app.game.sheet();
    let selected = app.cursor == cat.index();
    let prefix = if selected { "> " } else { "  " };

    let hand = app.game.hand();
    let hand_ready = app.game.hand_rolled() && !app.is_rolling();

    let (value, style) = if let Some(score) = sheet.get(cat) {
        (format!("{score}"), Style::default().fg(Color::DarkGray))
    } else if !hand_ready {
        ("-".to_string(), Style::default().fg(Color::DarkGray))
    } else {
        let potential = category_score(hand, cat);
        let color = if let Some(face) = cat.upper_face() {
            upper_highlight(hand)[(face - 1) as usize].unwrap_or(Color::Reset)
        } else if satisfiable(hand)[cat.index()] {
            Color::Green
        } else {
            Color::Reset
        };
        (format!("{potential}"), Style::default().fg(color))
    };

    let mut label_style = Style::default();
    if selected {
        label_style = label_style.add_modifier(Modifier::BOLD);
    }
    if sheet.is_filled(cat) {
        label_style = label_style.fg(Color::DarkGray);
    }

    Line::from(vec![
        Span::raw(prefix.to_string()),
        Span::styled(format!("{:<16}", cat.label()), label_style),
        Span::styled(value, style),
    ])
}

fn draw_dice_row(f: &mut ratatui::Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 6); 6])
        .split(area);

    for slot in 0..5 {
        let held = app.game.is_held(slot);
        let scrambling = app.is_rolling() && (app.anim_mask >> slot) & 1 != 0;
        let face = if scrambling {
            app.anim_faces[slot]
        } else {
            app.game.hand()[slot]
        };

        let border = if held {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        };
        let title = if held {
            format!("{} held", slot + 1)
        } else {
            format!("{}", slot + 1)
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border);

        let lines: Vec<Line> = face_lines(face, app.settings.dice_style)
            .into_iter()
            .map(Line::from)
            .collect();
        let p = Paragraph::new(lines)
            .centered()
            .block(block);
        f.render_widget(p, chunks[slot]);
    }

    // Roll indicator, colored by how far into the turn we are.
    let color = match app.game.rolls_used() {
        0 => Color::Green,
        1 => Color::Yellow,
        2 => Color::Red,
        _ => Color::DarkGray,
    };
    let lines = vec![
        Line::from(Span::styled(
            "Roll (r)",
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("left: {}", app.game.rolls_left())),
    ];
    let p = Paragraph::new(lines)
        .centered()
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(p, chunks[5]);
}

fn draw_dialog(f: &mut ratatui::Frame, title: &str, lines: &[String]) {
    let area = centered_rect(f.area(), 44, lines.len() as u16 + 2);
    f.render_widget(Clear, area);
    let body: Vec<Line> = lines.iter().map(|l| Line::from(l.clone())).collect();
    let p = Paragraph::new(body)
        .centered()
        .block(Block::default().title(title.to_string()).borders(Borders::ALL));
    f.render_widget(p, area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}
