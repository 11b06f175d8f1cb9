use std::io::{self, Stdout};
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use indoc::indoc;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};

use term_float::event_loop::{ControlFlow, EventLoop};
use term_float::input::ConsoleInput;
use term_float::{FloatingWindow, TermFloatError, TextContent, Workspace};

#[derive(Debug, Parser)]
#[command(name = "term-float", about = "Floating window demo.")]
struct Args {
    /// Event loop poll interval, in milliseconds.
    #[arg(long, default_value_t = 16)]
    tick_ms: u64,

    /// Number of demo windows to open.
    #[arg(long, default_value_t = 2)]
    windows: usize,
}

fn main() -> Result<(), TermFloatError> {
    term_float::tracing_sub::init_default();
    let args = Args::parse();

    let mut workspace = Workspace::new();
    for index in 0..args.windows.max(1) {
        let text = indoc! {r"
            Drag me by the title bar.
            Resize from any edge or corner.
            The - button minimizes, the box
            maximizes, and the x closes.
        "};
        let id = workspace.add_window(FloatingWindow::new(
            format!("window {}", index + 1),
            TextContent::new(text),
        ));
        if let Some(window) = workspace.window_mut(id) {
            let offset = index as i32;
            window.set_position(10 + offset * 8, 5 + offset * 4);
        }
    }

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, event::EnableMouseCapture)?;
    terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let mut input = ConsoleInput::new();

    let result = run(
        &mut terminal,
        &mut input,
        &mut workspace,
        Duration::from_millis(args.tick_ms),
    );

    terminal::disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        event::DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    result.map_err(TermFloatError::from)
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    input: &mut ConsoleInput,
    workspace: &mut Workspace,
    poll_interval: Duration,
) -> io::Result<()> {
    let mut event_loop = EventLoop::new(input, poll_interval);
    event_loop.run(|_, event| {
        let Some(event) = event else {
            terminal.draw(|frame| {
                let area = frame.area();
                frame.render_widget(
                    Block::default().style(Style::default().bg(Color::Black)),
                    area,
                );
                if area.height > 0 {
                    let hint = ratatui::prelude::Rect {
                        x: area.x,
                        y: area.y + area.height - 1,
                        width: area.width,
                        height: 1,
                    };
                    frame.render_widget(
                        Paragraph::new(r"Ctrl+Q quits · \ restores a minimized window")
                            .style(Style::default().fg(Color::DarkGray)),
                        hint,
                    );
                }
                workspace.render(frame);
            })?;
            return Ok(ControlFlow::Continue);
        };

        if let Event::Key(key) = &event
            && key.code == KeyCode::Char('q')
            && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            return Ok(ControlFlow::Quit);
        }
        workspace.handle_event(&event);
        if workspace.is_empty() {
            return Ok(ControlFlow::Quit);
        }
        Ok(ControlFlow::Continue)
    })
}
