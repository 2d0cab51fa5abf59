//! End-to-end tests driving the app through input events and rendering it
//! into a test backend.

use noughts::tui::{App, AppEvent, Hitboxes, draw};
use noughts::Config;
use noughts_core::{Mark, Position};
use ratatui::{Terminal, backend::TestBackend};

struct Screen {
    terminal: Terminal<TestBackend>,
    app: App,
    hitboxes: Hitboxes,
}

impl Screen {
    fn new(config: &Config) -> Self {
        let mut screen = Self {
            terminal: Terminal::new(TestBackend::new(100, 32)).unwrap(),
            app: App::new(config.player_names()),
            hitboxes: Hitboxes::default(),
        };
        screen.redraw();
        screen
    }

    fn redraw(&mut self) {
        let app = &self.app;
        let mut hitboxes = Hitboxes::default();
        self.terminal.draw(|f| hitboxes = draw(f, app)).unwrap();
        self.hitboxes = hitboxes;
        self.app.set_hitboxes(hitboxes);
    }

    fn send(&mut self, event: AppEvent) {
        self.app.handle_event(event);
        self.redraw();
    }

    fn click_cell(&mut self, index: usize) {
        let area = self.hitboxes.board().cell_area(Position::ALL[index]);
        self.send(AppEvent::Click {
            column: area.x + area.width / 2,
            row: area.y + area.height / 2,
        });
    }

    fn text(&self) -> String {
        self.terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }
}

#[test]
fn test_win_then_new_round_by_mouse() {
    let mut screen = Screen::new(&Config::default());
    for i in [0, 4, 1, 5, 2] {
        screen.click_cell(i);
    }
    assert!(screen.text().contains("Player X (X) wins!"));
    assert!(screen.text().contains("Player X (X): 1"));

    // Board is frozen after the win.
    screen.click_cell(8);
    assert_eq!(screen.app.session().history().len(), 5);

    let button = screen.hitboxes.new_round();
    screen.send(AppEvent::Click {
        column: button.x + 2,
        row: button.y + 1,
    });
    assert!(screen.text().contains("Round 2"));
    assert!(screen.text().contains("Turn: Player O (O)"));
    assert!(screen.text().contains("Player X (X): 1"));
}

#[test]
fn test_draw_counts_once_across_redraws() {
    let mut screen = Screen::new(&Config::default());
    for i in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        screen.click_cell(i);
    }
    for _ in 0..5 {
        screen.redraw();
    }
    assert!(screen.text().contains("It's a draw."));
    assert!(screen.text().contains("Draws: 1"));
    assert_eq!(screen.app.session().scores().total(), 1);
}

#[test]
fn test_renamed_players_show_in_status() {
    let config = Config::default().with_overrides(Some("Ann".into()), Some("Bo".into()), None);
    let mut screen = Screen::new(&config);
    assert!(screen.text().contains("Turn: Ann (X)"));

    let field = screen.hitboxes.name(Mark::O);
    screen.send(AppEvent::Click {
        column: field.x + 1,
        row: field.y + 1,
    });
    screen.send(AppEvent::Key(crossterm::event::KeyCode::Char('b')));
    screen.click_cell(4);
    assert!(screen.text().contains("Turn: Bob (O)"));
    assert!(screen.text().contains("Bob (O): 0"));
}
