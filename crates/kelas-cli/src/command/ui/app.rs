use std::path::{Path, PathBuf};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Spacing},
    style::{Color, Style},
    text::Text,
};

use crate::{
    command::ui::{
        pages::{AnalysisView, Page},
        session::AnalysisSession,
    },
    content,
    tui::App,
    ui::widgets::{InfoPageView, Menu, style},
};

const TABLE_PAGE_ROWS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Status {
    Idle,
    Info(String),
    Error(String),
}

#[derive(Debug)]
pub struct ClassroomApp {
    page: Page,
    session: AnalysisSession,
    /// Path being typed; `Some` while the file input has focus
    path_input: Option<String>,
    info_scroll: u16,
    table_offset: usize,
    status: Status,
    should_exit: bool,
}

impl ClassroomApp {
    pub fn new(session: AnalysisSession) -> Self {
        Self {
            page: Page::default(),
            session,
            path_input: None,
            info_scroll: 0,
            table_offset: 0,
            status: Status::Idle,
            should_exit: false,
        }
    }

    /// Switches to the analysis page and loads `path`.
    pub fn open_analysis(&mut self, path: &Path) {
        self.select_page(Page::Analysis);
        self.load(path);
    }

    fn select_page(&mut self, page: Page) {
        if self.page != page {
            self.page = page;
            self.info_scroll = 0;
        }
    }

    fn load(&mut self, path: &Path) {
        self.table_offset = 0;
        self.status = match self.session.load(path) {
            Ok(table) => Status::Info(format!(
                "File dimuat: {} ({} baris)",
                path.display(),
                table.len()
            )),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %format!("{e:#}"), "load failed");
                Status::Error(format!("{e:#}"))
            }
        };
    }

    fn run_clustering(&mut self) {
        self.table_offset = 0;
        let clusters = self.session.clusters();
        self.status = match self.session.run() {
            Ok(result) => Status::Info(format!(
                "K-Means Clustering selesai: {} siswa, {clusters} cluster",
                result.table.len()
            )),
            Err(e) => {
                tracing::warn!(clusters, error = %format!("{e:#}"), "clustering failed");
                Status::Error(format!("{e:#}"))
            }
        };
    }

    fn export(&mut self) {
        self.status = match self.session.export() {
            Ok(path) => Status::Info(format!("File Excel disimpan: {}", path.display())),
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "export failed");
                Status::Error(format!("{e:#}"))
            }
        };
    }

    fn scroll_down(&mut self, rows: usize) {
        match self.page.info() {
            Some(info) => {
                let max = info.plain_lines().len().saturating_sub(1);
                let max = u16::try_from(max).unwrap_or(u16::MAX);
                let rows = u16::try_from(rows).unwrap_or(u16::MAX);
                self.info_scroll = self.info_scroll.saturating_add(rows).min(max);
            }
            None => {
                let len = self.session.result().map_or(0, |r| r.table.len());
                self.table_offset = (self.table_offset + rows).min(len.saturating_sub(1));
            }
        }
    }

    fn scroll_up(&mut self, rows: usize) {
        match self.page {
            Page::Analysis => self.table_offset = self.table_offset.saturating_sub(rows),
            Page::School | Page::Algorithm => {
                let rows = u16::try_from(rows).unwrap_or(u16::MAX);
                self.info_scroll = self.info_scroll.saturating_sub(rows);
            }
        }
    }

    fn handle_path_input(&mut self, key: KeyEvent, input: &mut String) -> bool {
        match key.code {
            KeyCode::Enter => {
                let path = PathBuf::from(input.trim());
                self.load(&path);
                return false;
            }
            KeyCode::Esc => return false,
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Char(c) => input.push(c),
            _ => {}
        }
        true
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_exit = true;
            return;
        }

        if let Some(mut input) = self.path_input.take() {
            if self.handle_path_input(key, &mut input) {
                self.path_input = Some(input);
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_exit = true,
            KeyCode::Tab => self.select_page(self.page.next()),
            KeyCode::BackTab => self.select_page(self.page.prev()),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(page) = Page::from_digit(c) {
                    self.select_page(page);
                }
            }
            KeyCode::Down => self.scroll_down(1),
            KeyCode::Up => self.scroll_up(1),
            KeyCode::PageDown => self.scroll_down(TABLE_PAGE_ROWS),
            KeyCode::PageUp => self.scroll_up(TABLE_PAGE_ROWS),
            _ if self.page == Page::Analysis => self.handle_analysis_key(key),
            _ => {}
        }
    }

    fn handle_analysis_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('o') => {
                let current = self
                    .session
                    .input_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                self.path_input = Some(current);
            }
            KeyCode::Char('+' | '=') | KeyCode::Right => self.session.increment_clusters(),
            KeyCode::Char('-') | KeyCode::Left => self.session.decrement_clusters(),
            KeyCode::Enter | KeyCode::Char('r') => self.run_clustering(),
            KeyCode::Char('e') => self.export(),
            _ => {}
        }
    }

    fn help_text(&self) -> &'static str {
        match (self.page, self.path_input.is_some()) {
            (_, true) => "Enter: Load | Esc: Cancel",
            (Page::Analysis, false) => {
                "o: Open File | ←/→: Clusters | Enter/r: Perform K-Means Clustering | e: Download File Excel | ↑/↓: Scroll | Tab: Menu | q: Quit"
            }
            _ => "↑/↓: Scroll | Tab/1-3: Menu | q/Esc: Quit",
        }
    }
}

impl App for ClassroomApp {
    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn handle_event(&mut self, event: &Event) {
        if let Some(key) = event.as_key_press_event() {
            self.handle_key(key);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let [main_area, status_area, help_area] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());
        let [menu_area, page_area] =
            Layout::horizontal([Constraint::Length(32), Constraint::Fill(1)])
                .spacing(Spacing::Overlap(1))
                .areas(main_area);

        frame.render_widget(
            Menu::new(content::APP_TITLE, &Page::TITLES, self.page.index()),
            menu_area,
        );
        match self.page.info() {
            Some(info) => frame.render_widget(InfoPageView::new(info, self.info_scroll), page_area),
            None => frame.render_widget(
                AnalysisView::new(
                    &self.session,
                    self.path_input.as_deref(),
                    self.table_offset,
                ),
                page_area,
            ),
        }

        let status = match &self.status {
            Status::Idle => Text::default(),
            Status::Info(message) => Text::from(message.as_str()),
            Status::Error(message) => {
                Text::from(message.as_str()).style(Style::new().fg(Color::Red))
            }
        };
        frame.render_widget(status, status_area);

        let help_text = Text::from(self.help_text()).style(style::HINT).centered();
        frame.render_widget(help_text, help_area);
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    const CSV: &str = "nama;uts;uas;total nilai\n\
        Adi;75;78;76,5\n\
        Budi;80;84;82,0\n\
        Citra;92;88;90,0\n\
        Dewi;58;62;60,0\n";

    fn app() -> ClassroomApp {
        ClassroomApp::new(AnalysisSession::new(2, Some(3), None))
    }

    fn press(app: &mut ClassroomApp, code: KeyCode) {
        app.handle_event(&Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn type_text(app: &mut ClassroomApp, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn screen(app: &ClassroomApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(160, 60)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_menu_navigation() {
        let mut app = app();
        assert_eq!(app.page, Page::School);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.page, Page::Algorithm);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.page, Page::Analysis);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.page, Page::Algorithm);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_exit());
    }

    #[test]
    fn test_school_page_is_shown_first() {
        let text = screen(&app());
        assert!(text.contains("Tentang Sekolah"));
        assert!(text.contains(content::SCHOOL_IMAGE_CAPTION));
    }

    #[test]
    fn test_analysis_page_prompts_for_file() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert!(screen(&app).contains(content::UPLOAD_PROMPT));

        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.status, Status::Error(ref m) if m == content::UPLOAD_PROMPT));
    }

    #[test]
    fn test_cluster_keys_only_act_on_analysis_page() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        assert_eq!(app.session.clusters(), 2);
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.session.clusters(), 4);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.session.clusters(), 3);
    }

    #[test]
    fn test_type_path_load_and_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("siswa.csv");
        fs::write(&path, CSV).unwrap();

        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('o'));
        type_text(&mut app, &path.display().to_string());
        // digits typed into the path must not switch pages
        assert_eq!(app.page, Page::Analysis);
        press(&mut app, KeyCode::Enter);
        assert!(app.path_input.is_none());
        assert!(matches!(app.status, Status::Info(_)));
        assert_eq!(app.session.table().unwrap().len(), 4);

        press(&mut app, KeyCode::Char('r'));
        assert!(app.session.result().is_some());
        let text = screen(&app);
        assert!(text.contains(content::SUMMARY_TITLE));
        assert!(text.contains(content::BAR_CHART_TITLE));
        assert!(text.contains("Kelas B"));
    }

    #[test]
    fn test_path_input_can_be_cancelled() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('o'));
        type_text(&mut app, "q");
        press(&mut app, KeyCode::Esc);
        assert!(app.path_input.is_none());
        assert!(!app.should_exit());
        assert!(app.session.table().is_none());
    }

    #[test]
    fn test_failed_load_reports_error() {
        let mut app = app();
        app.open_analysis(Path::new("/nonexistent/siswa.csv"));
        assert_eq!(app.page, Page::Analysis);
        assert!(matches!(app.status, Status::Error(ref m) if m.contains("/nonexistent/siswa.csv")));
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = app();
        let mut key = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        key.kind = crossterm::event::KeyEventKind::Release;
        app.handle_event(&Event::Key(key));
        assert_eq!(app.page, Page::School);
    }
}
