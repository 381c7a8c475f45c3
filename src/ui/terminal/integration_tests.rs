//! Rendering tests for the terminal browser

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use crate::config::Config;
    use crate::core::data::fixtures::{empty_library, fixture_library};
    use crate::services::library::FailingLibrary;
    use crate::services::LibraryService;
    use crate::signal_handler::SignalHandler;
    use crate::ui::terminal::app::BrowserApp;
    use crate::ui::terminal::themes::ThemeVariant;

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    fn render(app: &BrowserApp<'_>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn type_keys(app: &mut BrowserApp<'_>, keys: &str) {
        for ch in keys.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE))
                .unwrap();
        }
    }

    fn enter(app: &mut BrowserApp<'_>) {
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();
    }

    fn app<'a>(library: &'a dyn LibraryService, config: &Config) -> BrowserApp<'a> {
        BrowserApp::new(library, config, SignalHandler::new())
    }

    #[test]
    fn test_main_menu_rendering() {
        let library = fixture_library();
        let config = Config::default();
        let app = app(&library, &config);

        let screen = render(&app);
        assert!(screen.contains("plsearch"));
        assert!(screen.contains("Main menu"));
        assert!(screen.contains("(1) Artists"));
        assert!(screen.contains("(6) Duplicate tracks"));
        assert!(screen.contains("(q) Quit"));
        assert!(screen.contains("Find artists by name"));
    }

    #[test]
    fn test_prompt_shows_typed_query() {
        let library = fixture_library();
        let config = Config::default();
        let mut app = app(&library, &config);

        type_keys(&mut app, "1Beat");
        let screen = render(&app);
        assert!(screen.contains("Search artists"));
        assert!(screen.contains("> Beat"));
        assert!(screen.contains("Main menu > Search artists"));
    }

    #[test]
    fn test_album_table_rendering() {
        let library = fixture_library();
        let config = Config::default();
        let mut app = app(&library, &config);

        type_keys(&mut app, "1Coltrane");
        enter(&mut app);
        type_keys(&mut app, "a");

        let screen = render(&app);
        assert!(screen.contains("Albums of John Coltrane"));
        assert!(screen.contains("Release Date"));
        assert!(screen.contains("Blue Train"));
        assert!(screen.contains("1957-09-15"));
        assert!(screen.contains("Row 1 of 2"));

        let blue_train = screen.find("Blue Train").unwrap();
        let kind_of_blue = screen.find("Kind of Blue").unwrap();
        assert!(blue_train < kind_of_blue);
    }

    #[test]
    fn test_empty_result_message() {
        let library = empty_library();
        let config = Config::default();
        let mut app = app(&library, &config);

        type_keys(&mut app, "2Anything");
        enter(&mut app);

        let screen = render(&app);
        assert!(screen.contains("There are no matches for the query Anything"));
    }

    #[test]
    fn test_error_screen_rendering() {
        let library = FailingLibrary;
        let config = Config::default();
        let mut app = app(&library, &config);

        type_keys(&mut app, "6");
        let screen = render(&app);
        assert!(screen.contains("Duplicate report failed"));
    }

    #[test]
    fn test_status_hint_for_short_query() {
        let library = fixture_library();
        let config = Config {
            min_query_length: 2,
            ..Config::default()
        };
        let mut app = app(&library, &config);

        type_keys(&mut app, "1B");
        enter(&mut app);
        let screen = render(&app);
        assert!(screen.contains("Enter at least 2 characters"));
    }

    #[test]
    fn test_every_theme_renders() {
        let library = fixture_library();
        for theme in ThemeVariant::ALL {
            let config = Config {
                theme,
                ..Config::default()
            };
            let mut app = app(&library, &config);
            type_keys(&mut app, "5Blue");
            enter(&mut app);
            let screen = render(&app);
            assert!(screen.contains("Starred Solo"), "theme {theme}");
        }
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        let library = fixture_library();
        let config = Config::default();
        let mut app = app(&library, &config);
        type_keys(&mut app, "1");

        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
    }
}
