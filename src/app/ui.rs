use crate::app::state::AppState;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::modals::helpers::dim_area;
use crate::components::modals::{SearchModal, SearchModalLayout};
use crate::components::page::Page;
use crate::components::search_button::{button_rect, SearchButton};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
    /// Absent when search is disabled or the body is too small.
    pub search_button: Option<Rect>,
    /// Present only while the modal is open and fits on screen.
    pub modal: Option<SearchModalLayout>,
}

pub fn get_layout(area: Rect, app_state: &AppState) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let body = main[1];
    let search_button = app_state
        .engine
        .as_ref()
        .and_then(|_| button_rect(body));
    let modal = if app_state.search.is_open() {
        SearchModalLayout::compute(area, &app_state.shortcuts)
    } else {
        None
    };

    AppLayout {
        header: main[0],
        body,
        footer: main[2],
        search_button,
        modal,
    }
}

pub fn draw(f: &mut Frame, app_state: &AppState) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let theme = &app_state.theme;
    let layout = get_layout(area, app_state);

    f.render_widget(
        Header {
            site_name: &app_state.site_name,
            location: app_state.location.as_deref(),
            theme,
        },
        layout.header,
    );

    f.render_widget(
        Page {
            catalog: app_state.engine.as_ref().map(|e| e.catalog()),
            scroll: app_state.page.scroll,
            theme,
        },
        layout.body,
    );

    if let Some(button) = layout.search_button {
        f.render_widget(SearchButton { theme }, button);
    }

    f.render_widget(
        Footer {
            state: app_state,
            theme,
        },
        layout.footer,
    );

    // --- Search Modal ---
    if let (Some(query), Some(engine)) = (app_state.search.query(), &app_state.engine) {
        dim_area(f.buffer_mut(), area);
        if let Some(modal_layout) = &layout.modal {
            f.render_widget(
                SearchModal {
                    theme,
                    state: query,
                    engine,
                    shortcuts: &app_state.shortcuts,
                    layout: modal_layout,
                },
                area,
            );
        }
    }
}
