use super::types::{FooterGroup, FooterItem};
use crate::app::state::AppState;

fn item(key: &'static str, desc: &'static str) -> FooterItem {
    FooterItem { key, desc }
}

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    if state.search.is_open() {
        return vec![
            FooterGroup {
                name: "SEARCH",
                items: vec![
                    item("Enter", "open"),
                    item("↑/↓", "select"),
                    item("Alt+1-9", "shortcut"),
                ],
            },
            FooterGroup {
                name: "MODAL",
                items: vec![item("Esc", "close")],
            },
        ];
    }

    let mut groups = vec![FooterGroup {
        name: "PAGE",
        items: vec![item("j/k", "scroll"), item("PgUp/Dn", "page"), item("g", "top")],
    }];
    if state.engine.is_some() {
        groups.push(FooterGroup {
            name: "SEARCH",
            items: vec![item("Ctrl+K", "search")],
        });
    }
    groups.push(FooterGroup {
        name: "APP",
        items: vec![item("q", "quit")],
    });
    groups
}
