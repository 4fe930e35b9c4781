use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};

type Feature = fn(&mut AppState, &Action) -> UpdateResult;

const FEATURES: &[Feature] = &[features::search::update, features::page::update];

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    if let Action::Quit = action {
        state.should_quit = true;
        return None;
    }

    for feature in FEATURES {
        if let UpdateResult::Handled(command) = feature(state, &action) {
            return command;
        }
    }
    None
}
