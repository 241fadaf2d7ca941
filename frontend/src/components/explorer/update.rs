//! Elm-style update for the problem explorer.
//!
//! Returns `true` when the view must re-render. Stale responses, for a
//! language or a file the user already left, return `false` untouched.

use gloo_console::{error, warn};
use yew::prelude::*;

use super::helpers::{load_solutions, open_file};
use super::messages::Msg;
use super::state::ProblemExplorer;

const NO_MATCH: &str = "No problems match the current filters.";

pub fn update(component: &mut ProblemExplorer, ctx: &Context<ProblemExplorer>, msg: Msg) -> bool {
    match msg {
        Msg::SolutionsLoaded { language, result } => {
            if language != ctx.props().language {
                return false;
            }
            component.loading = false;
            match result {
                Ok(records) => {
                    if let Err(e) = component.explorer.replace_solutions(records) {
                        error!(format!("Solution list for {} rejected: {}", language, e));
                        component.error = Some(e.to_string());
                    }
                }
                Err(e) => {
                    error!(format!("Failed to fetch solutions for {}: {}", language, e));
                    component.error = Some(e.to_string());
                }
            }
            true
        }
        Msg::SelectFile(path) => {
            open_file(component, ctx, path);
            true
        }
        Msg::ContentLoaded { path, result } => {
            if let Err(e) = &result {
                error!(format!("Failed to fetch content for {}: {}", path, e));
            }
            component.explorer.apply_content(&path, result)
        }
        Msg::ToggleFolder(path) => {
            component.explorer.toggle_folder(&path);
            true
        }
        Msg::SelectFolder(path, checked) => {
            component.explorer.select_folder(&path, checked);
            component.notice = None;
            true
        }
        Msg::SelectAll => {
            component.explorer.select_all();
            component.notice = None;
            true
        }
        Msg::ClearAll => {
            component.explorer.clear_all();
            component.notice = None;
            true
        }
        Msg::ToggleRatingFilter(rating) => {
            component.explorer.toggle_rating_filter(rating);
            component.notice = None;
            true
        }
        Msg::PickRandom => {
            let picked = component
                .explorer
                .pick_random(&mut rand::thread_rng())
                .map(|record| record.filename.clone());
            match picked {
                Some(path) => open_file(component, ctx, path),
                None => {
                    warn!(NO_MATCH);
                    component.notice = Some(NO_MATCH.to_string());
                }
            }
            true
        }
        Msg::RatingSubmitted(rating) => {
            if let Err(e) = component.explorer.apply_rating(&rating) {
                // The stored list no longer builds a tree; start over from the server.
                error!(format!("Could not apply rating for {}: {}", rating.filename, e));
                load_solutions(component, ctx);
            }
            true
        }
        Msg::ToggleGroup => {
            component.show_group = !component.show_group;
            true
        }
    }
}
