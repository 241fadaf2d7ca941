//! View of the problem explorer.
//!
//! The sidebar holds the random pick controls and the tree; the main panel
//! shows the selected file. While the solution list loads, or when it failed,
//! the whole explorer is replaced by a status panel.

use std::collections::BTreeSet;
use std::rc::Rc;

use common::explorer::display_titles;
use common::model::rating::{MAX_RATING, MIN_RATING};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::code_view::CodeView;
use crate::components::file_node::FileNode;
use crate::components::rating_input::RatingInput;

use super::messages::Msg;
use super::state::ProblemExplorer;

pub fn view(component: &ProblemExplorer, ctx: &Context<ProblemExplorer>) -> Html {
    if component.loading {
        return html! {
            <div class="explorer-status">
                <div class="spinner" />
                <p>{ "Loading solution explorer..." }</p>
            </div>
        };
    }
    if let Some(error) = &component.error {
        return html! {
            <div class="explorer-status error" role="alert">
                <strong>{ "Error:" }</strong>
                <span>{ " Failed to initialize solution explorer." }</span>
                <p class="details">{ format!("Details: {}", error) }</p>
            </div>
        };
    }

    let link = ctx.link();
    html! {
        <div class="explorer">
            { build_sidebar(component, link) }
            { build_content_panel(component, ctx) }
        </div>
    }
}

fn build_sidebar(component: &ProblemExplorer, link: &Scope<ProblemExplorer>) -> Html {
    let state = &component.explorer;
    let selected_folders = Rc::new(state.selected_folders().clone());

    html! {
        <aside class="sidebar">
            <button class="random-button" onclick={link.callback(|_| Msg::PickRandom)}>
                { "Pick Random Problem" }
            </button>
            if let Some(notice) = &component.notice {
                <p class="notice">{ notice.clone() }</p>
            }

            { build_rating_filter(state.rating_filter(), link) }

            <div class="sidebar-section">
                <h3>{ "Folder Selection:" }</h3>
                <div class="button-row">
                    <button class="chip primary" onclick={link.callback(|_| Msg::SelectAll)}>{ "Select All" }</button>
                    <button class="chip" onclick={link.callback(|_| Msg::ClearAll)}>{ "Clear All" }</button>
                </div>
                if !selected_folders.is_empty() {
                    <p class="muted">{ format!("{} folder(s) in random pick", selected_folders.len()) }</p>
                }
            </div>

            <h2 class="tree-title">{ "Problems" }</h2>
            <div class="file-tree">
                if state.tree().is_empty() {
                    <p class="muted">{ "No solution files found." }</p>
                } else {
                    { for state.tree().iter().map(|node| tree_node(node, component, &selected_folders, link)) }
                }
            </div>
        </aside>
    }
}

fn tree_node(
    node: &common::tree::TreeNode,
    component: &ProblemExplorer,
    selected_folders: &Rc<BTreeSet<String>>,
    link: &Scope<ProblemExplorer>,
) -> Html {
    let state = &component.explorer;
    html! {
        <FileNode
            key={node.key()}
            node={node.clone()}
            expanded_folder={state.expanded_folder().map(str::to_string)}
            selected_folders={selected_folders.clone()}
            selected_file={state.selected_file().map(str::to_string)}
            on_file_select={link.callback(Msg::SelectFile)}
            on_folder_toggle={link.callback(Msg::ToggleFolder)}
            on_folder_select={link.callback(|(path, checked)| Msg::SelectFolder(path, checked))}
        />
    }
}

fn build_rating_filter(active: Option<u8>, link: &Scope<ProblemExplorer>) -> Html {
    let button = |value: Option<u8>, label: String| {
        html! {
            <button
                class={classes!("chip", (active == value).then_some("active"))}
                onclick={link.callback(move |_| Msg::ToggleRatingFilter(value))}
            >
                { label }
            </button>
        }
    };

    html! {
        <div class="sidebar-section">
            <h3>{ "Filter by Rating:" }</h3>
            <div class="button-row">
                { for (MIN_RATING..=MAX_RATING).map(|r| button(Some(r), format!("{}★", r))) }
                { button(None, "All".to_string()) }
            </div>
        </div>
    }
}

fn build_content_panel(component: &ProblemExplorer, ctx: &Context<ProblemExplorer>) -> Html {
    let language = &ctx.props().language;
    let Some(path) = component.explorer.selected_file() else {
        return html! {
            <section class="content-panel empty">
                <h3>{ "Select a Problem" }</h3>
                <p class="muted">
                    { format!("Choose a {} file from the list on the left to view its content and rating.", language) }
                </p>
            </section>
        };
    };

    let link = ctx.link();
    let content = component.explorer.content();
    let (main_title, group_title) = display_titles(path, language);
    let ready = !content.loading && content.error.is_none();

    html! {
        <section class="content-panel">
            <header class="content-header">
                <div class="title-row">
                    <h3 class="main-title">{ main_title }</h3>
                    <div class="title-actions">
                        if let Some(href) = &content.source_link {
                            <a class="link-button source" href={href.clone()} target="_blank" rel="noopener noreferrer">
                                { "Open Problem Link" }
                            </a>
                        }
                        if let Some(href) = &content.youtube_link {
                            <a class="link-button youtube" href={href.clone()} target="_blank" rel="noopener noreferrer">
                                { "Search YouTube" }
                            </a>
                        }
                        if !group_title.is_empty() {
                            <button class="chip" onclick={link.callback(|_| Msg::ToggleGroup)}>
                                { if component.show_group { "Hide Group" } else { "Show Group" } }
                            </button>
                        }
                    </div>
                </div>
                if component.show_group && !group_title.is_empty() {
                    <p class="group-title">{ format!("GROUP: {}", group_title) }</p>
                }
                if content.loading {
                    <p class="muted">{ "Loading content..." }</p>
                }
                if let Some(error) = &content.error {
                    <p class="error-text">{ format!("Error: {}", error) }</p>
                }
            </header>

            <div class="content-body">
                if ready && !content.description.is_empty() {
                    <div class="text-section">
                        <h4>{ "Problem Description:" }</h4>
                        <pre>{ content.description.clone() }</pre>
                    </div>
                }

                <CodeView code={content.code.clone()} language={language.clone()} />

                if ready && !content.complexity.is_empty() {
                    <div class="text-section">
                        <h4>{ "Complexity Analysis:" }</h4>
                        <pre>{ content.complexity.clone() }</pre>
                    </div>
                }

                if ready {
                    <div class="text-section">
                        <h4>{ "How difficult was this problem?" }</h4>
                        <RatingInput
                            filename={path.to_string()}
                            current_rating={content.rating}
                            on_rating_submitted={link.callback(Msg::RatingSubmitted)}
                        />
                    </div>
                }
            </div>
        </section>
    }
}
