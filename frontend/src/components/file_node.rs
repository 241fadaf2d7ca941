//! One row of the problem tree, rendering its children recursively.
//!
//! A folder's children are shown only while it is the expanded folder.
//! Clicking a folder row toggles it; clicking its checkbox only changes the
//! folder selection. Clicking a file row selects the file.

use std::collections::BTreeSet;
use std::rc::Rc;

use common::tree::TreeNode;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FileNodeProps {
    pub node: TreeNode,
    #[prop_or_default]
    pub level: usize,
    pub expanded_folder: Option<String>,
    pub selected_folders: Rc<BTreeSet<String>>,
    pub selected_file: Option<String>,
    pub on_file_select: Callback<String>,
    pub on_folder_toggle: Callback<String>,
    /// Emits the folder path and its new checked state.
    pub on_folder_select: Callback<(String, bool)>,
}

pub struct FileNode;

impl Component for FileNode {
    type Message = ();
    type Properties = FileNodeProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        match &props.node {
            TreeNode::Folder { name, path, children } => folder_row(props, name, path, children),
            TreeNode::File { name, path, rating } => file_row(props, name, path, *rating),
        }
    }
}

fn indent(level: usize) -> String {
    format!("padding-left: {}rem;", level as f32 * 0.75)
}

fn folder_row(props: &FileNodeProps, name: &str, path: &str, children: &[TreeNode]) -> Html {
    let is_open = props.expanded_folder.as_deref() == Some(path);
    let is_selected = props.selected_folders.contains(path);

    let onclick = {
        let on_toggle = props.on_folder_toggle.clone();
        let path = path.to_string();
        Callback::from(move |_: MouseEvent| on_toggle.emit(path.clone()))
    };
    let on_check = {
        let on_select = props.on_folder_select.clone();
        let path = path.to_string();
        Callback::from(move |e: MouseEvent| {
            // keep the click from reaching the row and toggling the folder
            e.stop_propagation();
            on_select.emit((path.clone(), !is_selected));
        })
    };

    html! {
        <div class="tree-node">
            <div class="tree-row folder" style={indent(props.level)} {onclick}>
                <span
                    class={classes!("checkbox", is_selected.then_some("checked"))}
                    role="checkbox"
                    aria-checked={is_selected.to_string()}
                    onclick={on_check}
                >
                    if is_selected { { "✓" } }
                </span>
                <span class="node-icon">{ if is_open { "📂" } else { "📁" } }</span>
                <span class="node-name" title={name.to_string()}>{ name.to_string() }</span>
            </div>
            if is_open {
                <div class="tree-children">
                    { for children.iter().map(|child| html! {
                        <FileNode
                            key={child.key()}
                            node={child.clone()}
                            level={props.level + 1}
                            expanded_folder={props.expanded_folder.clone()}
                            selected_folders={props.selected_folders.clone()}
                            selected_file={props.selected_file.clone()}
                            on_file_select={props.on_file_select.clone()}
                            on_folder_toggle={props.on_folder_toggle.clone()}
                            on_folder_select={props.on_folder_select.clone()}
                        />
                    }) }
                </div>
            }
        </div>
    }
}

fn file_row(props: &FileNodeProps, name: &str, path: &str, rating: Option<u8>) -> Html {
    let is_active = props.selected_file.as_deref() == Some(path);
    let onclick = {
        let on_select = props.on_file_select.clone();
        let path = path.to_string();
        Callback::from(move |_: MouseEvent| on_select.emit(path.clone()))
    };

    html! {
        <div class="tree-node">
            <div class={classes!("tree-row", "file", is_active.then_some("active"))} style={indent(props.level)} {onclick}>
                <span class="node-icon">{ "•" }</span>
                <span class="node-name" title={name.to_string()}>{ name.to_string() }</span>
                if let Some(rating) = rating {
                    <span class="node-rating">{ format!("{}★", rating) }</span>
                }
            </div>
        </div>
    }
}
