//! Sheet that slides down from the top of the page.
//!
//! Visibility is a `show` class on the sheet element, toggled through the
//! `NodeRef` the parent passes in. The class change is deferred a little so
//! the CSS transition runs when the sheet was just mounted.

use gloo_timers::future::TimeoutFuture;
use uuid::Uuid;
use yew::platform::spawn_local;
use yew::prelude::*;

const SHOW_CLASS: &str = "show";
const TRANSITION_DELAY_MS: u32 = 50;

pub struct YwMaterialTopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
    /// Clicking the dimmed backdrop emits this.
    #[prop_or_default]
    pub on_dismiss: Callback<()>,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_dismiss = ctx.props().on_dismiss.clone();
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                <div class="top-sheet-backdrop" onclick={Callback::from(move |_: MouseEvent| on_dismiss.emit(()))} />
                <div class="top-sheet-body">
                    { ctx.props().children.clone() }
                </div>
            </div>
        }
    }
}

fn set_shown(top_sheet_ref: NodeRef, shown: bool) {
    spawn_local(async move {
        TimeoutFuture::new(TRANSITION_DELAY_MS).await;
        if let Some(top_sheet) = top_sheet_ref.cast::<web_sys::HtmlElement>() {
            let classes = top_sheet.class_list();
            let _ = if shown {
                classes.add_1(SHOW_CLASS)
            } else {
                classes.remove_1(SHOW_CLASS)
            };
        }
    });
}

pub fn open_top_sheet(top_sheet_ref: NodeRef) {
    set_shown(top_sheet_ref, true);
}

pub fn close_top_sheet(top_sheet_ref: NodeRef) {
    set_shown(top_sheet_ref, false);
}
