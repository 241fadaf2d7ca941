//! Problem explorer: folder tree, random pick controls and content panel.
//!
//! Follows the same split as every stateful component here: `state` holds
//! the data, `update` applies messages, `view` renders, `helpers` issues the
//! API requests. The solution list is (re)loaded on mount and whenever the
//! `language` prop changes.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ProblemExplorerProps;
pub use state::ProblemExplorer;

impl Component for ProblemExplorer {
    type Message = Msg;
    type Properties = ProblemExplorerProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut explorer = ProblemExplorer::new();
        helpers::load_solutions(&mut explorer, ctx);
        explorer
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().language != old_props.language {
            helpers::load_solutions(self, ctx);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
