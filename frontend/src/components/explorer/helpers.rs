use yew::prelude::*;

use crate::api;

use super::messages::Msg;
use super::state::ProblemExplorer;

/// Requests the solution list of the current `language` prop.
pub fn load_solutions(component: &mut ProblemExplorer, ctx: &Context<ProblemExplorer>) {
    component.loading = true;
    component.error = None;
    component.notice = None;
    let language = ctx.props().language.clone();
    ctx.link().send_future(async move {
        let result = api::fetch_solutions(&language).await;
        Msg::SolutionsLoaded { language, result }
    });
}

/// Selects `path` and requests its content.
pub fn open_file(component: &mut ProblemExplorer, ctx: &Context<ProblemExplorer>, path: String) {
    component.explorer.select_file(&path);
    component.notice = None;
    let language = ctx.props().language.clone();
    ctx.link().send_future(async move {
        let result = api::fetch_content(&language, &path).await;
        Msg::ContentLoaded { path, result }
    });
}
