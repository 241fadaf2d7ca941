//! Language picker: a button showing the current language and a top sheet
//! listing every language the backend serves.

use common::model::language::{profile, Language};
use yew::prelude::*;

use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

#[derive(Properties, PartialEq, Clone)]
pub struct LanguageSwitcherProps {
    pub languages: Vec<Language>,
    /// Value of the selected language, e.g. `"python"`.
    pub selected: String,
    pub open: bool,
    pub sheet_ref: NodeRef,
    pub on_toggle: Callback<()>,
    pub on_dismiss: Callback<()>,
    pub on_select: Callback<String>,
}

pub struct LanguageSwitcher;

impl LanguageSwitcher {
    /// Name and icon for the selected value. Falls back to the built-in
    /// profile while the backend list is not loaded.
    fn current(props: &LanguageSwitcherProps) -> (String, String) {
        if let Some(language) = props.languages.iter().find(|l| l.value == props.selected) {
            return (language.name.clone(), language.icon.clone());
        }
        match profile(&props.selected) {
            Some(known) => (known.name.to_string(), known.icon.to_string()),
            None => (props.selected.clone(), String::new()),
        }
    }
}

impl Component for LanguageSwitcher {
    type Message = ();
    type Properties = LanguageSwitcherProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let (name, icon) = Self::current(props);
        let on_toggle = props.on_toggle.clone();
        let on_dismiss = props.on_dismiss.clone();

        html! {
            <div class="language-switcher">
                <button
                    class={classes!("language-button", props.open.then_some("open"))}
                    title="Change language"
                    onclick={Callback::from(move |_: MouseEvent| on_toggle.emit(()))}
                >
                    <span class="language-icon">{ icon }</span>
                    <span class="language-name">{ name }</span>
                </button>
                <YwMaterialTopSheet node_ref={props.sheet_ref.clone()} on_dismiss={on_dismiss}>
                    <h2 class="top-sheet-title">{ "Choose a language" }</h2>
                    if props.languages.is_empty() {
                        <p class="muted">{ "No languages available." }</p>
                    } else {
                        <ul class="language-list">
                            { for props.languages.iter().map(|language| {
                                let value = language.value.clone();
                                let on_select = props.on_select.clone();
                                let active = language.value == props.selected;
                                html! {
                                    <li key={language.value.clone()}>
                                        <button
                                            class={classes!("language-option", active.then_some("active"))}
                                            onclick={Callback::from(move |_: MouseEvent| on_select.emit(value.clone()))}
                                        >
                                            <span class="language-icon">{ language.icon.clone() }</span>
                                            <span>{ language.name.clone() }</span>
                                        </button>
                                    </li>
                                }
                            }) }
                        </ul>
                    }
                </YwMaterialTopSheet>
            </div>
        }
    }
}
