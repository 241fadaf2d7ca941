//! Application shell: header with the language switcher and the explorer.
//!
//! Holds the language list, the selected language and whether the language
//! picker is open. The explorer gets the selected language as a prop and
//! reloads whenever it changes.

use common::error::FetchError;
use common::model::language::{Language, DEFAULT_LANGUAGE};
use gloo_console::error;
use yew::prelude::*;

use crate::api;
use crate::components::explorer::ProblemExplorer;
use crate::components::language_switcher::LanguageSwitcher;
use crate::helpers::show_toast;
use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet};

pub enum Msg {
    LanguagesLoaded(Result<Vec<Language>, FetchError>),
    SelectLanguage(String),
    TogglePicker,
    ClosePicker,
}

pub struct App {
    languages: Vec<Language>,
    selected_language: String,
    picker_open: bool,
    picker_ref: NodeRef,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link()
            .send_future(async { Msg::LanguagesLoaded(api::fetch_languages().await) });
        Self {
            languages: Vec::new(),
            selected_language: DEFAULT_LANGUAGE.to_string(),
            picker_open: false,
            picker_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::LanguagesLoaded(Ok(languages)) => {
                self.languages = languages;
                true
            }
            Msg::LanguagesLoaded(Err(e)) => {
                error!(format!("Failed to fetch languages: {}", e));
                show_toast(&format!("Could not load languages: {}", e));
                false
            }
            Msg::SelectLanguage(value) => {
                self.picker_open = false;
                close_top_sheet(self.picker_ref.clone());
                self.selected_language = value;
                true
            }
            Msg::TogglePicker => {
                self.picker_open = !self.picker_open;
                if self.picker_open {
                    open_top_sheet(self.picker_ref.clone());
                } else {
                    close_top_sheet(self.picker_ref.clone());
                }
                true
            }
            Msg::ClosePicker => {
                if !self.picker_open {
                    return false;
                }
                self.picker_open = false;
                close_top_sheet(self.picker_ref.clone());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="app">
                <header class="app-header">
                    <h1>{ "Solution Viewer" }</h1>
                    <LanguageSwitcher
                        languages={self.languages.clone()}
                        selected={self.selected_language.clone()}
                        open={self.picker_open}
                        sheet_ref={self.picker_ref.clone()}
                        on_toggle={link.callback(|_| Msg::TogglePicker)}
                        on_dismiss={link.callback(|_| Msg::ClosePicker)}
                        on_select={link.callback(Msg::SelectLanguage)}
                    />
                </header>
                <main class="app-main">
                    <ProblemExplorer language={self.selected_language.clone()} />
                </main>
            </div>
        }
    }
}
