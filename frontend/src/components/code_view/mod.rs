//! Read-only code block with line numbers and syntax colouring.

use yew::prelude::*;

mod highlight;

use highlight::{Highlighter, TokenKind};

#[derive(Properties, PartialEq, Clone)]
pub struct CodeViewProps {
    pub code: String,
    /// Language value; selects the highlighting rules.
    pub language: String,
}

pub struct CodeView {
    highlighter: Option<Highlighter>,
}

impl Component for CodeView {
    type Message = ();
    type Properties = CodeViewProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            highlighter: Highlighter::for_language(&ctx.props().language),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().language != old_props.language {
            self.highlighter = Highlighter::for_language(&ctx.props().language);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="code-block">
                { for ctx.props().code.lines().enumerate().map(|(index, line)| html! {
                    <div class="code-line">
                        <span class="line-number">{ (index + 1).to_string() }</span>
                        <span class="line-text">{ self.render_line(line) }</span>
                    </div>
                }) }
            </div>
        }
    }
}

impl CodeView {
    fn render_line(&self, line: &str) -> Html {
        let Some(highlighter) = &self.highlighter else {
            return html! { { line.to_string() } };
        };
        html! {
            { for highlighter.tokens(line).into_iter().map(|token| match token.kind {
                TokenKind::Plain => html! { { token.text.to_string() } },
                kind => html! { <span class={kind.css_class()}>{ token.text.to_string() }</span> },
            }) }
        }
    }
}
