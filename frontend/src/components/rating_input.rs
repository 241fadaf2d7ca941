//! Difficulty rating control: five buttons, hover preview and submission.
//!
//! A successful submission updates the local value, tells the parent through
//! `on_rating_submitted` and shows a confirmation that fades after a few
//! seconds. A failure only shows an error here; the parent is not told.

use common::error::FetchError;
use common::model::rating::{is_valid_rating, Rating, MAX_RATING, MIN_RATING};
use gloo_console::error;
use gloo_timers::future::TimeoutFuture;
use yew::prelude::*;

use crate::api;
use crate::config::RATING_MESSAGE_MS;

#[derive(Properties, PartialEq, Clone)]
pub struct RatingInputProps {
    pub filename: String,
    pub current_rating: Option<u8>,
    pub on_rating_submitted: Callback<Rating>,
}

pub enum Msg {
    Hover(u8),
    Submit(u8),
    /// Result of the submission issued for `filename`.
    Submitted {
        filename: String,
        result: Result<Rating, FetchError>,
    },
    /// Carries the generation of the confirmation it should clear.
    ClearMessage(u32),
}

pub struct RatingInput {
    /// Displayed rating; 0 when the file has none.
    rating: u8,
    /// Rating under the pointer; 0 when none.
    hover: u8,
    message: String,
    error: String,
    /// Bumped per confirmation so an older timeout does not clear a newer one.
    message_generation: u32,
}

impl RatingInput {
    fn with_rating(rating: Option<u8>) -> Self {
        Self {
            rating: rating.unwrap_or(0),
            hover: 0,
            message: String::new(),
            error: String::new(),
            message_generation: 0,
        }
    }

    /// Shows the confirmation when `saved` is for the `shown` file. Returns
    /// whether it did, so the caller can schedule clearing it.
    fn record_success(&mut self, shown: &str, saved: &Rating) -> bool {
        if saved.filename != shown {
            return false;
        }
        self.rating = saved.rating;
        self.message = "Rating submitted successfully!".to_string();
        self.message_generation = self.message_generation.wrapping_add(1);
        true
    }

    /// Shows `error` unless it belongs to a file other than the `shown` one.
    fn record_failure(&mut self, shown: &str, filename: &str, error: &FetchError) -> bool {
        if filename != shown {
            return false;
        }
        self.error = error.to_string();
        self.message.clear();
        true
    }
}

impl Component for RatingInput {
    type Message = Msg;
    type Properties = RatingInputProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self::with_rating(ctx.props().current_rating)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.filename != old_props.filename {
            self.message.clear();
            self.error.clear();
            self.hover = 0;
        }
        self.rating = props.current_rating.unwrap_or(0);
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Hover(value) => {
                self.hover = value;
                true
            }
            Msg::Submit(value) => {
                if !is_valid_rating(value) {
                    return false;
                }
                self.message = "Submitting...".to_string();
                self.message_generation = self.message_generation.wrapping_add(1);
                self.error.clear();
                let rating = Rating {
                    filename: ctx.props().filename.clone(),
                    rating: value,
                };
                ctx.link().send_future(async move {
                    let result = api::submit_rating(&rating).await;
                    Msg::Submitted {
                        filename: rating.filename,
                        result,
                    }
                });
                true
            }
            Msg::Submitted {
                result: Ok(saved), ..
            } => {
                let props = ctx.props();
                if self.record_success(&props.filename, &saved) {
                    let generation = self.message_generation;
                    ctx.link().send_future(async move {
                        TimeoutFuture::new(RATING_MESSAGE_MS).await;
                        Msg::ClearMessage(generation)
                    });
                }
                props.on_rating_submitted.emit(saved);
                true
            }
            Msg::Submitted {
                filename,
                result: Err(e),
            } => {
                error!(format!("Rating submission error for {}: {}", filename, e));
                self.record_failure(&ctx.props().filename, &filename, &e)
            }
            Msg::ClearMessage(generation) => {
                if generation != self.message_generation {
                    return false;
                }
                self.message.clear();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let shown = if self.hover > 0 { self.hover } else { self.rating };

        html! {
            <div class="rating-input">
                <div class="rating-buttons">
                    { for (MIN_RATING..=MAX_RATING).map(|value| html! {
                        <button
                            type="button"
                            key={value.to_string()}
                            class={classes!("rating-button", (value <= shown).then_some("filled"))}
                            aria-label={format!("Rate {} out of 5", value)}
                            onclick={link.callback(move |_| Msg::Submit(value))}
                            onmouseenter={link.callback(move |_| Msg::Hover(value))}
                            onmouseleave={link.callback(|_| Msg::Hover(0))}
                        >
                            { value.to_string() }
                        </button>
                    }) }
                </div>
                if !self.message.is_empty() {
                    <p class="success-text">{ self.message.clone() }</p>
                }
                if !self.error.is_empty() {
                    <p class="error-text">{ format!("Error: {}", self.error) }</p>
                }
            </div>
        }
    }
}
