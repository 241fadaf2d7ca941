use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProblemExplorerProps {
    /// Value of the selected language, used in every request path.
    pub language: String,
}
