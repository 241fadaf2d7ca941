//! Runtime data of the `ProblemExplorer` component.

use common::explorer::ExplorerState;

pub struct ProblemExplorer {
    /// Records, tree, folder selection, filter and content panel.
    pub explorer: ExplorerState,

    /// The solution list request for the current language is in flight.
    pub loading: bool,

    /// Why the solution list could not be shown. Replaces the whole panel.
    pub error: Option<String>,

    /// Whether the folder path heading above the title is revealed.
    pub show_group: bool,

    /// Shown when the random pick found no candidate.
    pub notice: Option<String>,
}

impl ProblemExplorer {
    pub fn new() -> Self {
        Self {
            explorer: ExplorerState::new(),
            loading: true,
            error: None,
            show_group: false,
            notice: None,
        }
    }
}
