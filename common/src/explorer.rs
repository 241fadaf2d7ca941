//! State behind the problem explorer view.
//!
//! `ExplorerState` owns the cached solution list of the current language, the
//! tree derived from it, the single expanded folder, the folder selection and
//! rating filter used by the random pick, and what the content panel shows.
//! The frontend component drives it through the transitions below and renders
//! from its getters; network calls stay outside.
//!
//! Content responses are tagged with the path they were requested for.
//! `apply_content` drops any response whose path is no longer the selected
//! file, so a slow answer for an earlier selection never overwrites the
//! current one.

use std::collections::BTreeSet;

use rand::Rng;

use crate::error::{FetchError, InvalidPathError};
use crate::model::content::FileContent;
use crate::model::language::extension_for;
use crate::model::rating::Rating;
use crate::model::solution::SolutionRecord;
use crate::selection;
use crate::tree::{build_tree, folder_paths, TreeNode};

pub const NO_DESCRIPTION: &str = "// No description provided.";
pub const NO_CODE: &str = "// No code found or file is empty.";

/// What the content panel displays for the selected file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileView {
    pub description: String,
    pub code: String,
    pub complexity: String,
    pub source_link: Option<String>,
    pub youtube_link: Option<String>,
    /// Taken from the in-memory record list, not from the content response.
    pub rating: Option<u8>,
    pub loading: bool,
    /// Set when the content request failed; hides the rating control.
    pub error: Option<String>,
}

impl FileView {
    fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    fn failed(error: &FetchError) -> Self {
        let message = error.to_string();
        Self {
            description: format!("// Error loading description: {}", message),
            code: format!("// Error loading code: {}", message),
            complexity: format!("// Error loading complexity: {}", message),
            error: Some(message),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExplorerState {
    solutions: Vec<SolutionRecord>,
    tree: Vec<TreeNode>,
    expanded_folder: Option<String>,
    selected_folders: BTreeSet<String>,
    rating_filter: Option<u8>,
    selected_file: Option<String>,
    content: FileView,
}

impl ExplorerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn solutions(&self) -> &[SolutionRecord] {
        &self.solutions
    }

    pub fn tree(&self) -> &[TreeNode] {
        &self.tree
    }

    pub fn expanded_folder(&self) -> Option<&str> {
        self.expanded_folder.as_deref()
    }

    pub fn selected_folders(&self) -> &BTreeSet<String> {
        &self.selected_folders
    }

    pub fn rating_filter(&self) -> Option<u8> {
        self.rating_filter
    }

    pub fn selected_file(&self) -> Option<&str> {
        self.selected_file.as_deref()
    }

    pub fn content(&self) -> &FileView {
        &self.content
    }

    pub fn rating_of(&self, filename: &str) -> Option<u8> {
        self.solutions
            .iter()
            .find(|s| s.filename == filename)
            .and_then(|s| s.rating)
    }

    /// Replaces the record list after a language change.
    ///
    /// The selected file and its content are cleared. Folder selection and
    /// expansion survive, minus paths missing from the new tree. On error the
    /// state is left untouched.
    pub fn replace_solutions(
        &mut self,
        solutions: Vec<SolutionRecord>,
    ) -> Result<(), InvalidPathError> {
        let tree = build_tree(&solutions)?;
        self.solutions = solutions;
        self.set_tree(tree);
        self.selected_file = None;
        self.content = FileView::default();
        Ok(())
    }

    fn set_tree(&mut self, tree: Vec<TreeNode>) {
        self.tree = tree;
        let present = folder_paths(&self.tree);
        self.selected_folders.retain(|p| present.contains(p));
        if self
            .expanded_folder
            .as_ref()
            .is_some_and(|p| !present.contains(p))
        {
            self.expanded_folder = None;
        }
    }

    /// Opens `path`, closing whichever folder was open; closes it if it was
    /// the open one.
    pub fn toggle_folder(&mut self, path: &str) {
        if self.expanded_folder.as_deref() == Some(path) {
            self.expanded_folder = None;
        } else {
            self.expanded_folder = Some(path.to_string());
        }
    }

    /// Adds or removes one folder from the random-pick scope. Neither parents
    /// nor children are touched.
    pub fn select_folder(&mut self, path: &str, checked: bool) {
        if checked {
            self.selected_folders.insert(path.to_string());
        } else {
            self.selected_folders.remove(path);
        }
    }

    pub fn select_all(&mut self) {
        self.selected_folders = folder_paths(&self.tree);
    }

    pub fn clear_all(&mut self) {
        self.selected_folders.clear();
    }

    /// Sets the rating filter; choosing the active value again clears it.
    pub fn toggle_rating_filter(&mut self, rating: Option<u8>) {
        self.rating_filter = if self.rating_filter == rating {
            None
        } else {
            rating
        };
    }

    /// Marks `path` as selected and clears the panel before its content is
    /// requested.
    pub fn select_file(&mut self, path: &str) {
        self.selected_file = Some(path.to_string());
        self.content = FileView::loading();
    }

    /// Applies the content response for `path`.
    ///
    /// Returns `false` and changes nothing when `path` is no longer the
    /// selected file.
    pub fn apply_content(&mut self, path: &str, result: Result<FileContent, FetchError>) -> bool {
        if self.selected_file.as_deref() != Some(path) {
            return false;
        }
        self.content = match result {
            Ok(content) => FileView {
                description: non_empty_or(content.description, NO_DESCRIPTION),
                code: non_empty_or(content.code, NO_CODE),
                complexity: content.complexity.unwrap_or_default(),
                source_link: content.source_link.filter(|l| !l.is_empty()),
                youtube_link: content.youtube_link.filter(|l| !l.is_empty()),
                rating: self.rating_of(path),
                loading: false,
                error: None,
            },
            Err(error) => FileView::failed(&error),
        };
        true
    }

    /// Records a rating the backend accepted and rebuilds the tree.
    pub fn apply_rating(&mut self, rating: &Rating) -> Result<(), InvalidPathError> {
        let mut solutions = self.solutions.clone();
        for record in solutions.iter_mut().filter(|s| s.filename == rating.filename) {
            record.rating = Some(rating.rating);
        }
        let tree = build_tree(&solutions)?;
        self.solutions = solutions;
        self.set_tree(tree);
        if self.selected_file.as_deref() == Some(rating.filename.as_str()) {
            self.content.rating = Some(rating.rating);
        }
        Ok(())
    }

    /// Draws a file with the current filters. `None` when nothing matches;
    /// the selection is not changed either way.
    pub fn pick_random<R: Rng>(&self, rng: &mut R) -> Option<&SolutionRecord> {
        selection::pick_random(
            &self.solutions,
            self.rating_filter,
            &self.selected_folders,
            rng,
        )
    }
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

/// Headings shown above the content panel for `path`.
///
/// The main title is the file name without the language's extension, the
/// group title the parent folders joined by spaces; both have dashes turned
/// into spaces and are upper-cased.
pub fn display_titles(path: &str, language: &str) -> (String, String) {
    if path.is_empty() {
        return (String::new(), String::new());
    }
    let extension = extension_for(language);
    let stem = path.strip_suffix(extension).unwrap_or(path);
    let mut parts: Vec<&str> = stem.split('/').collect();
    let file = parts.pop().unwrap_or_default();
    let title = |s: &str| s.replace('-', " ").to_uppercase();
    (title(file), title(&parts.join(" ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample() -> Vec<SolutionRecord> {
        vec![
            SolutionRecord::new("arrays/two-sum", Some(3)),
            SolutionRecord::new("arrays/three-sum", None),
            SolutionRecord::new("dp/climb-stairs", Some(5)),
        ]
    }

    fn loaded() -> ExplorerState {
        let mut state = ExplorerState::new();
        state.replace_solutions(sample()).unwrap();
        state
    }

    fn content(description: &str, code: &str) -> FileContent {
        FileContent {
            description: description.to_string(),
            code: code.to_string(),
            complexity: Some("O(n)".to_string()),
            ..FileContent::default()
        }
    }

    #[test]
    fn toggling_twice_restores_expansion() {
        let mut state = loaded();
        state.toggle_folder("arrays");
        assert_eq!(state.expanded_folder(), Some("arrays"));
        state.toggle_folder("arrays");
        assert_eq!(state.expanded_folder(), None);

        state.toggle_folder("dp");
        state.toggle_folder("arrays");
        state.toggle_folder("arrays");
        assert_eq!(state.expanded_folder(), None);
    }

    #[test]
    fn only_one_folder_is_open() {
        let mut state = loaded();
        state.toggle_folder("arrays");
        state.toggle_folder("dp");
        assert_eq!(state.expanded_folder(), Some("dp"));
    }

    #[test]
    fn folder_selection_does_not_touch_expansion() {
        let mut state = loaded();
        state.toggle_folder("dp");
        state.select_folder("arrays", true);
        state.select_folder("dp", true);
        state.select_folder("dp", false);
        assert_eq!(state.expanded_folder(), Some("dp"));
        assert_eq!(
            state.selected_folders().iter().collect::<Vec<_>>(),
            vec!["arrays"]
        );
    }

    #[test]
    fn select_all_and_clear_all() {
        let mut state = loaded();
        state.select_all();
        assert_eq!(state.selected_folders().len(), 2);
        state.clear_all();
        assert!(state.selected_folders().is_empty());
    }

    #[test]
    fn rating_filter_toggles_off() {
        let mut state = loaded();
        state.toggle_rating_filter(Some(3));
        assert_eq!(state.rating_filter(), Some(3));
        state.toggle_rating_filter(Some(4));
        assert_eq!(state.rating_filter(), Some(4));
        state.toggle_rating_filter(Some(4));
        assert_eq!(state.rating_filter(), None);
        state.toggle_rating_filter(None);
        assert_eq!(state.rating_filter(), None);
    }

    #[test]
    fn select_file_clears_content_before_fetch() {
        let mut state = loaded();
        state.select_file("arrays/two-sum");
        assert!(state.apply_content("arrays/two-sum", Ok(content("Sum", "def f(): pass"))));
        assert_eq!(state.content().code, "def f(): pass");

        state.select_file("dp/climb-stairs");
        assert_eq!(state.content().code, "");
        assert_eq!(state.content().description, "");
        assert!(state.content().loading);
    }

    #[test]
    fn late_response_for_previous_file_is_dropped() {
        let mut state = loaded();
        state.select_file("arrays/two-sum");
        state.select_file("dp/climb-stairs");

        assert!(state.apply_content("dp/climb-stairs", Ok(content("Climb", "climb()"))));
        assert!(!state.apply_content("arrays/two-sum", Ok(content("Two", "two()"))));

        assert_eq!(state.selected_file(), Some("dp/climb-stairs"));
        assert_eq!(state.content().description, "Climb");
        assert_eq!(state.content().rating, Some(5));
    }

    #[test]
    fn empty_fields_get_placeholders() {
        let mut state = loaded();
        state.select_file("arrays/three-sum");
        state.apply_content("arrays/three-sum", Ok(FileContent::default()));
        let view = state.content();
        assert_eq!(view.description, NO_DESCRIPTION);
        assert_eq!(view.code, NO_CODE);
        assert_eq!(view.complexity, "");
        assert_eq!(view.rating, None);
        assert!(!view.loading);
    }

    #[test]
    fn failed_fetch_fills_error_markers() {
        let mut state = loaded();
        state.select_file("arrays/two-sum");
        let error = FetchError::from_status(404, r#"{"detail":"File not found"}"#);
        assert!(state.apply_content("arrays/two-sum", Err(error)));

        let view = state.content();
        assert_eq!(view.error.as_deref(), Some("File not found"));
        assert_eq!(view.code, "// Error loading code: File not found");
        assert_eq!(view.description, "// Error loading description: File not found");
        assert_eq!(view.complexity, "// Error loading complexity: File not found");
        assert!(view.source_link.is_none());
    }

    #[test]
    fn accepted_rating_updates_records_tree_and_view() {
        let mut state = loaded();
        state.select_file("arrays/three-sum");
        state.apply_content("arrays/three-sum", Ok(content("d", "c")));

        state
            .apply_rating(&Rating {
                filename: "arrays/three-sum".into(),
                rating: 2,
            })
            .unwrap();

        assert_eq!(state.rating_of("arrays/three-sum"), Some(2));
        assert_eq!(state.content().rating, Some(2));
        assert_eq!(
            state.tree()[0].children()[0],
            TreeNode::File {
                name: "three-sum".into(),
                path: "arrays/three-sum".into(),
                rating: Some(2),
            }
        );
    }

    #[test]
    fn language_change_resets_content_and_prunes_folders() {
        let mut state = loaded();
        state.select_folder("arrays", true);
        state.select_folder("dp", true);
        state.toggle_folder("dp");
        state.select_file("dp/climb-stairs");

        state
            .replace_solutions(vec![SolutionRecord::new("arrays/two-sum", None)])
            .unwrap();

        assert_eq!(state.selected_file(), None);
        assert_eq!(state.content(), &FileView::default());
        assert_eq!(
            state.selected_folders().iter().collect::<Vec<_>>(),
            vec!["arrays"]
        );
        assert_eq!(state.expanded_folder(), None);
    }

    #[test]
    fn invalid_list_leaves_state_untouched() {
        let mut state = loaded();
        let err = state
            .replace_solutions(vec![SolutionRecord::new("bad//path", None)])
            .unwrap_err();
        assert_eq!(err.path, "bad//path");
        assert_eq!(state.solutions().len(), 3);
    }

    #[test]
    fn random_pick_respects_filters() {
        let mut state = loaded();
        let mut rng = StdRng::seed_from_u64(11);

        state.toggle_rating_filter(Some(5));
        assert_eq!(
            state.pick_random(&mut rng).map(|r| r.filename.as_str()),
            Some("dp/climb-stairs")
        );

        state.toggle_rating_filter(None);
        state.select_folder("arrays", true);
        for _ in 0..50 {
            let picked = state.pick_random(&mut rng).unwrap();
            assert!(picked.filename.starts_with("arrays/"));
        }

        state.clear_all();
        state.select_folder("missing", true);
        state.select_file("dp/climb-stairs");
        assert!(state.pick_random(&mut rng).is_none());
        assert_eq!(state.selected_file(), Some("dp/climb-stairs"));
    }

    #[test]
    fn titles_drop_extension_and_dashes() {
        assert_eq!(
            display_titles("two-pointers/valid-palindrome.py", "python"),
            ("VALID PALINDROME".to_string(), "TWO POINTERS".to_string())
        );
        assert_eq!(
            display_titles("a/b-c/lru-cache.rs", "rust"),
            ("LRU CACHE".to_string(), "A B C".to_string())
        );
        assert_eq!(
            display_titles("top.cpp", "c++"),
            ("TOP".to_string(), String::new())
        );
        assert_eq!(display_titles("", "python"), (String::new(), String::new()));
    }
}
