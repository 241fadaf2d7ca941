//! Types and logic shared by the solution viewer's frontend and backend.
//!
//! - `model`: wire types exchanged with the REST API.
//! - `requests`: the error body of non-2xx responses.
//! - `error`: `FetchError` and `InvalidPathError`.
//! - `tree`: builds the folder/file tree from a flat list of solution records.
//! - `selection`: rating-weighted random pick over filtered records.
//! - `explorer`: the explorer's expansion, folder selection and content state.

pub mod error;
pub mod explorer;
pub mod model;
pub mod requests;
pub mod selection;
pub mod tree;
