//! JSON snapshots of a [`Library`].
//!
//! A snapshot holds the derived first-letter index and the tagged items:
//!
//! ```json
//! {
//!   "firstLettersOfBooks": ["A"],
//!   "items": [
//!     { "type": "Book", "name": "Alpha", "pages": 5, "author": null },
//!     { "type": "Magazine", "name": "Any", "pages": 5, "period": 2 }
//!   ]
//! }
//! ```
//!
//! Loading re-validates every item and rebuilds the index from the items,
//! so a snapshot never yields a library that breaks its invariants.

use std::{fs, path::Path};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, DeserializeOwned},
    ser::SerializeStruct,
};

use crate::{edition::Edition, error::LibraryError, library::Library};

/// Serialized layout of a library
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LibrarySnapshot<T> {
    /// Index as it was written, checked against the items on load
    first_letters_of_books: Vec<Option<char>>,
    /// Editions in insertion order
    items: Vec<T>,
}

impl<T: Edition + Serialize> Serialize for Library<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Library", 2)?;
        state.serialize_field("firstLettersOfBooks", self.first_letters_of_books())?;
        state.serialize_field("items", self.items())?;
        state.end()
    }
}

impl<'de, T> Deserialize<'de> for Library<T>
where
    T: Edition + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let snapshot = LibrarySnapshot::<T>::deserialize(deserializer)?;
        restore(snapshot).map_err(de::Error::custom)
    }
}

/// Rebuild a library from its snapshot, rejecting an inconsistent index
fn restore<T: Edition>(snapshot: LibrarySnapshot<T>) -> Result<Library<T>, LibraryError> {
    let library: Library<T> = snapshot.items.into_iter().collect();

    if library.first_letters_of_books() != snapshot.first_letters_of_books.as_slice() {
        return Err(LibraryError::InvalidState(format!(
            "firstLettersOfBooks {:?} does not match the books held {:?}",
            snapshot.first_letters_of_books,
            library.first_letters_of_books()
        )));
    }

    Ok(library)
}

/// Encode a library as pretty-printed JSON
///
/// # Errors
///
/// Returns a `LibraryError::Serialization` if encoding fails.
pub fn to_json<T: Edition + Serialize>(library: &Library<T>) -> Result<String, LibraryError> {
    Ok(serde_json::to_string_pretty(library)?)
}

/// Decode a library from JSON
///
/// # Errors
///
/// Returns a `LibraryError::InvalidState` if the text is not a valid
/// snapshot: malformed JSON, an edition that fails validation, or an index
/// that disagrees with the items.
pub fn from_json<T: Edition + DeserializeOwned>(json: &str) -> Result<Library<T>, LibraryError> {
    serde_json::from_str(json)
        .map_err(|e| LibraryError::InvalidState(format!("Failed to parse snapshot: {e}")))
}

/// Save a library snapshot to a JSON file, replacing any previous one
///
/// # Errors
///
/// Returns a `LibraryError` if:
/// - The library cannot be serialized
/// - The file cannot be created or written
pub fn save_library<T, P>(library: &Library<T>, path: P) -> Result<(), LibraryError>
where
    T: Edition + Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let serialized = to_json(library)?;

    tracing::debug!(path = %path.display(), items = library.len(), "saving library snapshot");
    fs::write(path, serialized)?;

    Ok(())
}

/// Load a library snapshot from a JSON file
///
/// The loaded library has no observers; callers re-subscribe as needed.
///
/// # Errors
///
/// Returns a `LibraryError` if:
/// - The file does not exist (`NotFound`)
/// - The file cannot be read (`Io`)
/// - The content is not a valid snapshot (`InvalidState`)
pub fn load_library<T, P>(path: P) -> Result<Library<T>, LibraryError>
where
    T: Edition + DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading library snapshot");

    if !path.exists() {
        return Err(LibraryError::NotFound { path: path.to_path_buf() });
    }

    let contents = fs::read_to_string(path)?;
    from_json(&contents)
}
