use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::{Hertz, Mode};

/// SDR++ only knows one display mode for the bookmark list.
pub const BOOKMARK_DISPLAY_MODE: u8 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Bookmark {
    pub bandwidth: Hertz,
    pub frequency: Hertz,
    pub mode: Mode,
}

pub type BookmarkName = String;
pub type ListName = String;

/// One worksheet worth of bookmarks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkList {
    pub bookmarks: IndexMap<BookmarkName, Bookmark>,
    pub show_on_waterfall: bool,
}

/// Root of `frequency_manager_config.json`.
///
/// Field order is the key order in the written file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyManagerConfig {
    pub bookmark_display_mode: u8,
    pub lists: IndexMap<ListName, BookmarkList>,
    /// SDR++ rewrites this at runtime, the last added list is only a placeholder.
    pub selected_list: ListName,
}

impl Default for FrequencyManagerConfig {
    fn default() -> Self {
        Self {
            bookmark_display_mode: BOOKMARK_DISPLAY_MODE,
            lists: IndexMap::new(),
            selected_list: Default::default(),
        }
    }
}

impl FrequencyManagerConfig {
    /// Adds (or replaces) the list under the trimmed `name` and selects it.
    pub fn add_list(&mut self, name: &str, list: BookmarkList) {
        let name = name.trim().to_string();
        self.lists.insert(name.clone(), list);
        self.selected_list = name;
    }
}
