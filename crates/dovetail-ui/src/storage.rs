//! View-preference persistence. Only the active filter and sort
//! option go through localStorage; task data itself never persists.

use dovetail_core::{FilterOption, SortOption};

const FILTER_STORAGE_KEY: &str = "dovetail.filter";
const SORT_STORAGE_KEY: &str = "dovetail.sort";

fn read_item(key: &str) -> Option<String> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(key).ok().flatten())
}

fn write_item(key: &str, value: &str) {
    if let Some(storage) = web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    {
        let _ = storage.set_item(key, value);
    }
}

pub fn load_filter_option() -> FilterOption {
    read_item(FILTER_STORAGE_KEY)
        .as_deref()
        .and_then(FilterOption::parse)
        .unwrap_or_default()
}

pub fn save_filter_option(filter: FilterOption) {
    write_item(FILTER_STORAGE_KEY, filter.storage_value());
}

pub fn load_sort_option() -> SortOption {
    read_item(SORT_STORAGE_KEY)
        .as_deref()
        .and_then(SortOption::parse)
        .unwrap_or_default()
}

pub fn save_sort_option(sort: SortOption) {
    write_item(SORT_STORAGE_KEY, sort.storage_value());
}
