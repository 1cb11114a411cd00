//! Общие типы и чистая логика: регионы, каталоги, выбор региона и фильтрация.
//!
//! Крейт не зависит от WASM и тестируется нативно.

pub mod domain;
pub mod shared;
