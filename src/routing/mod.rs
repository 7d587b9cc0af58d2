//! Language-prefixed routing.
//!
//! Every public URL carries its language as the first segment
//! (`/en/hizmetler`); the back office under `/admin` never does.
//!
//! - `path`: pure resolution and rewriting (`resolve`, `strip`, `add`, `translate`)
//! - `store`: the `PathProvider` and `LocaleStore` seams plus in-memory implementations
//! - `sync`: the per-navigation effect keeping URL and active locale aligned
//! - `link`: anchors that always point at the active language
//! - `switch`: explicit, persisted language changes
//! - `routes`: registered content pages
//!
//! # Example
//!
//! ```rust
//! use clinic_site::i18n::Language;
//! use clinic_site::routing::{
//!     switch_language, LanguageSync, MemoryLocaleStore, MemoryPathProvider, PathProvider,
//!     SyncOutcome,
//! };
//!
//! let mut paths = MemoryPathProvider::new("/");
//! let mut store = MemoryLocaleStore::initialize("/", Some(Language::RUSSIAN));
//! let mut sync = LanguageSync::new();
//!
//! assert_eq!(
//!     sync.observe(&mut paths, &mut store),
//!     SyncOutcome::Redirected("/ru".to_string())
//! );
//!
//! switch_language(Language::ENGLISH, &mut paths, &mut store);
//! assert_eq!(paths.current(), "/en");
//! ```

mod link;
mod path;
mod routes;
mod store;
mod switch;
mod sync;

pub use link::LocalizedLink;
pub use path::{
    add, alternates, first_segment, is_admin_path, path_language, resolve, strip, translate,
    ADMIN_SEGMENT,
};
pub use routes::{is_locale_shaped, LabelFn, Route, RouteError, RouteTable};
pub use store::{initial_locale, LocaleStore, MemoryLocaleStore, MemoryPathProvider, PathProvider};
pub use switch::switch_language;
pub use sync::{LanguageSync, SyncOutcome};
