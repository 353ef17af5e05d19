// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Satchel - an insertion-ordered key/value store and a codepoint-indexed
//! string.
//!
//! # Quick Start
//!
//! ```
//! use satchel::Store;
//! use satchel::Text;
//!
//! // Keys come back out in the order they went in.
//! let mut store = Store::new();
//! store.set("ALPHA", "abcd").set("NUM", 123).set("BOOL", true);
//! assert_eq!(store.to_json(), r#"{"ALPHA":"abcd","NUM":123,"BOOL":true}"#);
//!
//! // Counters keep integers integral until a float shows up.
//! store.increase("NUM").unwrap();
//! store.decrease_by("NUM", 0.5).unwrap();
//! assert_eq!(store["NUM"], 123.5);
//!
//! // Text is indexed by codepoint, not by byte.
//! let text = Text::from("naïve");
//! assert_eq!(text.length(), 5);
//! assert_eq!(text.bytes_count(), 6);
//! assert_eq!(text.substring(2, Some(2)).unwrap(), "ïv");
//! ```

pub mod error;
pub mod store;
pub mod text;

pub use error::Error;
pub use error::Result;
pub use store::Cursor;
pub use store::SortOrder;
pub use store::Store;
pub use text::Encoding;
pub use text::Text;
