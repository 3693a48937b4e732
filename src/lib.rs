//! mdweb - Literate Programming Processor
//!
//! A literate document interleaves prose with named code fragments that
//! reference each other with `<<name>>`. This library turns such a document
//! into two views:
//!
//! - **Weave**: markdown for human readers, with fragments rendered as
//!   indented code blocks under a bold heading.
//! - **Tangle**: the source text of one fragment with every reference
//!   expanded recursively, in the order the code has to appear.
//!
//! # Example
//!
//! ```
//! let web = "@\nA tiny program.\n<<main>>=\nstart\n<<helper>>\nend\n<<helper>>=\nmiddle\n";
//!
//! assert_eq!(mdweb::list_roots(web), vec![mdweb::FragmentName::new("main")]);
//! assert_eq!(mdweb::tangle(web, "main").unwrap(), "start\nmiddle\n\nend\n");
//! ```

pub mod commands;
pub mod config;
pub mod errors;
pub mod interface;
pub mod io;
pub mod model;
pub mod readers;
pub mod text_location;
pub mod weave;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use errors::{MdwebError, Result};
pub use interface::{list_roots, tangle, tangle_all, weave_text as weave, Context, Document};
pub use model::{Dependency, Fragment, FragmentGraph, FragmentName};
