//! cityradius-cli
//! ==============
//!
//! Front-end for [`cityradius_core`]. The binary (`cityradius`) loads a
//! point store once and then answers radius queries, either one at a time
//! from the command line or in an interactive prompt loop:
//!
//! ```text
//! cityradius stats
//! cityradius cities ford
//! cityradius query Ashford 5 --metric chebyshev
//! cityradius -i my-cities.txt.gz
//! ```
//!
//! The prompt loop lives in [`session`] and works over any
//! `BufRead`/`Write` pair.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod session;

pub use session::{write_result, Session};
