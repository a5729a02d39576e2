//! Name lookup across the administrative hierarchy.
//!
//! Each endpoint normalizes the path parameter with the rule configured for
//! its level (see [`normalization`]) and returns the match together with its
//! ancestors, nested child-to-root.
//!
//! | Method | Endpoint | Normalization |
//! |--------|----------|---------------|
//! | GET | `/search/village/{villageName}` | Capitalized |
//! | GET | `/search/cell/{cellName}` | Verbatim, all matches |
//! | GET | `/search/sector/{sectorName}` | Uppercase |
//! | GET | `/search/district/{districtName}` | Uppercase |
//! | GET | `/search/province/{provinceName}` | Uppercase |

pub mod dtos;
pub mod handlers;
pub mod normalization;
pub mod routes;
pub mod services;

pub use services::LookupService;
