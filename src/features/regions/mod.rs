//! Rwanda administrative hierarchy (inzego z'ubuyobozi) feature.
//!
//! Read-only listings over the five levels of the hierarchy, either flat or
//! nested from provinces down to a fixed depth.
//!
//! ## Data Hierarchy
//!
//! - Level 1: Provinces (Intara) - 5 regions, Kigali City included
//! - Level 2: Districts (Uturere) - 30
//! - Level 3: Sectors (Imirenge) - 416
//! - Level 4: Cells (Utugari) - 2,148
//! - Level 5: Villages (Imidugudu) - 14,837
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/provinces` | All provinces |
//! | GET | `/districts` | All districts |
//! | GET | `/sectors` | All sectors |
//! | GET | `/cells` | All cells |
//! | GET | `/villages` | All villages |
//! | GET | `/provinces/districts` | Provinces with districts |
//! | GET | `/provinces/districts/sectors` | ... with sectors |
//! | GET | `/provinces/districts/sectors/cells` | ... with cells |
//! | GET | `/provinces/districts/sectors/cells/villages` | ... with villages |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod projection;
pub mod routes;
pub mod services;
pub mod store;

pub use services::RegionService;
pub use store::{PgRegionStore, RegionStore};
