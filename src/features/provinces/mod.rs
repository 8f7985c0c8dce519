//! Provinces feature: a small reference dataset of provinces, each owned by
//! a country, exposed over REST.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/province/{id}` | Get a province by id |
//! | GET | `/api/province?name=` | Search by exact name (case-insensitive) |
//! | GET | `/api/province/country?name=` | List a country's provinces |
//! | POST | `/api/province/save` | Create a province |
//! | PUT | `/api/province` | Update a province's name |
//! | DELETE | `/api/province/{id}` | Delete a province |
//! | GET | `/api/province/all` | List every province |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod validation;

pub use services::ProvinceService;
pub use store::{PgProvinceStore, ProvinceStore};
