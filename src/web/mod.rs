//! Web interface
//!
//! JSON-over-HTTP front-end for the knowledge base, plus two HTML pages.
//!
//! | Route          | Purpose                                 |
//! |----------------|-----------------------------------------|
//! | `GET /`        | ask / add / stats page                  |
//! | `POST /ask`    | ranked answers (zero scores dropped)    |
//! | `POST /add`    | add a Q&A pair and rewrite the save file|
//! | `GET /stats`   | language and category distribution      |
//! | `GET /entries` | list entries                            |

mod pages;
pub mod routes;
pub mod server;

pub use server::{build_router, serve, AppState};
