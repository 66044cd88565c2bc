//! # Repository Module
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Controller                                                            │
//! │       │                                                                 │
//! │       │  db.products().search_by_name("a")                             │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── fetch_all(&self)                                                  │
//! │  ├── insert(&self, draft)                                              │
//! │  ├── delete_by_id(&self, id)                                           │
//! │  ├── update_by_id(&self, id, draft)                                    │
//! │  └── search_by_name(&self, term)                                       │
//! │       │                                                                 │
//! │       │  One parameterized statement, auto-committed                   │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod product;
