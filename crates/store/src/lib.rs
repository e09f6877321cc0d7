//! NLQ Store Library
//!
//! Record stores the generated filters run against:
//! - `MongoStore`: the `students` collection in MongoDB
//! - `MemoryStore`: documents seeded from a JSON file, matched in-process

pub mod convert;
pub mod factory;
pub mod matcher;
pub mod memory;
pub mod mongo;
pub mod traits;

pub use convert::{bson_to_json, document_to_json};
pub use factory::create_store;
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use traits::RecordStore;
