mod mongo;
pub mod routes;

pub use mongo::api::{MongoRep, MongoRepError};
pub use mongo::types::{ApiMessage, Recipe, RecipeCreate, RecipeUpdate};
