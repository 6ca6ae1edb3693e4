use super::types::{Recipe, RecipeCreate, RecipeUpdate};
use chrono::Utc;
use mongodb::{
    bson::{doc, Document},
    error::Error as mongoError,
    options::FindOptions,
    sync::Client,
};
use thiserror::Error;
use uuid::Uuid;

// cap on list responses, searched or not
const LIST_LIMIT: i64 = 1000;

#[derive(Error, Debug)]
pub enum MongoRepError {
    #[error("error querying value")]
    QueryError(#[from] mongoError),
    #[error("recipe not found {0}")]
    RecipeNotFound(String),
    #[error("no fields to update")]
    EmptyUpdate(),
}

pub struct MongoRep {
    pub recipes: mongodb::sync::Collection<Recipe>,
}

impl MongoRep {
    pub fn init(uri: String, database: &str) -> Result<Self, MongoRepError> {
        let client = Client::with_uri_str(uri)?;
        let database = client.database(database);
        let rep = MongoRep {
            recipes: database.collection("recipes"),
        };
        return Ok(rep);
    }

    pub fn create_recipe(&self, create: RecipeCreate) -> Result<Recipe, MongoRepError> {
        let recipe = Recipe {
            id: Uuid::new_v4().to_string(),
            title: create.title,
            description: create.description,
            ingredients: create.ingredients,
            instructions: create.instructions,
            cooking_time: create.cooking_time,
            difficulty: create.difficulty,
            image_url: create.image_url,
            created_at: Utc::now(),
        };
        self.recipes
            .insert_one(&recipe, None)
            .map_err(MongoRepError::from)?;
        Ok(recipe)
    }

    pub fn get_recipes(&self, search: Option<&str>) -> Result<Vec<Recipe>, MongoRepError> {
        let filter = match search {
            Some(search) => doc! {"$or": [
                {"title": {"$regex": search, "$options": "i"}},
                {"description": {"$regex": search, "$options": "i"}},
                {"ingredients": {"$regex": search, "$options": "i"}},
            ]},
            None => doc! {},
        };
        let options = FindOptions::builder().limit(LIST_LIMIT).build();
        let cursor = self
            .recipes
            .find(filter, options)
            .map_err(MongoRepError::from)?;
        cursor
            .collect::<Result<Vec<Recipe>, mongoError>>()
            .map_err(MongoRepError::from)
    }

    pub fn get_recipe(&self, id: &str) -> Result<Recipe, MongoRepError> {
        match self
            .recipes
            .find_one(doc! {"id": id}, None)
            .map_err(MongoRepError::from)?
        {
            Some(recipe) => Ok(recipe),
            _ => Err(MongoRepError::RecipeNotFound(String::from(id))),
        }
    }

    pub fn update_recipe(&self, id: &str, update: RecipeUpdate) -> Result<Recipe, MongoRepError> {
        let mut set = Document::new();
        if let Some(title) = update.title {
            set.insert("title", title);
        }
        if let Some(description) = update.description {
            set.insert("description", description);
        }
        if let Some(ingredients) = update.ingredients {
            set.insert("ingredients", ingredients);
        }
        if let Some(instructions) = update.instructions {
            set.insert("instructions", instructions);
        }
        if let Some(cooking_time) = update.cooking_time {
            set.insert("cooking_time", cooking_time);
        }
        if let Some(difficulty) = update.difficulty {
            set.insert("difficulty", difficulty);
        }
        if let Some(image_url) = update.image_url {
            set.insert("image_url", image_url);
        }
        if set.is_empty() {
            return Err(MongoRepError::EmptyUpdate());
        }
        let result = self
            .recipes
            .update_one(doc! {"id": id}, doc! {"$set": set}, None)
            .map_err(MongoRepError::from)?;
        if result.matched_count == 0 {
            return Err(MongoRepError::RecipeNotFound(String::from(id)));
        }
        self.get_recipe(id)
    }

    pub fn delete_recipe(&self, id: &str) -> Result<(), MongoRepError> {
        let result = self
            .recipes
            .delete_one(doc! {"id": id}, None)
            .map_err(MongoRepError::from)?;
        if result.deleted_count == 0 {
            return Err(MongoRepError::RecipeNotFound(String::from(id)));
        }
        Ok(())
    }
}
