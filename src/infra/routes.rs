use super::{ApiMessage, MongoRep, MongoRepError, Recipe, RecipeCreate, RecipeUpdate};
use log::{error, info};
use rocket::{delete, get, post, put};
use rocket::{http::Status, serde::json::Json, State};

#[get("/")]
pub fn index() -> Json<ApiMessage> {
    Json(ApiMessage::new("Recipe Sharing App API is running!"))
}

#[post("/recipes", data = "<recipe>")]
pub fn create_recipe(
    db: &State<MongoRep>,
    recipe: Json<RecipeCreate>,
) -> Result<Json<Recipe>, Status> {
    match db.create_recipe(recipe.into_inner()) {
        Ok(recipe) => {
            info!("created recipe {}", recipe.id);
            Ok(Json(recipe))
        }
        Err(e) => {
            error!("create failed: {}", e);
            Err(Status::BadRequest)
        }
    }
}

#[get("/recipes?<search>")]
pub fn get_recipes(
    db: &State<MongoRep>,
    search: Option<&str>,
) -> Result<Json<Vec<Recipe>>, Status> {
    match db.get_recipes(search) {
        Ok(recipes) => Ok(Json(recipes)),
        Err(e) => {
            error!("list failed: {}", e);
            Err(Status::InternalServerError)
        }
    }
}

#[get("/recipes/<id>")]
pub fn get_recipe(db: &State<MongoRep>, id: &str) -> Result<Json<Recipe>, Status> {
    match db.get_recipe(id) {
        Ok(recipe) => Ok(Json(recipe)),
        Err(MongoRepError::RecipeNotFound(_)) => Err(Status::NotFound),
        Err(e) => {
            error!("get failed: {}", e);
            Err(Status::InternalServerError)
        }
    }
}

#[put("/recipes/<id>", data = "<patch>")]
pub fn update_recipe(
    db: &State<MongoRep>,
    id: &str,
    patch: Json<RecipeUpdate>,
) -> Result<Json<Recipe>, Status> {
    match db.update_recipe(id, patch.into_inner()) {
        Ok(recipe) => {
            info!("updated recipe {}", recipe.id);
            Ok(Json(recipe))
        }
        Err(MongoRepError::EmptyUpdate()) => Err(Status::BadRequest),
        Err(MongoRepError::RecipeNotFound(_)) => Err(Status::NotFound),
        Err(e) => {
            error!("update failed: {}", e);
            Err(Status::InternalServerError)
        }
    }
}

#[delete("/recipes/<id>")]
pub fn delete_recipe(db: &State<MongoRep>, id: &str) -> Result<Json<ApiMessage>, Status> {
    match db.delete_recipe(id) {
        Ok(()) => {
            info!("deleted recipe {}", id);
            Ok(Json(ApiMessage::new("Recipe deleted successfully")))
        }
        Err(MongoRepError::RecipeNotFound(_)) => Err(Status::NotFound),
        Err(e) => {
            error!("delete failed: {}", e);
            Err(Status::InternalServerError)
        }
    }
}
