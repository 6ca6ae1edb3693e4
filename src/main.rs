mod infra;
use infra::routes::*;
use infra::*;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::serde::json::Json;
use rocket::{Build, Request, Response, Rocket};
use std::env;

#[macro_use]
extern crate rocket;
pub struct CORS;

#[rocket::async_trait]
impl Fairing for CORS {
    fn info(&self) -> Info {
        Info {
            name: "Attaching CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, PUT, DELETE, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
    }
}

#[catch(400)]
fn bad_request() -> Json<ApiMessage> {
    Json(ApiMessage::new("Bad request"))
}

#[catch(404)]
fn not_found() -> Json<ApiMessage> {
    Json(ApiMessage::new("Recipe not found"))
}

#[catch(422)]
fn unprocessable_entity() -> Json<ApiMessage> {
    Json(ApiMessage::new("Malformed request body"))
}

#[catch(500)]
fn internal_error() -> Json<ApiMessage> {
    Json(ApiMessage::new("Internal server error"))
}

fn build_rocket(uri: String, database: &str) -> Rocket<Build> {
    let db = MongoRep::init(uri, database).unwrap();
    rocket::build()
        .manage(db)
        .mount(
            "/api",
            routes![
                index,
                create_recipe,
                get_recipes,
                get_recipe,
                update_recipe,
                delete_recipe
            ],
        )
        .register(
            "/api",
            catchers![bad_request, not_found, unprocessable_entity, internal_error],
        )
        .attach(CORS)
}

#[launch]
fn rocket() -> _ {
    dotenv::dotenv().ok();
    let uri =
        env::var("MONGO_URL").unwrap_or_else(|_| String::from("mongodb://localhost:27017/"));
    let database = env::var("DB_NAME").unwrap_or_else(|_| String::from("recipes"));
    build_rocket(uri, &database)
}
