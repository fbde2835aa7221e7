use serde_json::{json, Value};

use super::*;

pub mod prelude {
    use crate::web::{self, api, sqlite};

    pub use crate::web::{
        tests::prelude::{LocalResponse as Response, *},
        Cfg,
    };

    /// An API instance on top of the sample waterfronts.
    pub fn setup() -> (Client, sqlite::Connections) {
        let (client, db) = setup_empty();
        web::tests::import_fixture(&db);
        (client, db)
    }

    pub fn setup_empty() -> (Client, sqlite::Connections) {
        setup_with_cfg(Cfg::default())
    }

    pub fn setup_with_cfg(cfg: Cfg) -> (Client, sqlite::Connections) {
        web::tests::rocket_test_setup_with_cfg(vec![("/", api::routes())], cfg)
    }

    pub fn test_json(r: &Response) {
        assert_eq!(
            r.headers().get("Content-Type").collect::<Vec<_>>()[0],
            "application/json"
        );
    }
}

use self::prelude::*;

fn get_json(client: &Client, uri: &str) -> (Status, Value) {
    let res = client.get(uri).dispatch();
    test_json(&res);
    let status = res.status();
    let body = res.into_json::<Value>().unwrap();
    (status, body)
}

fn ids(list: &Value) -> Vec<i64> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect()
}

fn no_error() -> Value {
    json!({
        "status": false,
        "name": null,
        "text": null,
        "level": null,
        "debug": null,
    })
}

mod pois {
    use super::*;

    #[test]
    fn get_poi_with_coordinates_and_hazards() {
        let (client, _db) = setup();
        let (status, body) = get_json(&client, "/pois/1");
        assert_eq!(Status::Ok, status);
        assert_eq!(1, body["id"]);
        assert_eq!("Newport Bayfront", body["name"]);
        assert_eq!(44.6752643, body["lat"]);
        assert_eq!(-124.072162, body["lng"]);
        assert_eq!(vec![1, 2], ids(&body["hazards"]));
        assert_eq!("Sneaker waves", body["hazards"][0]["name"]);
        assert_eq!(vec![1], ids(&body["categories"]));
        assert_eq!(1, body["story"]);
        assert_eq!("2014-08-08T23:27:05.568Z", body["created"]);
        assert_eq!(no_error(), body["error"]);
    }

    #[test]
    fn get_poi_with_media_links() {
        let (client, db) = setup_with_cfg(Cfg {
            media_url: "https://cdn.example.com/".into(),
            ..Default::default()
        });
        crate::web::tests::import_fixture(&db);
        let (_, body) = get_json(&client, "/pois/1");
        assert_eq!(
            "https://cdn.example.com/images/bayfront.jpg",
            body["images"][0]["link"]
        );
        assert_eq!(
            "https://www.youtube.com/watch?v=efgDdSWDg0g",
            body["videos"][0]["link"]
        );
    }

    #[test]
    fn get_poi_without_optional_fields() {
        let (client, _db) = setup();
        let (_, body) = get_json(&client, "/pois/2");
        assert_eq!(Value::Null, body["phone"]);
        assert_eq!(Value::Null, body["story"]);
        assert_eq!(json!([]), body["images"]);
    }

    #[test]
    fn get_missing_poi() {
        let (client, _db) = setup();
        let (status, body) = get_json(&client, "/pois/999");
        assert_eq!(Status::NotFound, status);
        assert_eq!(true, body["error"]["status"]);
        assert!(body["error"]["name"].as_str().unwrap().ends_with("Not Found"));
        assert_eq!("POI id 999 was not found.", body["error"]["text"]);
        assert_eq!("Error", body["error"]["level"]);
        assert!(body.get("pois").is_none());
        assert!(body.get("id").is_none());
    }

    #[test]
    fn get_poi_with_invalid_id() {
        let (client, _db) = setup();
        let (status, body) = get_json(&client, "/pois/abc");
        assert_eq!(Status::NotFound, status);
        assert_eq!("POI Not Found", body["error"]["name"]);
        assert!(body["error"]["debug"]
            .as_str()
            .unwrap()
            .starts_with("ParseIntError: "));
    }

    #[test]
    fn list_all_pois_by_id() {
        let (client, _db) = setup();
        let (status, body) = get_json(&client, "/pois");
        assert_eq!(Status::Ok, status);
        assert_eq!(vec![1, 2, 3, 4], ids(&body["pois"]));
        assert_eq!(no_error(), body["error"]);
    }

    #[test]
    fn list_pois_of_empty_database() {
        let (client, _db) = setup_empty();
        let (status, body) = get_json(&client, "/pois");
        assert_eq!(Status::Ok, status);
        assert_eq!(json!([]), body["pois"]);
        assert_eq!(true, body["error"]["status"]);
        assert_eq!("No POIs", body["error"]["name"]);
        assert_eq!("No POIs found", body["error"]["text"]);
        assert_eq!("Information", body["error"]["level"]);
    }

    #[test]
    fn list_pois_nearby() {
        let (client, _db) = setup();
        let (_, body) = get_json(&client, "/pois?lat=44.6752643&lng=-124.072162");
        assert_eq!(vec![1, 2], ids(&body["pois"]));
        let (_, body) = get_json(&client, "/pois?lat=44.6230&lng=-124.0540&proximity=100");
        assert_eq!(vec![2, 1, 4], ids(&body["pois"]));
        assert_eq!(no_error(), body["error"]);
    }

    #[test]
    fn list_pois_nearby_with_limit() {
        let (client, _db) = setup();
        let (_, body) = get_json(
            &client,
            "/pois?lat=44.6230&lng=-124.0540&proximity=100&limit=2",
        );
        assert_eq!(vec![2, 1], ids(&body["pois"]));
    }

    #[test]
    fn list_pois_far_away() {
        let (client, _db) = setup();
        let (status, body) = get_json(&client, "/pois?lat=0&lng=0&proximity=5");
        assert_eq!(Status::Ok, status);
        assert_eq!(json!([]), body["pois"]);
        assert_eq!("No POIs", body["error"]["name"]);
    }

    #[test]
    fn list_pois_with_default_proximity_from_config() {
        let (client, db) = setup_with_cfg(Cfg {
            default_proximity: 200,
            ..Default::default()
        });
        crate::web::tests::import_fixture(&db);
        let (_, body) = get_json(&client, "/pois?lat=44.6752643&lng=-124.072162");
        assert_eq!(vec![1, 2, 4, 3], ids(&body["pois"]));
    }

    #[test]
    fn list_pois_with_bad_location() {
        let (client, _db) = setup();
        let (status, body) = get_json(&client, "/pois?lat=not_a_number&lng=not_a_number");
        assert_eq!(Status::Ok, status);
        assert_eq!(vec![1, 2, 3, 4], ids(&body["pois"]));
        assert_eq!(true, body["error"]["status"]);
        assert_eq!("Bad location", body["error"]["name"]);
        assert_eq!(
            "There was an error with the given coordinates not_a_number, not_a_number",
            body["error"]["text"]
        );
        assert_eq!("Warning", body["error"]["level"]);
        assert!(body["error"]["debug"]
            .as_str()
            .unwrap()
            .starts_with("ParseFloatError: "));
    }

    #[test]
    fn list_pois_with_missing_longitude() {
        let (client, _db) = setup();
        let (_, body) = get_json(&client, "/pois?lat=44.6");
        assert_eq!(vec![1, 2, 3, 4], ids(&body["pois"]));
        assert_eq!("Bad location", body["error"]["name"]);
        assert_eq!(
            "There was an error with the given coordinates 44.6, None",
            body["error"]["text"]
        );
    }

    #[test]
    fn list_pois_with_bad_proximity() {
        let (client, _db) = setup();
        let (status, body) =
            get_json(&client, "/pois?lat=44.6752643&lng=-124.072162&proximity=far");
        assert_eq!(Status::Ok, status);
        assert_eq!(vec![1, 2], ids(&body["pois"]));
        assert_eq!("Bad proximity", body["error"]["name"]);
        assert_eq!(
            "There was an error finding POIs within far miles",
            body["error"]["text"]
        );
        assert_eq!("Warning", body["error"]["level"]);
    }

    #[test]
    fn list_pois_with_bad_limit() {
        let (client, _db) = setup();
        let (status, body) = get_json(&client, "/pois?limit=cat");
        assert_eq!(Status::Ok, status);
        assert_eq!(vec![1, 2, 3, 4], ids(&body["pois"]));
        assert_eq!("Bad Limit", body["error"]["name"]);
        assert_eq!("Invalid limit. Returning all results.", body["error"]["text"]);
        assert_eq!("Warning", body["error"]["level"]);
    }

    #[test]
    fn bad_location_takes_precedence_over_bad_limit() {
        let (client, _db) = setup();
        let (_, body) = get_json(&client, "/pois?lat=x&lng=y&proximity=z&limit=cat");
        assert_eq!("Bad location", body["error"]["name"]);
        assert_eq!(vec![1, 2, 3, 4], ids(&body["pois"]));
    }

    #[test]
    fn repeated_lookups_are_identical() {
        let (client, _db) = setup();
        let uri = "/pois?lat=44.6230&lng=-124.0540&proximity=100";
        assert_eq!(get_json(&client, uri), get_json(&client, uri));
    }

    #[test]
    fn list_pois_of_category() {
        let (client, _db) = setup();
        let (status, body) = get_json(&client, "/pois/categories/2");
        assert_eq!(Status::Ok, status);
        assert_eq!(vec![2, 3], ids(&body["pois"]));
        let (_, body) = get_json(&client, "/pois/categories/1?lat=46.1929&lng=-123.83");
        assert_eq!("No POIs", body["error"]["name"]);
        assert_eq!("No POIs found for category 1", body["error"]["text"]);
    }

    #[test]
    fn list_pois_of_category_without_pois() {
        let (client, _db) = setup();
        let (status, body) = get_json(&client, "/pois/categories/3");
        assert_eq!(Status::Ok, status);
        assert_eq!(json!([]), body["pois"]);
        assert_eq!("Information", body["error"]["level"]);
    }

    #[test]
    fn list_pois_of_missing_category() {
        let (client, _db) = setup();
        let (status, body) = get_json(&client, "/pois/categories/99");
        assert_eq!(Status::NotFound, status);
        assert_eq!("Category Not Found", body["error"]["name"]);
        assert_eq!("Category id 99 was not found.", body["error"]["text"]);
        let (status, _) = get_json(&client, "/pois/categories/fish");
        assert_eq!(Status::NotFound, status);
    }

    #[test]
    fn list_pois_of_product() {
        let (client, _db) = setup();
        let (_, body) = get_json(&client, "/pois/products/1");
        assert_eq!(vec![1, 2], ids(&body["pois"]));
        let (_, body) = get_json(&client, "/pois/products/2?limit=1");
        assert_eq!(vec![3], ids(&body["pois"]));
        let (status, body) = get_json(&client, "/pois/products/42");
        assert_eq!(Status::NotFound, status);
        assert_eq!("Product Not Found", body["error"]["name"]);
    }
}

mod products {
    use super::*;

    #[test]
    fn list_products() {
        let (client, _db) = setup();
        let (status, body) = get_json(&client, "/products");
        assert_eq!(Status::Ok, status);
        assert_eq!(vec![1, 2, 3], ids(&body["products"]));
        assert_eq!(no_error(), body["error"]);
        let (_, body) = get_json(&client, "/products?limit=1");
        assert_eq!(vec![1], ids(&body["products"]));
        let (_, body) = get_json(&client, "/products?limit=-1");
        assert_eq!(vec![1, 2, 3], ids(&body["products"]));
        assert_eq!("Bad Limit", body["error"]["name"]);
    }

    #[test]
    fn list_products_of_empty_database() {
        let (client, _db) = setup_empty();
        let (_, body) = get_json(&client, "/products");
        assert_eq!(json!([]), body["products"]);
        assert_eq!("No Products", body["error"]["name"]);
    }

    #[test]
    fn get_product_with_preparations() {
        let (client, _db) = setup();
        let (status, body) = get_json(&client, "/products/1");
        assert_eq!(Status::Ok, status);
        assert_eq!("Dungeness crab", body["name"]);
        assert_eq!(true, body["available"]);
        assert_eq!(
            vec!["Live", "Cooked"],
            body["preparations"]
                .as_array()
                .unwrap()
                .iter()
                .map(|p| p["name"].as_str().unwrap())
                .collect::<Vec<_>>()
        );
        assert_eq!(no_error(), body["error"]);
        let (_, body) = get_json(&client, "/products/2");
        assert_eq!(Value::Null, body["available"]);
    }

    #[test]
    fn get_missing_product() {
        let (client, _db) = setup();
        let (status, body) = get_json(&client, "/products/7");
        assert_eq!(Status::NotFound, status);
        assert_eq!("Product Not Found", body["error"]["name"]);
        assert_eq!("Product id 7 was not found.", body["error"]["text"]);
    }

    #[test]
    fn list_products_of_poi() {
        let (client, _db) = setup();
        let (_, body) = get_json(&client, "/products/pois/1");
        assert_eq!(vec![1], ids(&body["products"]));
        let (_, body) = get_json(&client, "/products/pois/4");
        assert_eq!(json!([]), body["products"]);
        assert_eq!("No Products", body["error"]["name"]);
        let (status, body) = get_json(&client, "/products/pois/999");
        assert_eq!(Status::NotFound, status);
        assert_eq!("POI Not Found", body["error"]["name"]);
    }
}

mod reference {
    use super::*;

    #[test]
    fn list_hazards() {
        let (client, _db) = setup();
        let (status, body) = get_json(&client, "/hazards?limit=2");
        assert_eq!(Status::Ok, status);
        assert_eq!(vec![1, 2], ids(&body["hazards"]));
        assert_eq!("Never turn your back on the ocean.", body["hazards"][0]["description"]);
        assert_eq!(json!({}), body["hazards"][0]["ext"]);
    }

    #[test]
    fn list_categories() {
        let (client, _db) = setup();
        let (_, body) = get_json(&client, "/categories");
        assert_eq!(vec![1, 2, 3], ids(&body["categories"]));
        assert_eq!("Boat launch", body["categories"][2]["category"]);
    }

    #[test]
    fn list_reference_data_of_empty_database() {
        let (client, _db) = setup_empty();
        let (_, body) = get_json(&client, "/hazards");
        assert_eq!("No Hazards", body["error"]["name"]);
        let (_, body) = get_json(&client, "/categories");
        assert_eq!("No Categories", body["error"]["name"]);
    }
}

mod locations {
    use super::*;

    #[test]
    fn list_distinct_cities() {
        let (client, _db) = setup();
        let (status, body) = get_json(&client, "/locations");
        assert_eq!(Status::Ok, status);
        assert_eq!(
            json!([
                {"location": 0, "name": "Astoria"},
                {"location": 1, "name": "Coos Bay"},
                {"location": 2, "name": "Newport"},
            ]),
            body["locations"]
        );
        assert_eq!(no_error(), body["error"]);
    }

    #[test]
    fn empty_locations_are_not_reported() {
        let (client, _db) = setup_empty();
        let (_, body) = get_json(&client, "/locations");
        assert_eq!(json!([]), body["locations"]);
        assert_eq!(no_error(), body["error"]);
    }
}

#[test]
fn internal_errors_are_reported_as_json() {
    let client = Client::tracked(rocket::build()).unwrap();
    let req = client.get("/");
    let res = json_error_response(req.inner(), Status::InternalServerError).unwrap();
    assert_eq!(Status::InternalServerError, res.status());
}
