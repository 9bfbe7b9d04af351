#![allow(dead_code)]

use axum::{Json, Router, http::Uri, routing::get};
use hateoas_links::prelude::*;
use serde_json::{Value, json};
use url::Url;

pub struct ItemController;

impl Controller for ItemController {
    const BASE_PATH: &'static str = "/items";
}

/// Paginated listing that links to itself, the next page and a search form.
pub async fn list_items(base: BaseUri, uri: Uri, params: QueryParams) -> Json<Value> {
    let builder = ControllerLinkBuilder::link_to::<ItemController>(&base);

    let page: u32 = params
        .get_first("page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(1);

    let mut next = uri_params_excluding(&uri, &["page"]);
    next.insert("page", vec![(page + 1).to_string()]);

    let mut links = Links::new();
    links
        .add(create_link(&builder, &uri_params(&uri)))
        .add(create_link(&builder, &next).with_relation(rel::NEXT))
        .add(create_templated_link_to::<ItemController>(
            &base,
            "search",
            &["q", "page"],
        ));

    Json(json!({
        "_links": links,
        "filters": uri_params_including_only(&uri, &["q", "sort"]),
    }))
}

pub fn public_config(base: &str) -> Config {
    Config {
        public_base_url: Some(Url::parse(base).unwrap()),
        ..Config::default()
    }
}

pub fn create_test_app(config: Config) -> Router {
    Router::new()
        .route("/items", get(list_items))
        .with_state(config)
}
