use axum::Json;
use serde_json::{json, Value};

use crate::app::COUPONS_PATH;

/// Path the OpenAPI document is served under.
pub const OPENAPI_PATH: &str = "/openapi/v1.json";

/// OpenAPI 3.1 description of the coupon routes.
pub async fn openapi_handler() -> Json<Value> {
    Json(document())
}

fn document() -> Value {
    let coupon_ref = json!({ "$ref": "#/components/schemas/Coupon" });
    let id_param = json!({
        "name": "id",
        "in": "path",
        "required": true,
        "schema": { "type": "string" },
    });
    let coupon_body = json!({
        "required": true,
        "content": { "application/json": { "schema": coupon_ref } },
    });
    let not_found = json!({ "description": "No coupon with this id" });

    json!({
        "openapi": "3.1.0",
        "info": {
            "title": "Coupon API",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "paths": {
            (COUPONS_PATH): {
                "get": {
                    "operationId": "listCoupons",
                    "responses": {
                        "200": {
                            "description": "Every stored coupon",
                            "content": { "application/json": {
                                "schema": { "type": "array", "items": coupon_ref },
                            } },
                        },
                    },
                },
                "post": {
                    "operationId": "createCoupon",
                    "requestBody": coupon_body,
                    "responses": {
                        "201": {
                            "description": "Coupon created",
                            "headers": { "Location": { "schema": { "type": "string" } } },
                            "content": { "application/json": { "schema": coupon_ref } },
                        },
                        "409": { "description": "A coupon with this id already exists" },
                    },
                },
            },
            (format!("{COUPONS_PATH}/{{id}}")): {
                "parameters": [id_param],
                "get": {
                    "operationId": "getCoupon",
                    "responses": {
                        "200": {
                            "description": "The coupon",
                            "content": { "application/json": { "schema": coupon_ref } },
                        },
                        "404": not_found,
                    },
                },
                "put": {
                    "operationId": "replaceCoupon",
                    "requestBody": coupon_body,
                    "responses": {
                        "204": { "description": "Coupon replaced" },
                        "404": { "description": "No coupon with this id, or nothing changed" },
                    },
                },
                "delete": {
                    "operationId": "deleteCoupon",
                    "responses": {
                        "204": { "description": "Coupon deleted" },
                        "404": not_found,
                    },
                },
            },
        },
        "components": {
            "schemas": {
                "Coupon": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "string" },
                        "code": { "type": ["string", "null"] },
                        "discount": { "type": "number" },
                        "expirationDate": { "type": "string", "format": "date-time" },
                    },
                },
            },
        },
    })
}
