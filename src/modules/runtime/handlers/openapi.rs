//! OpenAPI documentation handler

use axum::{http::StatusCode, response::IntoResponse, Json};
use roster_types::wire::error_codes;
use roster_types::OrderField;
use serde_json::json;

/// Handler for OpenAPI documentation
pub struct OpenApiHandler;

impl OpenApiHandler {
    /// Handle GET /docs
    pub async fn handle() -> impl IntoResponse {
        (StatusCode::OK, Json(Self::generate_spec()))
    }

    /// Generate the OpenAPI 3.0 specification for the search endpoint
    pub fn generate_spec() -> serde_json::Value {
        let order_fields: Vec<String> = OrderField::all().iter().map(|f| f.to_string()).collect();

        let user_schema = json!({
            "type": "object",
            "properties": {
                "id": { "type": "integer", "format": "int64", "minimum": 0 },
                "name": { "type": "string" },
                "age": { "type": "integer", "minimum": 0 },
                "gender": { "type": "string" },
                "bio": { "type": "string" }
            },
            "required": ["id", "name", "age", "gender", "bio"]
        });

        json!({
            "openapi": "3.0.3",
            "info": {
                "title": "Roster search",
                "version": env!("CARGO_PKG_VERSION")
            },
            "paths": {
                "/search": {
                    "get": {
                        "summary": "Search person records",
                        "operationId": "search",
                        "parameters": [
                            Self::parameter("limit", json!({ "type": "integer", "minimum": 1, "default": 1 })),
                            Self::parameter("offset", json!({ "type": "integer", "minimum": 0, "default": 0 })),
                            Self::parameter("query", json!({ "type": "string", "default": "" })),
                            Self::parameter("order_field", json!({ "type": "string", "enum": order_fields, "default": "Name" })),
                            Self::parameter("order_by", json!({ "type": "integer", "enum": [-1, 0, 1], "default": 1 })),
                        ],
                        "responses": {
                            "200": {
                                "description": "One page of records",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "object",
                                            "properties": {
                                                "users": { "type": "array", "items": user_schema },
                                                "next_page": { "type": "boolean" }
                                            }
                                        }
                                    }
                                }
                            },
                            "400": Self::error_response("Invalid search parameter", &[
                                error_codes::BAD_LIMIT,
                                error_codes::BAD_OFFSET,
                                error_codes::BAD_ORDER_FIELD,
                                error_codes::BAD_ORDER_BY,
                            ]),
                            "401": Self::error_response("Missing or wrong access token", &[
                                error_codes::UNAUTHORIZED,
                            ])
                        }
                    }
                }
            }
        })
    }

    fn parameter(name: &str, schema: serde_json::Value) -> serde_json::Value {
        json!({
            "name": name,
            "in": "query",
            "required": false,
            "schema": schema
        })
    }

    fn error_response(description: &str, codes: &[&str]) -> serde_json::Value {
        json!({
            "description": description,
            "content": {
                "application/json": {
                    "schema": {
                        "type": "object",
                        "properties": {
                            "error": { "type": "string", "enum": codes }
                        }
                    }
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_lists_search_parameters() {
        let spec = OpenApiHandler::generate_spec();
        let params = spec["paths"]["/search"]["get"]["parameters"]
            .as_array()
            .unwrap();
        let names: Vec<&str> = params.iter().map(|p| p["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["limit", "offset", "query", "order_field", "order_by"]);
    }

    #[test]
    fn test_spec_order_field_enum() {
        let spec = OpenApiHandler::generate_spec();
        let schema = &spec["paths"]["/search"]["get"]["parameters"][3]["schema"];
        assert_eq!(schema["enum"], json!(["Id", "Age", "Name"]));
    }
}
