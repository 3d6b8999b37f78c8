#[cfg(test)]
mod tests {
    use crate::schemas::ApiDoc;
    use utoipa::openapi::{schema::Schema, PathItemType, RefOr};
    use utoipa::OpenApi;

    fn object_properties(name: &str) -> Vec<String> {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.expect("components");
        match components.schemas.get(name) {
            Some(RefOr::T(Schema::Object(obj))) => obj.properties.keys().cloned().collect(),
            _ => panic!("{name} should be an object schema"),
        }
    }

    #[test]
    fn test_openapi_schema_generation() {
        let openapi = ApiDoc::openapi();

        let components = openapi.components.as_ref().unwrap();
        for schema in ["ErrorResponse", "HealthResponse", "HotelDetail", "UserResponse", "TokenResponse"] {
            assert!(components.schemas.contains_key(schema), "missing schema {schema}");
        }

        assert!(serde_json::to_string(&openapi).is_ok());
    }

    #[test]
    fn test_error_response_schema_structure() {
        let properties = object_properties("ErrorResponse");
        for field in ["error", "code", "success"] {
            assert!(properties.iter().any(|p| p == field));
        }
    }

    #[test]
    fn test_health_response_schema_structure() {
        let properties = object_properties("HealthResponse");
        for field in ["status", "version", "database"] {
            assert!(properties.iter().any(|p| p == field));
        }
    }

    #[test]
    fn test_user_response_hides_password_hash() {
        let properties = object_properties("UserResponse");
        assert!(properties.iter().any(|p| p == "profile"));
        assert!(!properties.iter().any(|p| p.contains("password")));
    }

    #[test]
    fn test_openapi_paths_contain_health_endpoint() {
        let openapi = ApiDoc::openapi();

        let health_path = openapi.paths.paths.get("/health").unwrap();
        let health_get = health_path.operations.get(&PathItemType::Get).unwrap();

        assert!(health_get.responses.responses.contains_key("200"));
        assert!(health_get.responses.responses.contains_key("500"));
    }

    #[test]
    fn test_resource_paths_documented() {
        let openapi = ApiDoc::openapi();
        let paths = &openapi.paths.paths;

        let expected = [
            ("/hotels", PathItemType::Post),
            ("/hotels/{hotel_id}", PathItemType::Put),
            ("/hotels/{hotel_id}/group_contracts", PathItemType::Get),
            ("/room_types/{room_type_id}/seasons/{season_id}/occupancy_rates", PathItemType::Post),
            ("/booking_policies/{policy_id}", PathItemType::Delete),
            ("/group_contracts", PathItemType::Get),
            ("/token", PathItemType::Post),
            ("/users/", PathItemType::Post),
            ("/users/me/", PathItemType::Get),
            ("/users/{user_id}", PathItemType::Delete),
            ("/users/promote-admin/{user_id}", PathItemType::Put),
        ];
        for (path, method) in expected {
            let item = paths
                .get(path)
                .unwrap_or_else(|| panic!("missing path {path}"));
            assert!(item.operations.contains_key(&method), "missing operation on {path}");
        }
    }

    #[test]
    fn test_bearer_security_scheme_registered() {
        let openapi = ApiDoc::openapi();
        let json = serde_json::to_value(&openapi).unwrap();

        let scheme = &json["components"]["securitySchemes"]["bearer"];
        assert_eq!(scheme["type"], "http");
        assert_eq!(scheme["scheme"], "bearer");

        let me = &json["paths"]["/users/me/"]["get"]["security"];
        assert!(me.as_array().is_some_and(|s| !s.is_empty()));
    }

    #[test]
    fn test_all_error_responses_reference_correct_schema() {
        let openapi_json = serde_json::to_string(&ApiDoc::openapi()).unwrap();

        assert!(!openapi_json.contains("crate.schemas.ErrorResponse"));
        assert!(!openapi_json.contains("crate::schemas::ErrorResponse"));
        assert!(openapi_json.contains("#/components/schemas/ErrorResponse"));
    }
}
