use anyhow::Result;
use httpmock::prelude::*;
use venue_access::core::{AccessibilityFeature, PlaceSource, VenueCategory};
use venue_access::{AppConfig, Directory, InferenceClient, OpenAiClient, PlaceResult};

fn completion(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

fn config_for(server: &MockServer) -> Result<AppConfig> {
    let toml_content = format!(
        r#"
[inference]
endpoint = "{base}/v1"
api_key = "sk-test"

[places]
endpoint = "{base}/place"
api_key = "maps-test"
"#,
        base = server.base_url()
    );
    Ok(AppConfig::from_toml_str(&toml_content)?)
}

#[tokio::test]
async fn test_place_lookup_to_searchable_venue() -> Result<()> {
    let server = MockServer::start();

    let cafe_details = server.mock(|when, then| {
        when.method(GET)
            .path("/place/details/json")
            .query_param("place_id", "cafe-1");
        then.status(200).json_body(serde_json::json!({
            "status": "OK",
            "result": {
                "place_id": "cafe-1",
                "name": "בית קפה נגיש",
                "formatted_address": "דיזנגוף 50, תל אביב",
                "geometry": {"location": {"lat": 32.0775, "lng": 34.7741}},
                "formatted_phone_number": "03-555-1234",
                "opening_hours": {"weekday_text": ["Sunday: 8:00–22:00", "Saturday Closed"]},
                "types": ["cafe", "restaurant", "food"],
                "rating": 4.4
            }
        }));
    });

    let park_details = server.mock(|when, then| {
        when.method(GET)
            .path("/place/details/json")
            .query_param("place_id", "park-1");
        then.status(200).json_body(serde_json::json!({
            "status": "OK",
            "result": {
                "place_id": "park-1",
                "name": "פארק הירקון",
                "formatted_address": "תל אביב",
                "geometry": {"location": {"lat": 32.0983, "lng": 34.8106}},
                "types": ["park", "tourist_attraction"],
                "photos": [{"photo_reference": "park-photo"}]
            }
        }));
    });

    let cafe_inference = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/chat/completions")
            .header("authorization", "Bearer sk-test")
            .body_contains("בית קפה נגיש");
        then.status(200).json_body(completion(
            "```json\n{\"isWheelchairAccessible\": true, \"hasElevator\": true, \
             \"hasAccessibleParking\": false, \"comments\": \"כניסה ללא מדרגות\"}\n```",
        ));
    });

    let park_inference = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/chat/completions")
            .body_contains("פארק הירקון");
        then.status(200).json_body(completion(
            "{\"hasAccessibleRestrooms\": true, \"hasAccessibleParking\": true}",
        ));
    });

    let config = config_for(&server)?;
    let places = config.places_client();
    let mut directory = Directory::new(InferenceClient::with_settings(
        config.openai_client(),
        config.inference_settings(),
    ));

    let cafe = places.place_details("cafe-1").await?;
    directory.select_place(cafe).await?;
    let park = places.place_details("park-1").await?;
    directory.select_place(park).await?;

    cafe_details.assert();
    park_details.assert();
    cafe_inference.assert();
    park_inference.assert();

    let venues = directory.venues();
    assert_eq!(venues.len(), 2);

    let cafe = &venues[0];
    assert_eq!(cafe.id, "cafe-1");
    assert_eq!(cafe.category, VenueCategory::Restaurant);
    assert_eq!(
        cafe.features,
        vec![
            AccessibilityFeature::WheelchairAccessible,
            AccessibilityFeature::Elevator
        ]
    );
    assert_eq!(cafe.description, "כניסה ללא מדרגות");
    assert_eq!(cafe.opening_hours.len(), 1);
    assert_eq!(
        cafe.opening_hours.get("Sunday").map(String::as_str),
        Some("8:00–22:00")
    );
    assert_eq!(
        cafe.image_url,
        "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4"
    );

    let park = &venues[1];
    assert_eq!(park.category, VenueCategory::Park);
    assert_eq!(
        park.features,
        vec![
            AccessibilityFeature::AccessibleRestroom,
            AccessibilityFeature::AccessibleParking
        ]
    );
    assert!(park.image_url.contains("photo_reference=park-photo"));
    assert_eq!(park.rating, 0.0);
    assert_eq!(park.phone, "");

    let found = directory.search("קפה");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "cafe-1");
    assert_eq!(directory.search("").len(), 2);
    assert!(directory.search("מוזיאון").is_empty());
    assert_eq!(directory.venues().len(), 2);

    let center = directory.map_center();
    assert_eq!(center.lat, 32.0775);

    Ok(())
}

#[tokio::test]
async fn test_inference_failures_still_produce_venues() -> Result<()> {
    let server = MockServer::start();

    let unauthorized = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/chat/completions")
            .body_contains("Closed Cafe");
        then.status(401)
            .json_body(serde_json::json!({"error": {"message": "Incorrect API key provided"}}));
    });

    let prose = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/chat/completions")
            .body_contains("Chatty Museum");
        then.status(200)
            .json_body(completion("I could not find accessibility information."));
    });

    let config = config_for(&server)?;
    let mut directory = Directory::new(InferenceClient::with_settings(
        config.openai_client(),
        config.inference_settings(),
    ));

    let closed_cafe: PlaceResult = serde_json::from_value(serde_json::json!({
        "place_id": "c1",
        "name": "Closed Cafe",
        "formatted_address": "Main St 1",
        "types": ["cafe"]
    }))?;
    let chatty_museum: PlaceResult = serde_json::from_value(serde_json::json!({
        "name": "Chatty Museum",
        "types": ["museum"]
    }))?;

    let first = directory.select_place(closed_cafe).await?.clone();
    let second = directory.select_place(chatty_museum).await?.clone();

    unauthorized.assert();
    prose.assert();

    assert!(first.features.is_empty());
    assert_eq!(first.description, "");
    assert_eq!(first.category, VenueCategory::Restaurant);

    assert!(second.features.is_empty());
    assert_eq!(second.description, "");
    assert_eq!(second.category, VenueCategory::Museum);
    assert!(second.id.chars().all(|c| c.is_ascii_digit()));

    assert_eq!(directory.venues().len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_request_carries_sampling_parameters() -> Result<()> {
    let server = MockServer::start();

    let inference = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/chat/completions")
            .json_body_partial(
                r#"{"model": "gpt-4-turbo", "max_tokens": 3000, "temperature": 0.5, "top_p": 1.0}"#,
            );
        then.status(200).json_body(completion("{}"));
    });

    let config = config_for(&server)?;
    let client =
        InferenceClient::with_settings(config.openai_client(), config.inference_settings());
    let outcome = client.generate_access_info("Cafe", "Main St").await;

    inference.assert();
    assert!(outcome.access_info().is_some());
    Ok(())
}

#[tokio::test]
async fn test_places_without_id_selected_back_to_back_are_all_kept() -> Result<()> {
    let server = MockServer::start();
    let inference = server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(200).json_body(completion("{}"));
    });

    // No API key: every inference fails immediately without a request.
    let client = OpenAiClient::new(None).with_endpoint(format!("{}/v1", server.base_url()));
    let mut directory = Directory::new(InferenceClient::new(client));

    for name in ["גן שעשועים", "ספרייה", "בריכה עירונית", "מוזיאון", "קולנוע"] {
        let place: PlaceResult = serde_json::from_value(serde_json::json!({ "name": name }))?;
        directory.select_place(place).await?;
    }

    inference.assert_hits(0);
    let venues = directory.venues();
    assert_eq!(venues.len(), 5);
    let mut ids: Vec<&str> = venues.iter().map(|v| v.id.as_str()).collect();
    ids.dedup();
    assert_eq!(ids.len(), 5);
    assert!(venues.iter().all(|v| v.features.is_empty()));
    Ok(())
}
