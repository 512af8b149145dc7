use dagpi::endpoints::{self, image, EndpointKind};
use dagpi::{Client, ClientConfig, DagpiError, PrideFlag, TimeoutConfig};
use httpmock::{Method::GET, MockServer};
use serde_json::{json, Map, Value};

const TOKEN: &str = "secret-token-123";
const AWKWARD: &str = "https://img.example/a&b=c/d?e#f";

fn client_for(server: &MockServer) -> Client {
    Client::with_config(ClientConfig::new(TOKEN).with_base_url(server.base_url())).unwrap()
}

#[tokio::test]
async fn every_catalog_endpoint_hits_its_path_with_token_and_query() {
    let server = MockServer::start_async().await;
    let client = client_for(&server);

    for endpoint in endpoints::all() {
        let expected: Vec<(&str, &str)> = endpoint
            .params
            .iter()
            .map(|name| match *name {
                "flag" => (*name, "lesbian"),
                _ => (*name, AWKWARD),
            })
            .collect();

        let mut mock = server
            .mock_async(|when, then| {
                let mut when = when
                    .method(GET)
                    .path(endpoint.path)
                    .header("authorization", TOKEN);
                for (name, value) in &expected {
                    when = when.query_param(*name, *value);
                }
                match endpoint.kind {
                    EndpointKind::Data => {
                        then.status(200).json_body(json!({ "endpoint": endpoint.name }));
                    }
                    EndpointKind::Image => {
                        then.status(200).body(endpoint.name.as_bytes());
                    }
                }
            })
            .await;

        let params: Vec<(&str, &str)> = expected
            .iter()
            .map(|(name, value)| match *name {
                "flag" => (*name, "LESBIAN"),
                _ => (*name, *value),
            })
            .collect();

        match endpoint.kind {
            EndpointKind::Data => {
                let map = client.data(endpoint.name, &params).await.unwrap();
                assert_eq!(map.get("endpoint"), Some(&json!(endpoint.name)));
            }
            EndpointKind::Image => {
                let bytes = client.image(endpoint.name, &params).await.unwrap();
                assert_eq!(bytes.as_ref(), endpoint.name.as_bytes());
            }
        }

        mock.assert_async().await;
        mock.delete_async().await;
    }
}

#[tokio::test]
async fn data_endpoint_returns_body_unmodified() {
    let server = MockServer::start_async().await;
    let payload = json!({
        "id": 42,
        "joke": "Why do programmers prefer dark mode? Because light attracts bugs.",
        "nested": { "list": [1, 2.5, "three", null, true] }
    });
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/data/joke").header("authorization", TOKEN);
            then.status(200).json_body(payload.clone());
        })
        .await;

    let joke = client_for(&server).joke().await.unwrap();

    mock.assert_async().await;
    assert_eq!(Value::Object(joke), payload);
}

#[tokio::test]
async fn field_endpoints_pick_their_field() {
    let server = MockServer::start_async().await;
    let cases = [
        ("/data/roast", "roast"),
        ("/data/fact", "fact"),
        ("/data/8ball", "response"),
        ("/data/yomama", "description"),
    ];
    for (path, field) in cases {
        let mut body = Map::new();
        body.insert(field.to_string(), json!(format!("{} text", field)));
        body.insert("extra".to_string(), json!(1));

        server
            .mock_async(|when, then| {
                when.method(GET).path(path);
                then.status(200).json_body(Value::Object(body));
            })
            .await;
    }

    let client = client_for(&server);
    assert_eq!(client.roast().await.unwrap(), Some(json!("roast text")));
    assert_eq!(client.fact().await.unwrap(), Some(json!("fact text")));
    assert_eq!(client.eightball().await.unwrap(), Some(json!("response text")));
    assert_eq!(client.yomama().await.unwrap(), Some(json!("description text")));
}

#[tokio::test]
async fn missing_field_is_none() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/data/roast");
            then.status(200).json_body(json!({ "something_else": true }));
        })
        .await;

    assert_eq!(client_for(&server).roast().await.unwrap(), None);
}

#[tokio::test]
async fn waifu_search_sends_name_as_query() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/data/waifu")
                .query_param("q", "Rem & Ram");
            then.status(200).json_body(json!({ "name": "Rem" }));
        })
        .await;

    let waifu = client_for(&server).waifu("Rem & Ram").await.unwrap();

    mock.assert_async().await;
    assert_eq!(waifu.get("name"), Some(&json!("Rem")));
}

#[tokio::test]
async fn image_endpoint_returns_exact_bytes() {
    let server = MockServer::start_async().await;
    let body: Vec<u8> = (0u8..=255).rev().collect();
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/image/triggered/")
                .query_param("url", AWKWARD)
                .header("authorization", TOKEN);
            then.status(200)
                .header("content-type", "image/gif")
                .body(body.clone());
        })
        .await;

    let bytes = client_for(&server).triggered(AWKWARD).await.unwrap();

    mock.assert_async().await;
    assert_eq!(bytes.to_vec(), body);
}

#[tokio::test]
async fn multi_parameter_wrappers_send_every_parameter() {
    let server = MockServer::start_async().await;
    let client = client_for(&server);

    let slap = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/image/slap/")
                .query_param("url", "https://a/1.png")
                .query_param("url2", "https://a/2.png");
            then.status(200).body("slap");
        })
        .await;
    let yt_dark = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/image/yt/")
                .query_param("username", "ferris")
                .query_param("text", "100%=great?")
                .query_param("dark", "true");
            then.status(200).body("yt-dark");
        })
        .await;
    let discord_light = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/image/discord/")
                .query_param("dark", "false");
            then.status(200).body("discord-light");
        })
        .await;
    let motiv = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/image/motiv/")
                .query_param("top_text", "top")
                .query_param("bottom_text", "bottom");
            then.status(200).body("motiv");
        })
        .await;

    assert_eq!(
        client.slap("https://a/1.png", "https://a/2.png").await.unwrap().as_ref(),
        b"slap"
    );
    assert_eq!(
        client
            .youtube_comment("https://a/1.png", "ferris", "100%=great?", true)
            .await
            .unwrap()
            .as_ref(),
        b"yt-dark"
    );
    assert_eq!(
        client
            .discord("https://a/1.png", "ferris", "hi", false)
            .await
            .unwrap()
            .as_ref(),
        b"discord-light"
    );
    assert_eq!(
        client
            .motivational("https://a/1.png", "top", "bottom")
            .await
            .unwrap()
            .as_ref(),
        b"motiv"
    );

    slap.assert_async().await;
    yt_dark.assert_async().await;
    discord_light.assert_async().await;
    motiv.assert_async().await;
}

#[tokio::test]
async fn pride_accepts_any_case_and_sends_canonical_flag() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/image/pride/")
                .query_param("url", "https://a/1.png")
                .query_param("flag", "bisexual");
            then.status(200).body("pride");
        })
        .await;

    let client = client_for(&server);
    let bytes = client.pride("https://a/1.png", "BiSexual").await.unwrap();

    assert_eq!(bytes.as_ref(), b"pride");
    mock.assert_async().await;
}

#[tokio::test]
async fn pride_rejects_unknown_flag_without_network_call() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200).body("should not be reached");
        })
        .await;

    let client = client_for(&server);
    let err = client.pride("https://a/1.png", "rainbow").await.unwrap_err();
    match err {
        DagpiError::InvalidParameter { name, value, .. } => {
            assert_eq!(name, "flag");
            assert_eq!(value, "rainbow");
        }
        other => panic!("expected InvalidParameter, got {:?}", other),
    }

    let generic = client
        .image("pride", &[("url", "https://a/1.png"), ("flag", "rainbow")])
        .await;
    assert!(matches!(generic, Err(DagpiError::InvalidParameter { .. })));

    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn pride_flag_enum_variant() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/image/pride/")
                .query_param("flag", "nonbinary");
            then.status(200).body("ok");
        })
        .await;

    client_for(&server)
        .pride_flag("https://a/1.png", PrideFlag::Nonbinary)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn generic_dispatch_rejects_bad_names_and_parameters() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200).body("unreachable");
        })
        .await;
    let client = client_for(&server);

    assert!(matches!(
        client.image("does-not-exist", &[("url", "x")]).await,
        Err(DagpiError::InvalidParameter { .. })
    ));
    assert!(matches!(
        client.data("pixel", &[]).await,
        Err(DagpiError::InvalidParameter { .. })
    ));
    assert!(matches!(
        client.image("slap", &[("url", "x")]).await,
        Err(DagpiError::InvalidParameter { .. })
    ));
    assert!(matches!(
        client.image("blur", &[("url", "x"), ("radius", "3")]).await,
        Err(DagpiError::InvalidParameter { .. })
    ));

    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn server_error_status_is_surfaced() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/data/captcha");
            then.status(429).body("Too many requests");
        })
        .await;

    match client_for(&server).captcha().await {
        Err(DagpiError::Status { status, body }) => {
            assert_eq!(status, 429);
            assert_eq!(body, "Too many requests");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    let config = ClientConfig::new(TOKEN)
        .with_base_url("http://127.0.0.1:1")
        .with_timeout(TimeoutConfig {
            connect_ms: 1_000,
            total_ms: 2_000,
        });
    let client = Client::with_config(config).unwrap();

    let err = client.pixelate("https://a/1.png").await.unwrap_err();
    assert!(err.is_transport(), "unexpected error: {:?}", err);
}

#[test]
fn request_carries_token_and_escaped_query() {
    let client = Client::new(TOKEN).unwrap();
    let request = client
        .executor()
        .build_request(&image::TWEET, &[AWKWARD, "ferris crab", "#rust & ?"])
        .unwrap();

    assert_eq!(request.url().path(), "/image/tweet/");
    assert_eq!(request.url().host_str(), Some("api.dagpi.xyz"));
    assert_eq!(
        request.url().query(),
        Some("url=https%3A%2F%2Fimg.example%2Fa%26b%3Dc%2Fd%3Fe%23f&username=ferris+crab&text=%23rust+%26+%3F")
    );
    assert_eq!(
        request.headers().get("authorization").unwrap().to_str().unwrap(),
        TOKEN
    );
}

#[test]
fn client_rejects_empty_token() {
    assert!(matches!(
        Client::new(""),
        Err(DagpiError::InvalidConfig(_))
    ));
}
