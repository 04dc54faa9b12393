//! End-to-end tests of the HTTP transport against a local Photon stand-in.

use std::net::SocketAddr;
use std::time::Duration;

use axum::extract::RawQuery;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::get;
use axum::Router;
use tokio_util::sync::CancellationToken;

use sunwalk::{Error, PhotonClient, PhotonConfig, PlaceKind, RequestOptions};

const COLLECTION: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [13.3888599, 52.5170365]},
            "properties": {
                "osm_key": "place", "osm_value": "city", "osm_type": "R", "osm_id": 62422,
                "name": "Berlin", "country": "Deutschland", "state": "Berlin"
            }
        },
        {
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [13.37, 52.51]},
            "properties": {
                "osm_key": "highway", "osm_value": "residential",
                "name": "Berliner Straße", "city": "Potsdam", "country": "Deutschland"
            }
        },
        {
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [13.3777, 52.5163]},
            "properties": {
                "osm_key": "place", "osm_value": "suburb",
                "name": "Mitte", "city": "Berlin", "state": "Berlin",
                "country": "Deutschland", "postcode": "10117"
            }
        }
    ]
}"#;

async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client(addr: SocketAddr) -> PhotonClient {
    let config = PhotonConfig {
        base_url: format!("http://{}", addr),
        ..Default::default()
    };
    PhotonClient::new(&config).unwrap()
}

async fn collection(
    headers: HeaderMap,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], &'static str) {
    let status = match headers.get(header::ACCEPT).and_then(|v| v.to_str().ok()) {
        Some("application/json") => StatusCode::OK,
        _ => StatusCode::NOT_ACCEPTABLE,
    };
    (status, [(header::CONTENT_TYPE, "application/json")], COLLECTION)
}

#[tokio::test]
async fn test_search_filters_and_normalizes() {
    let app = Router::new().route("/api", get(collection));
    let client = client(spawn(app).await);

    let places = client
        .search("Berlin", None, None, RequestOptions::default())
        .await
        .unwrap();

    assert_eq!(places.len(), 2);
    assert_eq!(places[0].name, "Berlin");
    // No city field, so the kind comes from osm_value
    assert_eq!(places[0].kind, PlaceKind::City);
    assert_eq!(places[0].context, "Berlin, Deutschland");
    assert_eq!(places[0].display_name, "Berlin, Berlin, Deutschland");

    assert_eq!(places[1].name, "Mitte");
    assert_eq!(places[1].kind, PlaceKind::City);
    assert_eq!(places[1].context, "Berlin, Berlin, Deutschland");
    assert_eq!(places[1].display_name, "Mitte, 10117, Berlin, Deutschland");
    assert_eq!(places[1].latitude, 52.5163);
    assert_eq!(places[1].longitude, 13.3777);
}

#[tokio::test]
async fn test_reverse_returns_everything() {
    let app = Router::new().route("/reverse", get(collection));
    let client = client(spawn(app).await);

    let places = client
        .reverse(52.5, 13.4, RequestOptions::default())
        .await
        .unwrap();

    assert_eq!(places.len(), 3);
    assert_eq!(places[1].name, "Berliner Straße");
    assert_eq!(places[1].kind, PlaceKind::City);
    assert_eq!(places[1].context, "Potsdam, Deutschland");
}

#[tokio::test]
async fn test_request_parameters() {
    async fn echo(RawQuery(query): RawQuery) -> (StatusCode, String) {
        // Smuggle the query string back through the name field
        let body = format!(
            r#"{{"features": [{{"geometry": {{"coordinates": [0.0, 0.0]}},
                "properties": {{"osm_key": "place", "name": "{}"}}}}]}}"#,
            query.unwrap_or_default()
        );
        (StatusCode::OK, body)
    }

    let app = Router::new().route("/api", get(echo));
    let client = client(spawn(app).await);

    let places = client
        .search("Berlin", None, None, RequestOptions::default())
        .await
        .unwrap();
    assert_eq!(places[0].name, "q=Berlin&lang=de&limit=10");
}

#[tokio::test]
async fn test_http_error_carries_status() {
    let app = Router::new().route(
        "/api",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "overloaded") }),
    );
    let client = client(spawn(app).await);

    let err = client
        .search("Berlin", None, None, RequestOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::UpstreamHttp { status: 503 }));
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_malformed_body() {
    let app = Router::new().route("/reverse", get(|| async { "<html>oops</html>" }));
    let client = client(spawn(app).await);

    let err = client
        .reverse(0.0, 0.0, RequestOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn test_cancellation_aborts_request() {
    let app = Router::new().route(
        "/api",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            COLLECTION
        }),
    );
    let client = client(spawn(app).await);

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let result = tokio::time::timeout(
        Duration::from_secs(5),
        client.search("Berlin", None, None, RequestOptions::default().with_cancel(cancel)),
    )
    .await
    .expect("cancellation should end the request promptly");

    assert!(matches!(result, Err(Error::Cancelled)));
}

#[tokio::test]
async fn test_connection_refused() {
    // Bind and drop to get a port with nothing listening
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(addr)
        .reverse(0.0, 0.0, RequestOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}
