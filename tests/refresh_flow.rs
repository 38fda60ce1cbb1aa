//! Full refresh sequence against a mocked upstream: controller → result
//! action → reducer → rendered dashboard.

use std::sync::Arc;

use chrono::Utc;
use daily_weather::{
    action::Action,
    api::OpenWeatherClient,
    components::{
        Component, DashboardView, WeatherDisplay, WeatherDisplayProps,
        dashboard::temperature_renderer,
    },
    controller::Controller,
    effect::Effect,
    location::{FixedLocation, IpLocation},
    reducer::reducer,
    sprites::ConditionGlyph,
    state::{AppState, Coordinates, FETCH_FAILED_MESSAGE, PERMISSION_DENIED_MESSAGE, ViewState},
};
use pretty_assertions::assert_eq;
use tui_dispatch::testing::*;
use wiremock::matchers::{any, method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BODY: &str = r#"{
    "coord": {"lon": -74.0, "lat": 40.0},
    "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
    "main": {
        "temp": 15.4, "feels_like": 14.2, "temp_min": 10.1, "temp_max": 18.9,
        "pressure": 1013, "humidity": 60
    },
    "wind": {"speed": 3.2, "deg": 200},
    "sys": {"country": "US", "sunrise": 1700000000, "sunset": 1700040000},
    "name": "Testville"
}"#;

fn controller_at(server: &MockServer, coordinates: Coordinates) -> Controller {
    Controller::new(
        Arc::new(FixedLocation::new(coordinates)),
        Arc::new(OpenWeatherClient::with_url(server.uri(), "test-key")),
    )
}

fn is_refresh(generation: u64) -> impl Fn(&Effect) -> bool {
    move |effect| *effect == Effect::Refresh { generation }
}

#[tokio::test]
async fn test_refresh_renders_dashboard() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("lat", "40"))
        .and(query_param("lon", "-74"))
        .and(query_param("appid", "test-key"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_string(BODY))
        .expect(1)
        .mount(&server)
        .await;

    let controller = controller_at(&server, Coordinates::new(40.0, -74.0));
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::WeatherRefresh);
    harness.drain_effects().effects_first_matches(is_refresh(1));
    harness.complete_action(controller.refresh(1).await);
    harness.process_emitted();

    harness.assert_state(|s| s.view.is_ready());
    harness.assert_state(|s| s.coordinates == Some(Coordinates::new(40.0, -74.0)));

    let mut component = WeatherDisplay::default();
    let mut snapshot = None;
    let output = harness.render_plain(80, 36, |frame, area, state| {
        snapshot = state.view.snapshot().cloned();
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        component.render(frame, area, props);
    });
    assert!(output.contains("Testville, US"), "place missing:\n{output}");
    assert!(output.contains("clear sky"), "description missing:\n{output}");

    let snapshot = snapshot.expect("ready state carries a snapshot");
    let view = DashboardView::from_snapshot_in(&snapshot, &Utc);
    assert_eq!(view.place, "Testville, US");
    assert_eq!(view.temperature, "15°C");
    assert_eq!(view.glyph, ConditionGlyph::Sun);
    assert_eq!(view.description, "clear sky");

    let values: Vec<_> = view.tiles.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(
        values,
        vec!["22:13", "09:20", "19°C", "10°C", "3.2 m/s", "1013 hPa", "60%"]
    );

    // The temperature is drawn in a big font, so "15°C" never appears as
    // text. Render it the way the card does and find every art row on screen.
    // 80x36 leaves the card a 78x9 interior; minus the 24-column sprite area
    // and the place and refresh rows, the temperature gets 54x7.
    let art = temperature_renderer(view.celsius)
        .render_grid(&view.temperature, 54, 7)
        .expect("temperature fits the card")
        .to_plain_string();
    let rows: Vec<_> = art.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    assert!(!rows.is_empty(), "temperature rendered nothing");
    for row in rows {
        assert!(output.contains(row), "temperature row {row:?} missing:\n{output}");
    }
}

#[tokio::test]
async fn test_denied_permission_never_calls_weather_api() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_string(BODY))
        .expect(0)
        .mount(&server)
        .await;

    let controller = Controller::new(
        Arc::new(IpLocation::with_url(server.uri(), false)),
        Arc::new(OpenWeatherClient::with_url(server.uri(), "test-key")),
    );
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::WeatherRefresh);
    harness.drain_effects().effects_first_matches(is_refresh(1));
    let action = controller.refresh(1).await;
    assert_eq!(action, Action::WeatherDidDeny(1));

    harness.complete_action(action);
    harness.process_emitted();
    harness.assert_state(|s| {
        s.view == ViewState::PermissionDenied(PERMISSION_DENIED_MESSAGE.into())
    });
}

#[tokio::test]
async fn test_upstream_error_shows_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal detail"))
        .mount(&server)
        .await;

    let controller = controller_at(&server, Coordinates::new(40.0, -74.0));
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::WeatherRefresh);
    harness.complete_action(controller.refresh(1).await);
    harness.process_emitted();

    harness.assert_state(|s| s.view == ViewState::FetchFailed(FETCH_FAILED_MESSAGE.into()));
    harness.assert_state(|s| s.view.error_message().is_some_and(|m| !m.contains("500")));
    harness.assert_state(|s| s.coordinates == Some(Coordinates::new(40.0, -74.0)));
}

#[tokio::test]
async fn test_empty_conditions_is_a_fetch_failure() {
    let server = MockServer::start().await;
    let body = BODY.replace(
        r#"[{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}]"#,
        "[]",
    );
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let controller = controller_at(&server, Coordinates::new(40.0, -74.0));
    let action = controller.refresh(7).await;

    assert_eq!(
        action,
        Action::WeatherDidFail(7, Some(Coordinates::new(40.0, -74.0)))
    );
}

#[tokio::test]
async fn test_missing_country_still_renders_dashboard() {
    let server = MockServer::start().await;
    let body = BODY.replace(r#""country": "US", "#, "");
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let controller = controller_at(&server, Coordinates::new(40.0, -74.0));
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::WeatherRefresh);
    harness.complete_action(controller.refresh(1).await);
    harness.process_emitted();
    harness.assert_state(|s| s.view.is_ready());

    let mut component = WeatherDisplay::default();
    let output = harness.render_plain(80, 36, |frame, area, state| {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        component.render(frame, area, props);
    });
    assert!(output.contains("Testville"), "place missing:\n{output}");
    assert!(!output.contains("Testville,"), "dangling separator:\n{output}");
}

#[tokio::test]
async fn test_retry_after_failure_recovers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(BODY))
        .mount(&server)
        .await;

    let controller = controller_at(&server, Coordinates::new(40.0, -74.0));
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::WeatherRefresh);
    harness.drain_effects().effects_first_matches(is_refresh(1));
    harness.complete_action(controller.refresh(1).await);
    harness.process_emitted();
    harness.assert_state(|s| s.view.error_message() == Some(FETCH_FAILED_MESSAGE));

    harness.dispatch_collect(Action::WeatherRefresh);
    harness.drain_effects().effects_first_matches(is_refresh(2));
    harness.assert_state(|s| s.is_loading());

    harness.complete_action(controller.refresh(2).await);
    harness.process_emitted();
    harness.assert_state(|s| s.view.is_ready());
}
