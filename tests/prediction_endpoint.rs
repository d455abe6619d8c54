mod support;

use support::{
    stub_server::{self, CapturedRequest},
    vidpredict_env::VidpredictEnvGuard,
};

use serde_json::json;
use std::{
    sync::mpsc::Receiver,
    time::{Duration, Instant},
};
use tempfile::TempDir;
use vidpredict::{
    config,
    egui_app::controller::{EguiController, FormMessage},
    egui_app::state::ResultKind,
    prediction::ModelKind,
};

const WAIT_LIMIT: Duration = Duration::from_secs(10);

struct ControllerHarness {
    _config: VidpredictEnvGuard,
    _temp: TempDir,
    pub controller: EguiController,
}

impl ControllerHarness {
    fn with_endpoint(base_url: &str) -> Self {
        let temp = tempfile::tempdir().expect("create tempdir");
        let config_home = temp.path().join("config");
        let app_dir = config_home.join(".vidpredict");
        std::fs::create_dir_all(&app_dir).expect("create app dir");
        std::fs::write(
            app_dir.join(config::CONFIG_FILE_NAME),
            format!("[endpoint]\nbase_url = \"{base_url}\"\n"),
        )
        .expect("write config");
        let env = VidpredictEnvGuard::set_config_home(config_home);

        let loaded = config::load_or_default().expect("load config");
        let controller = EguiController::new(&loaded).expect("build controller");
        Self {
            _config: env,
            _temp: temp,
            controller,
        }
    }

    fn edit(&mut self, name: &'static str, value: &str) {
        self.controller.dispatch(FormMessage::EditField {
            name,
            value: value.to_string(),
        });
    }

    fn fill_model1_form(&mut self) {
        self.controller
            .dispatch(FormMessage::SelectModel(Some(ModelKind::Model1)));
        self.edit("video_age_days", "3");
        self.edit("title_length_words", "8");
        self.edit("title_sentiment", "Positive");
        self.edit("category_id", "10");
        self.edit("like_count", "1500");
        self.edit("region", "US");
        self.edit("subscriber_count", "20000");
        self.controller.dispatch(FormMessage::EditControl {
            id: "viewCount1",
            value: "40000".into(),
        });
        self.controller.dispatch(FormMessage::EditControl {
            id: "likeViewRatio1",
            value: "3.75".into(),
        });
    }

    fn submit_and_wait(&mut self) {
        self.controller.dispatch(FormMessage::Submit);
        assert!(self.controller.is_prediction_in_flight());
        let deadline = Instant::now() + WAIT_LIMIT;
        while self.controller.is_prediction_in_flight() {
            assert!(Instant::now() < deadline, "prediction did not finish in time");
            std::thread::sleep(Duration::from_millis(10));
            self.controller.poll_background_jobs();
        }
    }
}

fn captured(rx: &Receiver<CapturedRequest>) -> CapturedRequest {
    rx.recv_timeout(WAIT_LIMIT).expect("stub saw a request")
}

#[test]
fn successful_prediction_posts_json_and_shows_result() {
    let (url, requests) = stub_server::serve_once("200 OK", r#"{"prediction":"Views: 42000"}"#);
    let mut harness = ControllerHarness::with_endpoint(&url);
    harness.fill_model1_form();
    harness.submit_and_wait();

    let request = captured(&requests);
    assert_eq!(request.request_line, "POST /predict?model=model1 HTTP/1.1");
    assert!(
        request
            .header("content-type")
            .is_some_and(|value| value.starts_with("application/json"))
    );
    let body: serde_json::Value = serde_json::from_str(&request.body).expect("json body");
    assert_eq!(
        body,
        json!({
            "video_age_days": 3,
            "title_length_words": 8,
            "title_sentiment": "positive",
            "category_id": 10,
            "like_count": 1500,
            "region": "us",
            "subscriber_count": 20000,
            "view_count": 40000,
            "like_view_ratio_percent": 3.75,
        })
    );

    let result = harness.controller.ui.result.as_ref().expect("result shown");
    assert_eq!(result.kind, ResultKind::Success);
    assert_eq!(result.text, "Views: 42000");
    assert!(harness.controller.can_submit());
    assert!(harness.controller.ui.decorations.celebration.is_some());
}

#[test]
fn server_error_status_is_a_network_error() {
    let (url, requests) =
        stub_server::serve_once("500 Internal Server Error", r#"{"error":"boom"}"#);
    let mut harness = ControllerHarness::with_endpoint(&url);
    harness.fill_model1_form();
    harness.submit_and_wait();
    captured(&requests);

    let result = harness.controller.ui.result.as_ref().expect("result shown");
    assert_eq!(result.kind, ResultKind::TransportError);
    assert_eq!(result.text, "Network error: HTTP error status: 500");
    assert!(harness.controller.can_submit());
}

#[test]
fn application_error_is_shown_verbatim() {
    let (url, requests) = stub_server::serve_once("200 OK", r#"{"error":"model not loaded"}"#);
    let mut harness = ControllerHarness::with_endpoint(&url);
    harness.fill_model1_form();
    harness.submit_and_wait();
    captured(&requests);

    let result = harness.controller.ui.result.as_ref().expect("result shown");
    assert_eq!(result.kind, ResultKind::ApplicationError);
    assert_eq!(result.text, "model not loaded");
    assert!(harness.controller.ui.decorations.celebration.is_none());
}

#[test]
fn unreachable_endpoint_is_a_network_error() {
    let url = stub_server::closed_port_url();
    let mut harness = ControllerHarness::with_endpoint(&url);
    harness.fill_model1_form();
    harness.submit_and_wait();

    let result = harness.controller.ui.result.as_ref().expect("result shown");
    assert_eq!(result.kind, ResultKind::TransportError);
    assert!(result.text.starts_with("Network error: "));
    assert!(harness.controller.can_submit());
}

#[test]
fn validation_failure_never_reaches_the_server() {
    let (url, requests) = stub_server::serve_once("200 OK", r#"{"prediction":"unused"}"#);
    let mut harness = ControllerHarness::with_endpoint(&url);
    harness
        .controller
        .dispatch(FormMessage::SelectModel(Some(ModelKind::Model3)));
    harness.edit("like_count", "10");
    harness.controller.dispatch(FormMessage::Submit);

    assert!(!harness.controller.is_prediction_in_flight());
    let result = harness.controller.ui.result.as_ref().expect("result shown");
    assert_eq!(result.kind, ResultKind::ValidationError);
    assert!(
        result
            .text
            .starts_with("Please fill in all required fields: ")
    );
    assert!(requests.recv_timeout(Duration::from_millis(200)).is_err());
}

#[test]
fn missing_config_file_uses_default_endpoint() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let _env = VidpredictEnvGuard::set_config_home(temp.path().to_path_buf());
    let loaded = config::load_or_default().expect("load config");
    let controller = EguiController::new(&loaded).expect("build controller");
    assert_eq!(
        controller.endpoint().base_url().as_str(),
        "http://127.0.0.1:5000/"
    );
}
