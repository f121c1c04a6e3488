//! In-memory transports for unit tests.

use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};
use std::sync::Mutex;

use serde_json::{Value, json};

use crate::client::Client;
use crate::config::{ClientConfig, Credentials};
use crate::error::{BrickError, Result};
use crate::http::{HttpRequest, HttpResponse, Method, Transport};

enum Scripted {
    Respond(HttpResponse),
    Timeout,
}

/// Answers requests from a queue, recording every request it sees.
#[derive(Default)]
pub struct ScriptedTransport {
    queue: Mutex<VecDeque<Scripted>>,
    log: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn push(&self, response: HttpResponse) {
        self.queue.lock().unwrap().push_back(Scripted::Respond(response));
    }

    pub fn push_timeout(&self) {
        self.queue.lock().unwrap().push_back(Scripted::Timeout);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.log.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.log.lock().unwrap().push(request);
        match self.queue.lock().unwrap().pop_front() {
            Some(Scripted::Respond(response)) => Ok(response),
            Some(Scripted::Timeout) => Err(timeout()),
            None => panic!("no scripted response left"),
        }
    }
}

fn timeout() -> BrickError {
    BrickError::transport(std::io::Error::new(
        std::io::ErrorKind::TimedOut,
        "operation timed out",
    ))
}

pub const FAKE_USER: &str = "alice";
pub const FAKE_PASS: &str = "secret";
const API: &str = "https://acme.brickftp.com/api/rest/v1/";
const UPLOAD_HOST: &str = "https://s3.fake/upload/";
const DOWNLOAD_HOST: &str = "https://s3.fake/download/";

/// A client over a fresh [`FakeBrick`] with valid credentials.
pub fn fake_client() -> Client<FakeBrick> {
    fake_client_with(ClientConfig::default())
}

pub fn fake_client_with(config: ClientConfig) -> Client<FakeBrick> {
    Client::with_transport(Credentials::new(FAKE_USER, FAKE_PASS, "acme"), config, FakeBrick::new())
        .unwrap()
}

#[derive(Default)]
struct FakeState {
    sessions: BTreeSet<String>,
    next_id: u32,
    files: BTreeMap<String, Vec<u8>>,
    folders: BTreeSet<String>,
    // ref -> (path, transmitted bytes)
    uploads: HashMap<String, (String, Option<Vec<u8>>)>,
    log: Vec<HttpRequest>,
    timeout_next: bool,
    override_next: Option<HttpResponse>,
    reject_transmit: bool,
    reject_fetch: bool,
}

/// A small stand-in for the BrickFTP service.
///
/// Keeps files and folders in memory, issues session ids and upload refs,
/// and serves upload/download URIs on a separate host.
#[derive(Default)]
pub struct FakeBrick {
    state: Mutex<FakeState>,
}

impl FakeBrick {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state.lock().unwrap().log.clone()
    }

    /// Requests whose URL contains `fragment`.
    pub fn requests_to(&self, fragment: &str) -> Vec<HttpRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.url.contains(fragment))
            .collect()
    }

    pub fn insert_file(&self, path: &str, data: &[u8]) {
        self.state.lock().unwrap().files.insert(path.to_string(), data.to_vec());
    }

    pub fn file(&self, path: &str) -> Option<Vec<u8>> {
        self.state.lock().unwrap().files.get(path).cloned()
    }

    pub fn has_folder(&self, path: &str) -> bool {
        self.state.lock().unwrap().folders.contains(path)
    }

    /// Fail the next request with a timeout.
    pub fn timeout_next(&self) {
        self.state.lock().unwrap().timeout_next = true;
    }

    /// Answer the next request with `response` instead of routing it.
    pub fn override_next(&self, response: HttpResponse) {
        self.state.lock().unwrap().override_next = Some(response);
    }

    pub fn reject_transmit(&self) {
        self.state.lock().unwrap().reject_transmit = true;
    }

    pub fn reject_fetch(&self) {
        self.state.lock().unwrap().reject_fetch = true;
    }
}

impl Transport for FakeBrick {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut state = self.state.lock().unwrap();
        state.log.push(request.clone());

        if std::mem::take(&mut state.timeout_next) {
            return Err(timeout());
        }
        if let Some(response) = state.override_next.take() {
            return Ok(response);
        }

        Ok(state.route(&request))
    }
}

fn json_response(status: u16, value: Value) -> HttpResponse {
    HttpResponse::new(status, value.to_string())
}

fn api_error(status: u16, message: &str) -> HttpResponse {
    json_response(status, json!({ "error": message }))
}

fn parent_of(path: &str) -> &str {
    path.rfind('/').map(|i| &path[..i]).unwrap_or("")
}

fn name_of(path: &str) -> &str {
    path.rfind('/').map(|i| &path[i + 1..]).unwrap_or(path)
}

impl FakeState {
    fn route(&mut self, request: &HttpRequest) -> HttpResponse {
        if let Some(token) = request.url.strip_prefix(UPLOAD_HOST) {
            return self.transmit(request, token);
        }
        if let Some(path) = request.url.strip_prefix(DOWNLOAD_HOST) {
            return self.fetch(path);
        }
        let Some(endpoint) = request.url.strip_prefix(API) else {
            return HttpResponse::new(404, "unknown host");
        };
        let body: Value = request
            .body
            .as_deref()
            .and_then(|b| serde_json::from_slice(b).ok())
            .unwrap_or(Value::Null);

        if endpoint == "sessions.json" && request.method == Method::Post {
            return self.login(&body);
        }
        if !self.has_session_cookie(request) {
            return api_error(401, "Authentication required");
        }

        if let Some(path) = endpoint.strip_prefix("folders/") {
            let path = path.trim_end_matches('/');
            return match request.method {
                Method::Get => self.list(path),
                Method::Post => {
                    self.folders.insert(path.to_string());
                    json_response(201, json!([]))
                }
                _ => api_error(405, "Method not allowed"),
            };
        }
        if let Some(path) = endpoint.strip_prefix("files/") {
            return match request.method {
                Method::Post => self.file_action(path, &body),
                Method::Get => match self.files.get(path) {
                    Some(data) => json_response(
                        200,
                        json!({
                            "path": path,
                            "size": data.len(),
                            "download_uri": format!("{}{}", DOWNLOAD_HOST, path),
                        }),
                    ),
                    None => api_error(404, "Not Found"),
                },
                Method::Delete => self.remove(path, request.header_value("Depth")),
                Method::Put => api_error(405, "Method not allowed"),
            };
        }

        api_error(404, "Not Found")
    }

    fn login(&mut self, body: &Value) -> HttpResponse {
        if body["username"] != FAKE_USER || body["password"] != FAKE_PASS {
            return api_error(401, "Invalid username or password");
        }
        self.next_id += 1;
        let id = format!("sess-{}", self.next_id);
        self.sessions.insert(id.clone());
        json_response(201, json!({ "id": id, "username": FAKE_USER }))
    }

    fn has_session_cookie(&self, request: &HttpRequest) -> bool {
        request
            .header_value("Cookie")
            .and_then(|c| c.strip_prefix("BrickAPI="))
            .is_some_and(|id| self.sessions.contains(id))
    }

    fn list(&self, folder: &str) -> HttpResponse {
        let mut entries = Vec::new();
        for sub in self.folders.iter().filter(|f| parent_of(f) == folder) {
            entries.push(json!({
                "id": entries.len() + 1,
                "path": sub,
                "display_name": name_of(sub),
                "type": "directory",
                "size": null,
                "crc32": null,
                "md5": null,
                "mtime": "2024-01-01T00:00:00Z",
                "provided_mtime": null,
                "permissions": "rwd",
            }));
        }
        for (path, data) in self.files.iter().filter(|(p, _)| parent_of(p) == folder) {
            entries.push(json!({
                "id": entries.len() + 1,
                "path": path,
                "display_name": name_of(path),
                "type": "file",
                "size": data.len(),
                "crc32": "00000000",
                "md5": "d41d8cd98f00b204e9800998ecf8427e",
                "mtime": "2024-01-01T00:00:00Z",
                "provided_mtime": "2024-01-01T00:00:00Z",
                "permissions": "rwd",
            }));
        }
        json_response(200, Value::Array(entries))
    }

    fn file_action(&mut self, path: &str, body: &Value) -> HttpResponse {
        match body["action"].as_str() {
            Some("put") => {
                self.next_id += 1;
                let token = format!("ref-{}", self.next_id);
                self.uploads.insert(token.clone(), (path.to_string(), None));
                json_response(
                    200,
                    json!({
                        "ref": token,
                        "http_method": "PUT",
                        "upload_uri": format!("{}{}", UPLOAD_HOST, token),
                    }),
                )
            }
            Some("end") => {
                let token = body["ref"].as_str().unwrap_or_default();
                match self.uploads.remove(token) {
                    Some((target, Some(data))) if target == path => {
                        let size = data.len();
                        self.files.insert(target, data);
                        json_response(200, json!({ "path": path, "size": size }))
                    }
                    _ => api_error(400, "Upload not found or incomplete"),
                }
            }
            _ => api_error(400, "Unknown action"),
        }
    }

    fn remove(&mut self, path: &str, depth: Option<&str>) -> HttpResponse {
        if self.files.remove(path).is_some() {
            return json_response(200, json!([]));
        }
        if self.folders.contains(path) {
            let prefix = format!("{}/", path);
            let has_children = self.files.keys().any(|k| k.starts_with(&prefix))
                || self.folders.iter().any(|f| f.starts_with(&prefix));
            if has_children && depth != Some("infinity") {
                return api_error(400, "Folder not empty");
            }
            self.files.retain(|k, _| !k.starts_with(&prefix));
            self.folders.retain(|f| f != path && !f.starts_with(&prefix));
            return json_response(200, json!([]));
        }
        api_error(404, "not found")
    }

    fn transmit(&mut self, request: &HttpRequest, token: &str) -> HttpResponse {
        if request.method != Method::Put {
            return HttpResponse::new(405, "");
        }
        if self.reject_transmit {
            return HttpResponse::new(403, "<Error><Code>AccessDenied</Code></Error>");
        }
        match self.uploads.get_mut(token) {
            Some((_, data)) => {
                *data = Some(request.body.clone().unwrap_or_default());
                HttpResponse::new(200, "")
            }
            None => HttpResponse::new(404, "<Error><Code>NoSuchUpload</Code></Error>"),
        }
    }

    fn fetch(&self, path: &str) -> HttpResponse {
        if self.reject_fetch {
            return HttpResponse::new(403, "<Error><Code>AccessDenied</Code></Error>");
        }
        match self.files.get(path) {
            Some(data) => HttpResponse::new(200, data.clone()),
            None => HttpResponse::new(404, "<Error><Code>NoSuchKey</Code></Error>"),
        }
    }
}
