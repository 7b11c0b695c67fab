use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Request, Response, Server};
use tokio::task::JoinHandle;

/// Maps a request path to the status and body the fake API answers with.
pub type Route = fn(&str) -> (u16, String);

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub accept: Option<String>,
    pub user_agent: Option<String>,
    pub body: String,
}

/// In-process stand-in for the billing API, records every request it sees.
pub struct MockServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
    runtime: JoinHandle<()>,
}

impl MockServer {
    pub async fn start(route: Route) -> Self {
        let port = portpicker::pick_unused_port().expect("no free port");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorder = requests.clone();

        let service = make_service_fn(move |_| {
            let recorder = recorder.clone();

            async move {
                Ok::<_, Infallible>(service_fn(move |req: Request<Body>| {
                    request_handler(req, route, recorder.clone())
                }))
            }
        });

        let address: SocketAddr = ([127, 0, 0, 1], port).into();

        let server = Server::bind(&address).serve(service);

        let runtime = tokio::spawn(async move {
            if let Err(error) = server.await {
                eprintln!("Server error: {error}");
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}"),
            requests,
            runtime,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.path).collect()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.runtime.abort();
    }
}

async fn request_handler(
    req: Request<Body>,
    route: Route,
    recorder: Arc<Mutex<Vec<Recorded>>>,
) -> Result<Response<Body>, Infallible> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    let content_type = header("content-type");
    let accept = header("accept");
    let user_agent = header("user-agent");

    let body = hyper::body::to_bytes(req.into_body())
        .await
        .unwrap_or_default();

    let (status, reply) = route(&path);

    recorder.lock().unwrap().push(Recorded {
        method,
        path,
        content_type,
        accept,
        user_agent,
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    Ok(Response::builder()
        .status(status)
        .body(reply.into())
        .unwrap())
}
