//! Proxy log lines captured from Docker Desktop's backend log

pub const START: &str = r#"time="2023-08-31T13:30:17Z" level="info" msg="GoBackend: [2023-08-31T13:30:17.253279000Z][com.docker.backend.apiproxy][I] proxy << POST /containers/7c34e2e05feb57c9c3f0f7692913dee27c15facce2d3e8a83cac8a479810916a/start (111.718708ms)""#;

pub const RESTART: &str = r#"time="2023-08-31T13:30:18Z" level="info" msg="GoBackend: [2023-08-31T13:30:18.253279000Z][com.docker.backend.apiproxy][I] proxy << POST /containers/8c35e3f05feb57c9c3f0f7692913dee27c15facce2d3e8a83cac8a479810917b/restart (112.718708ms)""#;

pub const STOP: &str = r#"time="2023-08-31T13:30:18Z" level="info" msg="GoBackend: [2023-08-31T13:30:18.253279000Z][com.docker.backend.apiproxy][I] proxy << POST /containers/8c35e3f05feb57c9c3f0f7692913dee27c15facce2d3e8a83cac8a479810917b/stop (112.718708ms)""#;

pub const IMAGE_CREATE: &str = r#"time="2023-08-31T13:30:20Z" level="info" msg="GoBackend: [2023-08-31T13:30:20.253279000Z][com.docker.backend.apiproxy][I] proxy << POST /images/create?fromImage=postgres&tag=latest (114.718708ms)""#;

pub const CONTAINER_DELETE: &str = r#"time="2023-08-31T13:30:21Z" level="info" msg="GoBackend: [2023-08-31T13:30:21.253279000Z][com.docker.backend.apiproxy][I] proxy << DELETE /containers/ac37e5f05feb57c9c3f0f7692913dee27c15facce2d3e8a83cac8a479810919d (115.718708ms)""#;

pub const IMAGE_DELETE: &str = r#"time="2023-08-31T13:30:22Z" level="info" msg="GoBackend: [2023-08-31T13:30:22.253279000Z][com.docker.backend.apiproxy][I] proxy << DELETE /images/docker.io/library/postgres:latest (116.718708ms)""#;

pub const HEALTH_CHECK: &str = r#"time="2023-08-31T13:30:23Z" level="info" msg="GoBackend: [2023-08-31T13:30:23.253279000Z][com.docker.backend.apiproxy][I] proxy << GET /_ping (0.418708ms)""#;

/// Passes the relevance filter ("images") but matches no event pattern
pub const IMAGE_LIST: &str = r#"time="2023-08-31T13:30:24Z" level="info" msg="GoBackend: [2023-08-31T13:30:24.253279000Z][com.docker.backend.apiproxy][I] proxy << GET /images/json (3.218708ms)""#;
