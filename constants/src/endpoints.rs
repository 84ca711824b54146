pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Base phase, `GET` with `forced_flower` and `vase` query parameters.
pub const OPTIMIZE_PATH: &str = "/optimize";

/// Extension phase, `POST` with a JSON body.
pub const OPTIMIZE_EXTEND_PATH: &str = "/optimize_extend";

/// Point cloud upload, `POST` with `arr_id` query parameter.
pub const UPLOAD_POINT_CLOUD_PATH: &str = "/upload_pointcloud";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
