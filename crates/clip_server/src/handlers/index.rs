//! Static usage page.

use axum::{
    http::{header, HeaderMap},
    response::Html,
};

/// Render the usage page with curl examples for the requesting host.
pub async fn index(headers: HeaderMap) -> Html<String> {
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .unwrap_or("localhost");
    Html(render_index(host))
}

fn render_index(host: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>clip</title></head>
<body>
<h1>clip: simple pastebin</h1>
<pre>
# Store a paste (default)
curl -d 'hello world' http://{host}/@

# Retrieve the default paste
curl http://{host}/@

# Store a named paste
curl -d 'my content' http://{host}/@/mykey

# Retrieve a named paste
curl http://{host}/@/mykey
</pre>
</body>
</html>
"#
    )
}
