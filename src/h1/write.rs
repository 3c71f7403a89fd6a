use bytes::BufMut;

use crate::headers::standard::CONTENT_LENGTH;
use crate::response::Response;

/// Write response status line, header fields, and body.
///
/// `Content-Length` is always computed from the body, any `Content-Length` in the response
/// headers is ignored.
pub fn write_response<B: BufMut>(res: &Response, mut bufm: B) {
    bufm.put_slice(res.parts().version.as_str().as_bytes());
    bufm.put_slice(b" ");
    bufm.put_slice(res.status().as_str().as_bytes());
    bufm.put_slice(b"\r\n");

    for (name, value) in res.headers() {
        if *name == CONTENT_LENGTH {
            continue;
        }
        bufm.put_slice(name.as_str().as_bytes());
        bufm.put_slice(b": ");
        bufm.put_slice(value.as_bytes());
        bufm.put_slice(b"\r\n");
    }

    let mut len = itoa::Buffer::new();
    bufm.put_slice(b"Content-Length: ");
    bufm.put_slice(len.format(res.content_length()).as_bytes());
    bufm.put_slice(b"\r\n");

    bufm.put_slice(b"\r\n");

    if let Some(body) = res.body() {
        bufm.put_slice(body);
    }
}
