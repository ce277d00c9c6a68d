// Chunked JSON streaming utilities
use crate::infrastructure::http_response::brotli_compress;
use axum::body::Body;
use axum::http::{header, Response, StatusCode};
use axum::response::IntoResponse;
use bytes::{BufMut, Bytes, BytesMut};
use futures::stream::Stream;
use futures::StreamExt;
use serde::Serialize;
use std::future::Future;
use tokio::sync::watch;

/// Create a chunked streaming response of length-prefixed JSON frames
pub async fn chunked_json_stream<S, T>(stream: S, compress: bool) -> Result<Response<Body>, StatusCode>
where
    S: Stream<Item = T> + Send + 'static,
    T: Serialize + Send + 'static,
{
    // Serialize before the await so the message is never held across it
    let byte_stream = stream.then(move |msg| {
        let json = serde_json::to_vec(&msg);
        async move { encode_frame(json.map_err(std::io::Error::other)?, compress).await }
    });

    let body = Body::from_stream(byte_stream);

    // Frames are compressed individually, so no Content-Encoding on the response
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/x-ndjson-framed")
        .header(header::TRANSFER_ENCODING, "chunked")
        .body(body)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Wrap serialized JSON in a frame: u32 big-endian length, then the payload
pub async fn encode_frame(buffer: Vec<u8>, compress: bool) -> Result<Bytes, std::io::Error> {
    let payload = if compress {
        brotli_compress(buffer).await?
    } else {
        buffer
    };

    let length = payload.len() as u32;
    let mut chunk = BytesMut::with_capacity(4 + payload.len());
    chunk.put_u32(length);
    chunk.put_slice(&payload);

    Ok(chunk.freeze())
}

/// Stream the current value of a watch channel and every later change
pub fn watch_stream<T>(mut rx: watch::Receiver<T>) -> impl Stream<Item = T>
where
    T: Clone + Send + Sync + 'static,
{
    async_stream::stream! {
        let current = rx.borrow_and_update().clone();
        yield current;
        while rx.changed().await.is_ok() {
            let next = rx.borrow_and_update().clone();
            yield next;
        }
    }
}

/// Helper to create a streaming response from a watch receiver, ending when `until` completes
pub async fn stream_from_watch<T, F>(rx: watch::Receiver<T>, until: F, compress: bool) -> impl IntoResponse
where
    T: Serialize + Clone + Send + Sync + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    match chunked_json_stream(watch_stream(rx).take_until(until), compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_frame_layout() {
        let chunk = encode_frame(b"\"ok\"".to_vec(), false).await.unwrap();
        assert_eq!(&chunk[..4], &[0, 0, 0, 4]);
        assert_eq!(&chunk[4..], b"\"ok\"");
    }

    #[tokio::test]
    async fn test_stream_accepts_send_only_items() {
        // Cell is Send but not Sync
        let items = futures::stream::iter(vec![std::cell::Cell::new(1u32)]);
        let response = chunked_json_stream(items, false).await.unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], &[0, 0, 0, 1, b'1']);
    }

    #[tokio::test]
    async fn test_watch_stream_yields_current_then_changes() {
        let (tx, rx) = watch::channel(1u32);
        let stream = watch_stream(rx);
        futures::pin_mut!(stream);

        assert_eq!(stream.next().await, Some(1));
        tx.send_replace(2);
        assert_eq!(stream.next().await, Some(2));
        drop(tx);
        assert_eq!(stream.next().await, None);
    }

    #[tokio::test]
    async fn test_stream_ends_when_stopped() {
        let (_tx, rx) = watch::channel(7u32);
        let response = stream_from_watch(rx, async {}, false).await.into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        // At most the first frame made it out before the stop
        assert!(body.len() <= 5);
    }
}
