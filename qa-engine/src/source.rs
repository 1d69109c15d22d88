use std::{future::Future, pin::Pin};

use messages_client::{MemberMessage, MessagesClient, MessagesError};

/// Future returned by [`MessageSource::fetch_messages`].
pub type FetchFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<MemberMessage>, MessagesError>> + Send + 'a>>;

/// Provider of the member message collection.
///
/// [`MessagesClient`] is the production implementation; anything else
/// (fixtures, in-memory lists) can be plugged in behind the same seam.
pub trait MessageSource: Send + Sync {
    /// Fetches all messages in upstream order.
    fn fetch_messages(&self) -> FetchFuture<'_>;
}

impl MessageSource for MessagesClient {
    fn fetch_messages(&self) -> FetchFuture<'_> {
        Box::pin(MessagesClient::fetch_messages(self))
    }
}
